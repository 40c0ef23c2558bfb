// Envelope decoding: the {success, data, message} contract of the
// hierarchy endpoint, without a live backend.

use sangathan::{aggregate, decode_snapshot, FetchError, HierarchyError, Scope};

#[test]
fn success_envelope_decodes_both_collections() {
    let body = r#"{
        "success": true,
        "data": {
            "stateHierarchy": [
                {"id": 1, "levelType": "District", "name": "North"},
                {"id": 2, "ParentId": 1, "levelType": "Assembly", "name": "North East"}
            ],
            "afterAssemblyHierarchy": [
                {"id": 10, "parentAssemblyId": 2, "levelName": "Block", "name": "Block 1"},
                {"id": 11, "parentId": 10, "levelName": "Mandal", "name": "Mandal 1"}
            ]
        }
    }"#;

    let snapshot = decode_snapshot(body).unwrap();
    assert_eq!(snapshot.state_nodes().len(), 2);
    assert_eq!(snapshot.org_nodes().len(), 2);
    assert_eq!(snapshot.state_nodes()[1].parent, Some(1));

    let counts = aggregate(&snapshot, Scope::Assembly { assembly_id: 2 }).unwrap();
    assert_eq!(counts.blocks, 1);
    assert_eq!(counts.mandals, 1);
}

#[test]
fn display_level_name_wins_over_level_name() {
    let body = r#"{
        "success": true,
        "data": {
            "stateHierarchy": [],
            "afterAssemblyHierarchy": [
                {"id": 10, "parentAssemblyId": 2, "levelName": "Block", "display_level_name": "Shakti Kendra"}
            ]
        }
    }"#;

    let snapshot = decode_snapshot(body).unwrap();
    assert_eq!(snapshot.org_nodes()[0].level_key, "shakti kendra");
}

#[test]
fn failure_envelope_surfaces_the_backend_message() {
    let body = r#"{"success": false, "message": "state not found"}"#;
    match decode_snapshot(body) {
        Err(FetchError::Backend { message }) => assert_eq!(message, "state not found"),
        other => panic!("expected backend error, got {other:?}"),
    }
}

#[test]
fn failure_envelope_without_message_still_fails() {
    let body = r#"{"success": false}"#;
    assert!(matches!(decode_snapshot(body), Err(FetchError::Backend { .. })));
}

#[test]
fn success_without_data_is_missing_data() {
    let body = r#"{"success": true}"#;
    assert!(matches!(decode_snapshot(body), Err(FetchError::MissingData)));
}

#[test]
fn malformed_body_is_a_decode_error() {
    assert!(matches!(decode_snapshot("not json"), Err(FetchError::Decode(_))));
}

#[test]
fn duplicate_ids_in_a_collection_are_rejected() {
    let body = r#"{
        "success": true,
        "data": {
            "stateHierarchy": [
                {"id": 1, "levelType": "District"},
                {"id": 1, "levelType": "District"}
            ],
            "afterAssemblyHierarchy": []
        }
    }"#;

    match decode_snapshot(body) {
        Err(FetchError::Invariant(HierarchyError::DuplicateId { id })) => assert_eq!(id, 1),
        other => panic!("expected duplicate-id error, got {other:?}"),
    }
}

#[test]
fn missing_level_label_lands_in_the_unknown_bucket() {
    let body = r#"{
        "success": true,
        "data": {
            "stateHierarchy": [],
            "afterAssemblyHierarchy": [
                {"id": 10, "parentAssemblyId": 2}
            ]
        }
    }"#;

    let snapshot = decode_snapshot(body).unwrap();
    assert_eq!(snapshot.org_nodes()[0].level_key, "unknown");
}
