// Aggregation scenarios over the two fetched collections:
//   per-scope counting, alias buckets, dynamic levels, boundary cases

use sangathan::{aggregate, count_by_level_type, HierarchySnapshot, OrgNode, Scope, StateNode};

fn state_node(id: u64, parent: Option<u64>, level_type: &str) -> StateNode {
    StateNode { id, parent, level_type: level_type.to_string(), name: format!("node {id}") }
}

fn org(id: u64, parent: Option<u64>, assembly: Option<u64>, label: &str) -> OrgNode {
    OrgNode::new(id, parent, assembly, format!("org {id}"), Some(label))
}

#[test]
fn count_by_level_type_matches_exactly() {
    let nodes = vec![
        state_node(1, None, "District"),
        state_node(2, Some(1), "Assembly"),
        state_node(3, Some(1), "Assembly"),
    ];
    assert_eq!(count_by_level_type(&nodes, "District"), 1);
    assert_eq!(count_by_level_type(&nodes, "Assembly"), 2);
    assert_eq!(count_by_level_type(&nodes, "assembly"), 0);
}

#[test]
fn state_scope_counts_every_row() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District"), state_node(2, Some(1), "Assembly")],
        vec![org(10, None, Some(2), "Block")],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::State).unwrap();
    assert_eq!(counts.districts, 1);
    assert_eq!(counts.assemblies, 1);
    assert_eq!(counts.blocks, 1);
    assert_eq!(counts.levels.get("block"), Some(&1));
}

#[test]
fn assembly_scope_finds_descendants_two_levels_deep() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District"), state_node(2, Some(1), "Assembly")],
        vec![org(10, None, Some(2), "Block"), org(11, Some(10), None, "Mandal")],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::Assembly { assembly_id: 2 }).unwrap();
    assert_eq!(counts.districts, 0);
    assert_eq!(counts.assemblies, 1);
    assert_eq!(counts.blocks, 1);
    assert_eq!(counts.mandals, 1);
}

#[test]
fn district_scope_unions_descendants_across_assemblies() {
    let snapshot = HierarchySnapshot::new(
        vec![
            state_node(1, None, "District"),
            state_node(2, Some(1), "Assembly"),
            state_node(3, Some(1), "Assembly"),
            state_node(4, None, "District"),
            state_node(5, Some(4), "Assembly"),
        ],
        vec![
            org(10, None, Some(2), "Block"),
            org(11, Some(10), None, "Mandal"),
            org(12, Some(11), None, "Booth"),
            org(20, None, Some(3), "Block"),
            // Belongs to district 4; must not leak into district 1 counts.
            org(30, None, Some(5), "Block"),
        ],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::District { district_id: 1 }).unwrap();
    assert_eq!(counts.districts, 1);
    assert_eq!(counts.assemblies, 2);
    assert_eq!(counts.blocks, 2);
    assert_eq!(counts.mandals, 1);
    assert_eq!(counts.booths, 1);
}

#[test]
fn district_with_no_assemblies_counts_only_itself() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District")],
        vec![],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::District { district_id: 1 }).unwrap();
    assert_eq!(counts.districts, 1);
    assert_eq!(counts.assemblies, 0);
    assert_eq!(counts.blocks, 0);
    assert_eq!(counts.mandals, 0);
    assert_eq!(counts.polling_centers, 0);
    assert_eq!(counts.booths, 0);
    assert!(counts.levels.is_empty());
}

#[test]
fn empty_after_assembly_collection_is_zero_in_every_scope() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District"), state_node(2, Some(1), "Assembly")],
        vec![],
    )
    .unwrap();

    for scope in [
        Scope::State,
        Scope::District { district_id: 1 },
        Scope::Assembly { assembly_id: 2 },
    ] {
        let counts = aggregate(&snapshot, scope).unwrap();
        assert_eq!(counts.blocks, 0);
        assert_eq!(counts.mandals, 0);
        assert_eq!(counts.polling_centers, 0);
        assert_eq!(counts.booths, 0);
        assert!(counts.levels.is_empty());
    }
}

#[test]
fn unknown_level_names_keep_their_own_bucket() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District"), state_node(2, Some(1), "Assembly")],
        vec![org(10, None, Some(2), "Ward")],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::State).unwrap();
    assert_eq!(counts.levels.get("ward"), Some(&1));
    assert_eq!(counts.blocks, 0);
}

#[test]
fn aggregation_is_idempotent() {
    let snapshot = HierarchySnapshot::new(
        vec![
            state_node(1, None, "District"),
            state_node(2, Some(1), "Assembly"),
        ],
        vec![
            org(10, None, Some(2), "Block"),
            org(11, Some(10), None, "Mandal"),
            org(12, Some(10), None, "Shakti Kendra"),
        ],
    )
    .unwrap();

    for scope in [Scope::State, Scope::District { district_id: 1 }, Scope::Assembly { assembly_id: 2 }] {
        let first = aggregate(&snapshot, scope).unwrap();
        let second = aggregate(&snapshot, scope).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn dynamic_levels_count_alongside_fixed_ones() {
    let snapshot = HierarchySnapshot::new(
        vec![state_node(1, None, "District"), state_node(2, Some(1), "Assembly")],
        vec![
            org(10, None, Some(2), "Block"),
            org(11, Some(10), None, "Shakti Kendra"),
            org(12, Some(10), None, "Shakti Kendra"),
        ],
    )
    .unwrap();

    let counts = aggregate(&snapshot, Scope::Assembly { assembly_id: 2 }).unwrap();
    assert_eq!(counts.blocks, 1);
    assert_eq!(counts.levels.get("shakti kendra"), Some(&2));
}
