/// The caller-selected vantage point that determines which subset of the
/// hierarchy is counted and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole state.
    State,
    /// One district and everything beneath it.
    District { district_id: u64 },
    /// One assembly and everything beneath it.
    Assembly { assembly_id: u64 },
}

impl Scope {
    /// Derive the scope from optional district/assembly ids. An assembly id
    /// wins over a district id when both are given.
    pub fn resolve(district_id: Option<u64>, assembly_id: Option<u64>) -> Self {
        match (district_id, assembly_id) {
            (_, Some(assembly_id)) => Scope::Assembly { assembly_id },
            (Some(district_id), None) => Scope::District { district_id },
            (None, None) => Scope::State,
        }
    }
}
