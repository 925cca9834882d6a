use crate::model::id::MunicipalityId;

/// Flat geographic reference row. Read-only from the core's perspective.
#[derive(Debug, Clone)]
pub struct Municipality {
    pub municipality_id: MunicipalityId,
    pub name: String,
    pub department: String,
    pub region: String,
}
