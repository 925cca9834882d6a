use kernel::model::{geography::Municipality, id::MunicipalityId};

#[derive(sqlx::FromRow)]
pub struct MunicipalityRow {
    pub municipality_id: MunicipalityId,
    pub name: String,
    pub department: String,
    pub region: String,
}

impl From<MunicipalityRow> for Municipality {
    fn from(value: MunicipalityRow) -> Self {
        let MunicipalityRow {
            municipality_id,
            name,
            department,
            region,
        } = value;
        Municipality {
            municipality_id,
            name,
            department,
            region,
        }
    }
}
