use kernel::model::{geography::Municipality, id::MunicipalityId};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalitiesResponse {
    pub items: Vec<MunicipalityResponse>,
}

impl From<Vec<Municipality>> for MunicipalitiesResponse {
    fn from(value: Vec<Municipality>) -> Self {
        Self {
            items: value.into_iter().map(MunicipalityResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MunicipalityResponse {
    pub municipality_id: MunicipalityId,
    pub name: String,
    pub department: String,
    pub region: String,
}

impl From<Municipality> for MunicipalityResponse {
    fn from(value: Municipality) -> Self {
        let Municipality {
            municipality_id,
            name,
            department,
            region,
        } = value;
        Self {
            municipality_id,
            name,
            department,
            region,
        }
    }
}
