use serde::Deserialize;

/// Wire shape of the status service reply. Every field is optional so a
/// partial payload still deserializes and the missing piece can be named.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub status: Option<String>,
    pub data: Option<StatusData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusData {
    pub version: Option<String>,
    pub online: Option<u32>,
    pub max: Option<u32>,
    pub description: Option<String>,
    #[serde(rename = "queryTime")]
    pub query_time: Option<u64>,
}
