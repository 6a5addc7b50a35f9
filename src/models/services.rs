use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceType {
    #[serde(rename = "serviceTypeID")]
    pub service_type_id: u64,
    #[serde(rename = "serviceTypeName")]
    pub service_type_name: String,
    #[serde(rename = "serviceTypeDescription", default)]
    pub service_type_description: String,
    #[serde(rename = "serviceTypeImage")]
    pub service_type_image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRate {
    #[serde(rename = "serviceRateID")]
    pub service_rate_id: u64,
    #[serde(rename = "serviceTypeID")]
    pub service_type_id: u64,
    #[serde(rename = "vehicleSizeCode")]
    pub vehicle_size_code: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
