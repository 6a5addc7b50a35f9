use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    #[serde(rename = "appointmentID")]
    pub appointment_id: u64,
    pub status: String,
    #[serde(rename = "paymentDateTime")]
    pub payment_date_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub const PAYMENT_STATUS_PENDING: &str = "pending";
pub const PAYMENT_STATUS_PAID: &str = "paid";
pub const PAYMENT_STATUS_FAILED: &str = "failed";
