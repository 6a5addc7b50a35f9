use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::customers::Customer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    #[serde(rename = "customerID")]
    pub customer_id: Option<u64>,
    pub customer: Option<Customer>,
    #[serde(rename = "appointmentDateTime")]
    pub appointment_date_time: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Appointment {
    /// Scheduled time, or `None` when the wire string does not parse.
    pub fn parsed_time(&self) -> Option<NaiveDateTime> {
        crate::utils::parse_time_str(&self.appointment_date_time).ok()
    }
}

pub const APPOINT_STATUS_PENDING: &str = "pending";
pub const APPOINT_STATUS_CONFIRMED: &str = "confirmed";
pub const APPOINT_STATUS_COMPLETED: &str = "completed";
pub const APPOINT_STATUS_CANCELLED: &str = "cancelled";
pub const APPOINT_STATUS_FAILED: &str = "failed";

/// Statuses that count towards a customer's group.
pub fn is_grouping_status(status: &str) -> bool {
    status == APPOINT_STATUS_CONFIRMED || status == APPOINT_STATUS_COMPLETED
}

/// Stricter filter used by the confirmed-only listing.
pub fn is_confirmed_status(status: &str) -> bool {
    status == APPOINT_STATUS_CONFIRMED
}
