use chrono::Utc;
use serde_json::{Map, Value};

use crate::models::payments::{PAYMENT_STATUS_FAILED, PAYMENT_STATUS_PAID};
use crate::utils::format_payment_time;

/// Update body marking a payment as paid. Defaults go in first, then the
/// caller's transaction fields, so callers can override any default.
pub fn build_paid_update(extra: &Map<String, Value>) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("status".to_string(), Value::from(PAYMENT_STATUS_PAID));
    data.insert(
        "paymentDateTime".to_string(),
        Value::from(format_payment_time(&Utc::now())),
    );
    for (key, value) in extra {
        data.insert(key.clone(), value.clone());
    }
    data
}

/// Update body marking a payment as failed, with the gateway's reason.
pub fn build_failed_update(reason: &str, extra: &Map<String, Value>) -> Map<String, Value> {
    let mut data = Map::new();
    data.insert("status".to_string(), Value::from(PAYMENT_STATUS_FAILED));
    data.insert("error_reason".to_string(), Value::from(reason));
    data.insert(
        "paymentDateTime".to_string(),
        Value::from(format_payment_time(&Utc::now())),
    );
    for (key, value) in extra {
        data.insert(key.clone(), value.clone());
    }
    data
}
