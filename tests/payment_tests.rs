use chrono::DateTime;
use gowash_core::models::payments::Payment;
use gowash_core::{
    build_failed_update, build_paid_update, find_payment_for_appointment,
    get_appointment_payment_status,
};
use serde_json::{json, Map, Value};

fn payment(id: u64, appointment_id: u64, status: &str) -> Payment {
    Payment {
        id,
        appointment_id,
        status: status.to_string(),
        payment_date_time: None,
        extra: Map::new(),
    }
}

#[test]
fn test_find_payment_first_match_wins() {
    let payments = vec![
        payment(1, 9, "paid"),
        payment(2, 9, "failed"),
        payment(3, 10, "pending"),
    ];

    let found = find_payment_for_appointment(&payments, 9).unwrap();
    assert_eq!(found.id, 1);
    assert_eq!(found.status, "paid");
}

#[test]
fn test_find_payment_none_when_unreferenced() {
    let payments = vec![payment(1, 9, "paid")];

    assert!(find_payment_for_appointment(&payments, 42).is_none());
    assert!(find_payment_for_appointment(&[], 9).is_none());
}

#[test]
fn test_status_of_matched_payment() {
    let payments = vec![payment(1, 9, "paid")];

    assert_eq!(get_appointment_payment_status(&payments, 9), "paid");
}

#[test]
fn test_status_defaults_to_pending_when_missing() {
    let payments = vec![payment(1, 9, "paid")];

    assert_eq!(get_appointment_payment_status(&payments, 42), "pending");
    assert_eq!(get_appointment_payment_status(&[], 9), "pending");
}

#[test]
fn test_paid_update_defaults() {
    let data = build_paid_update(&Map::new());

    assert_eq!(data["status"], "paid");
    let stamp = data["paymentDateTime"].as_str().unwrap();
    DateTime::parse_from_rfc3339(stamp).unwrap();
}

#[test]
fn test_paid_update_extra_fields_override_defaults() {
    let mut extra = Map::new();
    extra.insert("status".to_string(), Value::from("refunded"));
    extra.insert("transactionID".to_string(), Value::from("tx-1"));

    let data = build_paid_update(&extra);

    assert_eq!(data["status"], "refunded");
    assert_eq!(data["transactionID"], "tx-1");
    assert!(data.contains_key("paymentDateTime"));
}

#[test]
fn test_failed_update_carries_reason() {
    let data = build_failed_update("card declined", &Map::new());

    assert_eq!(data["status"], "failed");
    assert_eq!(data["error_reason"], "card declined");
    let stamp = data["paymentDateTime"].as_str().unwrap();
    DateTime::parse_from_rfc3339(stamp).unwrap();
}

#[test]
fn test_payment_wire_format() {
    let json = r#"{"id": 3, "appointmentID": 9, "status": "paid",
                   "paymentDateTime": null, "amount": "150.00"}"#;

    let parsed: Payment = serde_json::from_str(json).unwrap();

    assert_eq!(parsed.appointment_id, 9);
    assert_eq!(parsed.payment_date_time, None);
    assert_eq!(parsed.extra["amount"], "150.00");

    let back = serde_json::to_value(&parsed).unwrap();
    assert_eq!(back["appointmentID"], 9);
    assert_eq!(back["amount"], "150.00");
}

#[test]
fn test_status_query_over_wire_payments() {
    let payments: Vec<Payment> =
        serde_json::from_value(json!([{"id": 1, "appointmentID": 9, "status": "paid"}])).unwrap();

    assert_eq!(get_appointment_payment_status(&payments, 9), "paid");
    assert_eq!(get_appointment_payment_status(&payments, 42), "pending");
}
