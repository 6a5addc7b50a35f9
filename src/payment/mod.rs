mod requests;

pub use requests::{build_failed_update, build_paid_update};

use crate::models::payments::{Payment, PAYMENT_STATUS_PENDING};

/// Linear scan over the payment snapshot, first match by appointment
/// reference wins. The backend keeps no payment-by-appointment index, so the
/// reference is not assumed unique.
pub fn find_payment_for_appointment(payments: &[Payment], appointment_id: u64) -> Option<&Payment> {
    payments
        .iter()
        .find(|payment| payment.appointment_id == appointment_id)
}

/// Best-effort payment status for an appointment. An appointment with no
/// payment row reads as "pending" -- indistinguishable from a payment that
/// exists in the pending state, which is what the checkout flow expects.
pub fn get_appointment_payment_status(payments: &[Payment], appointment_id: u64) -> String {
    match find_payment_for_appointment(payments, appointment_id) {
        Some(payment) => payment.status.clone(),
        None => PAYMENT_STATUS_PENDING.to_string(),
    }
}
