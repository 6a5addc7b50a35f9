use serde::Serialize;

use crate::models::appointments::Appointment;
use crate::models::customers::Customer;

/// Per-customer aggregation result. Recomputed from scratch on every
/// `group_by_customer` call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerGroup {
    pub customer: Option<Customer>,
    pub appointments: Vec<Appointment>,
    #[serde(rename = "nearestAppointment")]
    pub nearest_appointment: Option<Appointment>,
    #[serde(rename = "appointmentCount")]
    pub appointment_count: usize,
}
