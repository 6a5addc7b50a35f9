pub mod appointment;
pub mod customer;
pub mod models;
pub mod payment;
pub mod service;
pub mod utils;

pub use appointment::{
    get_appointments_by_date, get_confirmed_appointments, group_by_customer, CustomerGroup,
};
pub use customer::find_customer;
pub use payment::{
    build_failed_update, build_paid_update, find_payment_for_appointment,
    get_appointment_payment_status,
};
pub use service::{get_image_url, rates_for_service_type, service_image_url};
