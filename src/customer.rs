use crate::models::customers::Customer;

/// Fallback lookup for when the single-customer resource is unavailable:
/// scan the full customer list by id.
pub fn find_customer(customers: &[Customer], customer_id: u64) -> Option<&Customer> {
    customers.iter().find(|customer| customer.id == customer_id)
}
