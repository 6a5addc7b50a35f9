mod responses;

pub use responses::CustomerGroup;

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::models::appointments::{is_confirmed_status, is_grouping_status, Appointment};
use crate::models::customers::Customer;
use crate::utils::{compare_times, date_part};

struct GroupAcc {
    customer: Option<Customer>,
    appointments: Vec<Appointment>,
    nearest: Option<Appointment>,
    nearest_time: Option<NaiveDateTime>,
}

/// Folds a flat appointment list into per-customer groups, earliest nearest
/// appointment first. Orphan appointments (no customer reference) never form
/// a group; groups with no confirmed or completed appointment are dropped.
pub fn group_by_customer(appointments: &[Appointment]) -> Vec<CustomerGroup> {
    let mut index = HashMap::new();
    let mut accs: Vec<GroupAcc> = Vec::new();

    for appo in appointments {
        let customer_id = match appo.customer_id {
            Some(id) => id,
            None => continue,
        };

        let slot = match index.get(&customer_id) {
            Some(&slot) => slot,
            None => {
                accs.push(GroupAcc {
                    customer: appo.customer.clone(),
                    appointments: Vec::new(),
                    nearest: None,
                    nearest_time: None,
                });
                index.insert(customer_id, accs.len() - 1);
                accs.len() - 1
            }
        };

        if !is_grouping_status(&appo.status) {
            continue;
        }

        let time = appo.parsed_time();
        if time.is_none() {
            debug!("appointment {} has an unparsable time", appo.id);
        }

        let acc = &mut accs[slot];
        acc.appointments.push(appo.clone());
        // first strictly earliest wins, so ties keep the first-seen one
        if acc.nearest.is_none() || compare_times(time, acc.nearest_time) == Ordering::Less {
            acc.nearest = Some(appo.clone());
            acc.nearest_time = time;
        }
    }

    accs.retain(|acc| !acc.appointments.is_empty());
    accs.sort_by(|a, b| compare_times(a.nearest_time, b.nearest_time));

    accs.into_iter()
        .map(|acc| CustomerGroup {
            customer: acc.customer,
            appointment_count: acc.appointments.len(),
            appointments: acc.appointments,
            nearest_appointment: acc.nearest,
        })
        .collect()
}

/// Confirmed appointments only, earliest first.
pub fn get_confirmed_appointments(appointments: &[Appointment]) -> Vec<Appointment> {
    let mut confirmed: Vec<Appointment> = appointments
        .iter()
        .filter(|appo| is_confirmed_status(&appo.status))
        .cloned()
        .collect();
    confirmed.sort_by(|a, b| compare_times(a.parsed_time(), b.parsed_time()));
    confirmed
}

/// Appointments whose date component equals `date` exactly.
pub fn get_appointments_by_date(appointments: &[Appointment], date: &str) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appo| date_part(&appo.appointment_date_time) == date)
        .cloned()
        .collect()
}
