use crate::models::services::{ServiceRate, ServiceType};

/// Every rate referencing a service type. Deleting a service type has to
/// delete these first, the backend does not cascade.
pub fn rates_for_service_type(rates: &[ServiceRate], service_type_id: u64) -> Vec<&ServiceRate> {
    rates
        .iter()
        .filter(|rate| rate.service_type_id == service_type_id)
        .collect()
}

/// Normalizes a stored image path into a full URL under `base_url`.
pub fn get_image_url(base_url: &str, image_path: &str) -> String {
    if image_path.is_empty() {
        return String::new();
    }
    // already absolute
    if image_path.starts_with("http") {
        return image_path.to_string();
    }

    let clean_path = image_path.trim_start_matches('/');
    if clean_path.starts_with("storage/") {
        format!("{}/{}", base_url, clean_path)
    } else {
        // service_images/, service-images/, serviceTypeImages/ and friends
        // all live under storage/
        format!("{}/storage/{}", base_url, clean_path)
    }
}

pub fn service_image_url(base_url: &str, service_type: &ServiceType) -> String {
    match &service_type.service_type_image {
        Some(path) => get_image_url(base_url, path),
        None => String::new(),
    }
}
