use std::cmp::Ordering;

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub fn parse_time_str<S: AsRef<str>>(s: S) -> anyhow::Result<NaiveDateTime> {
    const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

    NaiveDateTime::parse_from_str(s.as_ref(), TIME_FMT).context("bad appointment time")
}

pub fn format_payment_time(time: &DateTime<Utc>) -> String {
    const TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    time.format(TIME_FMT).to_string()
}

/// Date component of a wire timestamp, i.e. the text before the first space.
/// Compared as opaque text, not as a calendar value.
pub fn date_part(time_str: &str) -> &str {
    time_str.split(' ').next().unwrap_or("")
}

/// Total order over optional appointment times. Appointments without a
/// parseable time sort after all appointments that have one.
pub fn compare_times(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// List resources come back either bare (`[...]`) or wrapped as
/// `{ "data": [...] }` depending on the endpoint.
pub fn unwrap_list<T: DeserializeOwned>(value: Value) -> anyhow::Result<Vec<T>> {
    match value {
        Value::Array(_) => serde_json::from_value(value).context("bad list data"),
        Value::Object(mut map) => {
            let inner = map.remove("data").context("no list data")?;
            serde_json::from_value(inner).context("bad list data")
        }
        _ => bail!("not a list"),
    }
}
