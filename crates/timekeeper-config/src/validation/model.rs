//! Model section validation (endpoint, name, sampling, timeouts).

use std::ops::RangeInclusive;

use crate::schema::TimekeeperConfig;

const TEMPERATURE: RangeInclusive<f64> = 0.0..=2.0;
const REQUEST_TIMEOUT_SECS: RangeInclusive<u32> = 1..=3600;
const CONNECT_TIMEOUT_SECS: RangeInclusive<u32> = 1..=300;

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &TimekeeperConfig) {
    let model = &config.model;

    let base_url = model.base_url.trim();
    if base_url.is_empty() {
        errors.push("model.base_url must not be empty".into());
    } else if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        errors.push(format!(
            "model.base_url = {:?} must start with http:// or https://",
            model.base_url
        ));
    }

    if model.name.trim().is_empty() {
        errors.push("model.name must not be empty".into());
    }

    // NaN fails `contains`, so it is rejected too.
    if !TEMPERATURE.contains(&model.temperature) {
        errors.push(format!(
            "model.temperature = {} is outside {TEMPERATURE:?}",
            model.temperature
        ));
    }

    for (name, secs, range) in [
        (
            "model.request_timeout_secs",
            model.request_timeout_secs,
            REQUEST_TIMEOUT_SECS,
        ),
        (
            "model.connect_timeout_secs",
            model.connect_timeout_secs,
            CONNECT_TIMEOUT_SECS,
        ),
    ] {
        if !range.contains(&secs) {
            errors.push(format!("{name} = {secs}s is outside {range:?}"));
        }
    }
}
