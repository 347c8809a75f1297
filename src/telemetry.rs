//! Extraction of sensor vectors from the device's `telemetry` console output.
//!
//! The record is printed as text with each channel name followed by its
//! values, e.g. `magnetism: {x: 12, y: -340, z: 51}`. Only the channel key and
//! the first three integers after it are relied upon, so YAML-ish, JSON and
//! bracketed list renderings all parse.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::axes::Axes;
use crate::error::DeviceError;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d+(?:\.\d+)?").expect("valid number pattern"));

fn channel_key(channel: &str) -> Result<Regex, DeviceError> {
    let pattern = format!(r#"(?:^|[^\w])"?{}"?\s*[:=]"#, regex::escape(channel));
    Regex::new(&pattern).map_err(|e| DeviceError::Malformed(e.to_string()))
}

/// Find `channel` in a telemetry record and return its three axis values.
pub fn parse_channel(text: &str, channel: &str) -> Result<Axes, DeviceError> {
    let key = channel_key(channel)?;
    let found = key
        .find(text)
        .ok_or_else(|| DeviceError::MissingChannel(channel.to_string()))?;

    let mut values = [0i32; 3];
    let mut numbers = NUMBER.find_iter(&text[found.end()..]);
    for value in values.iter_mut() {
        let token = numbers.next().ok_or_else(|| {
            DeviceError::Malformed(format!("{} has fewer than three values", channel))
        })?;
        *value = token.as_str().parse().map_err(|_| {
            DeviceError::Malformed(format!("{} value {:?} is not an integer", channel, token.as_str()))
        })?;
    }

    Ok(Axes::from(values))
}
