use std::sync::OnceLock;

use regex::Regex;

use crate::error::InvalidByteQuantity;
use crate::unit::{MEGABYTE, Unit};

/// Parse a size string such as "5M", "2.5GB" or "512b" into a byte count.
///
/// Surrounding whitespace is ignored and units are case-insensitive. The
/// number must be positive and must be followed by one of B, K, M, G, T,
/// KB, MB, GB or TB. The scaled value is truncated toward zero, so "0.5B"
/// parses to 0.
pub fn to_bytes(s: &str) -> Result<i64, InvalidByteQuantity> {
    let trimmed = s.trim();

    let Some((number, unit)) = split_quantity(trimmed) else {
        log::debug!("to_bytes: no number/unit match in {:?}", s);
        return Err(InvalidByteQuantity);
    };

    let value: f64 = number.parse().map_err(|_| {
        log::debug!("to_bytes: unparseable number {:?} in {:?}", number, s);
        InvalidByteQuantity
    })?;
    if value <= 0.0 {
        log::debug!("to_bytes: non-positive value {} in {:?}", value, s);
        return Err(InvalidByteQuantity);
    }

    let bytes = (value * unit.scale()).trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if bytes >= i64::MAX as f64 {
        log::debug!("to_bytes: {:?} does not fit in 64 bits at {} scale", s, unit.name());
        return Err(InvalidByteQuantity);
    }

    log::trace!("to_bytes: {:?} is {} bytes ({})", s, bytes, unit.name());
    Ok(bytes as i64)
}

/// Parse a size string and express it in whole megabytes, rounding down.
///
/// "5K" is 0 megabytes, "2G" is 2048.
pub fn to_megabytes(s: &str) -> Result<i64, InvalidByteQuantity> {
    let bytes = to_bytes(s)?;
    Ok(bytes / MEGABYTE as i64)
}

/// Split `-?digits(.digits)?unit` into its numeric text and unit.
///
/// Returns `None` unless the whole input matches.
fn split_quantity(s: &str) -> Option<(&str, Unit)> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let regex = PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(-?[0-9]+(?:\.[0-9]+)?)([KMGT]B?|B)$")
            .expect("Failed to compile byte quantity pattern")
    });

    let captures = regex.captures(s)?;
    let number = captures.get(1)?.as_str();
    let unit = Unit::from_suffix(captures.get(2)?.as_str())?;
    Some((number, unit))
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
