use crate::unit::Unit;

/// Format a byte count as a short human-readable string ("10M", "12.5K").
///
/// The largest unit whose scale does not exceed `bytes` is chosen, the
/// quotient is rounded to one decimal place and a trailing ".0" is dropped.
/// Zero prints as "0" with no unit. Anything below one kilobyte, including
/// negative counts, is printed in bytes. NaN prints as "NaNB", and a
/// quotient too large for single precision prints as "+Inf" or "-Inf".
pub fn byte_size(bytes: f64) -> String {
    let unit = Unit::ALL[1..]
        .iter()
        .rev()
        .copied()
        .find(|unit| bytes >= unit.scale());

    let unit = match unit {
        Some(unit) => unit,
        None if bytes == 0.0 => return "0".to_string(),
        None => Unit::Byte,
    };

    // Rounded at single precision, so values like 10.05 land on "10.1".
    let value = (bytes / unit.scale()) as f32;
    let text = if value.is_infinite() {
        // Quotient past f32::MAX; always signed.
        let sign = if value > 0.0 { "+" } else { "-" };
        format!("{}Inf", sign)
    } else {
        format!("{:.1}", value)
    };
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}{}", text, unit.letter())
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
