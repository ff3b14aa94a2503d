use thiserror::Error;

/// The one error the parser reports.
///
/// Missing units, unknown units, unparseable numbers and non-positive values
/// all collapse into this value so callers can surface a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "byte quantity must be a positive integer with a unit of measurement like M, MB, G, or GB"
)]
pub struct InvalidByteQuantity;
