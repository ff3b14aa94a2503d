//! A byte count that reads and writes like a size string.
//!
//! [`ByteQuantity`] is meant for settings structs: it deserializes from either
//! a size string (`"512MB"`) or a plain byte count (`536870912`), and
//! serializes back as the exact byte count.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidByteQuantity;
use crate::format::byte_size;
use crate::parse::to_bytes;
use crate::unit::MEGABYTE;

/// An exact number of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ByteQuantity(i64);

impl ByteQuantity {
    pub fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> i64 {
        self.0
    }

    /// Whole megabytes, rounded down.
    pub fn megabytes(&self) -> i64 {
        self.0 / MEGABYTE as i64
    }
}

impl From<ByteQuantity> for i64 {
    fn from(quantity: ByteQuantity) -> Self {
        quantity.0
    }
}

impl std::str::FromStr for ByteQuantity {
    type Err = InvalidByteQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_bytes(s).map(Self)
    }
}

impl std::fmt::Display for ByteQuantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", byte_size(self.0 as f64))
    }
}

impl Serialize for ByteQuantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

/// Shapes accepted on the wire before validation.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Bytes(i64),
    Oversized(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for ByteQuantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawQuantity::deserialize(deserializer)? {
            RawQuantity::Bytes(bytes) if bytes < 0 => Err(serde::de::Error::custom(
                format!("byte count must not be negative, got {}", bytes),
            )),
            RawQuantity::Bytes(bytes) => Ok(Self(bytes)),
            RawQuantity::Oversized(bytes) => Err(serde::de::Error::custom(format!(
                "byte count {} is too large for a signed 64-bit value",
                bytes
            ))),
            RawQuantity::Text(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "tests/quantity_tests.rs"]
mod tests;
