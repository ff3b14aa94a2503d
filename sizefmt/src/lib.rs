//! Conversion between byte counts and short size strings.
//!
//! Formatting picks the largest binary unit that keeps the number at or
//! above one (`byte_size(1536.0) == "1.5K"`). Parsing accepts a positive
//! number followed by a unit letter, optionally with a trailing "B"
//! (`to_bytes("1.5KB") == Ok(1536)`). Every unit is a power of 1024.

pub mod error;
pub mod format;
pub mod parse;
pub mod quantity;
pub mod unit;

pub use error::InvalidByteQuantity;
pub use format::byte_size;
pub use parse::{to_bytes, to_megabytes};
pub use quantity::ByteQuantity;
pub use unit::{
    EXABYTE, GIGABYTE, KILOBYTE, MEGABYTE, PETABYTE, TERABYTE, Unit, YOTTABYTE, ZETTABYTE,
};
