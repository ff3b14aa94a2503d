/// One kilobyte (1024 bytes).
pub const KILOBYTE: f64 = 1024.0;
/// One megabyte (1024 kilobytes).
pub const MEGABYTE: f64 = 1024.0 * KILOBYTE;
/// One gigabyte (1024 megabytes).
pub const GIGABYTE: f64 = 1024.0 * MEGABYTE;
/// One terabyte (1024 gigabytes).
pub const TERABYTE: f64 = 1024.0 * GIGABYTE;
/// One petabyte (1024 terabytes).
pub const PETABYTE: f64 = 1024.0 * TERABYTE;
/// One exabyte (1024 petabytes).
pub const EXABYTE: f64 = 1024.0 * PETABYTE;
/// One zettabyte (1024 exabytes).
pub const ZETTABYTE: f64 = 1024.0 * EXABYTE;
/// One yottabyte (1024 zettabytes).
pub const YOTTABYTE: f64 = 1024.0 * ZETTABYTE;

/// Size classes, each a power-of-1024 multiple of a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Byte,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl Unit {
    /// Every unit, smallest first.
    pub const ALL: [Unit; 9] = [
        Self::Byte,
        Self::Kilo,
        Self::Mega,
        Self::Giga,
        Self::Tera,
        Self::Peta,
        Self::Exa,
        Self::Zetta,
        Self::Yotta,
    ];

    /// Number of bytes in one of this unit.
    pub fn scale(&self) -> f64 {
        match self {
            Self::Byte => 1.0,
            Self::Kilo => KILOBYTE,
            Self::Mega => MEGABYTE,
            Self::Giga => GIGABYTE,
            Self::Tera => TERABYTE,
            Self::Peta => PETABYTE,
            Self::Exa => EXABYTE,
            Self::Zetta => ZETTABYTE,
            Self::Yotta => YOTTABYTE,
        }
    }

    /// Single-letter label used when formatting (e.g. "K", "M").
    pub fn letter(&self) -> &'static str {
        match self {
            Self::Byte => "B",
            Self::Kilo => "K",
            Self::Mega => "M",
            Self::Giga => "G",
            Self::Tera => "T",
            Self::Peta => "P",
            Self::Exa => "E",
            Self::Zetta => "Z",
            Self::Yotta => "Y",
        }
    }

    /// Full name of this unit.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Kilo => "Kilobyte",
            Self::Mega => "Megabyte",
            Self::Giga => "Gigabyte",
            Self::Tera => "Terabyte",
            Self::Peta => "Petabyte",
            Self::Exa => "Exabyte",
            Self::Zetta => "Zettabyte",
            Self::Yotta => "Yottabyte",
        }
    }

    /// Resolve a parseable unit suffix, ignoring ASCII case.
    ///
    /// Only bytes through terabytes are accepted. K, M, G and T may carry a
    /// trailing "B" ("KB", "mb"); a bare "B" is the byte unit and "BB" is not
    /// a unit at all.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        let upper = suffix.to_ascii_uppercase();
        match upper.as_str() {
            "B" => Some(Self::Byte),
            "K" | "KB" => Some(Self::Kilo),
            "M" | "MB" => Some(Self::Mega),
            "G" | "GB" => Some(Self::Giga),
            "T" | "TB" => Some(Self::Tera),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
#[path = "tests/unit_tests.rs"]
mod tests;
