use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker the report uses for values it does not know.
pub const UNKNOWN_SENTINEL: &str = "UNK";

/// A numeric table cell after clean-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    Known(Decimal),
    /// "UNK" or text that is not a number.
    Unknown,
    /// Blank cell or a dash placeholder.
    Missing,
}

impl Quantity {
    /// The value, or zero when unknown or missing.
    pub fn or_zero(&self) -> Decimal {
        match self {
            Quantity::Known(v) => *v,
            Quantity::Unknown | Quantity::Missing => Decimal::ZERO,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Quantity::Known(_))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Known(v) => write!(f, "{v}"),
            Quantity::Unknown => write!(f, "{UNKNOWN_SENTINEL}"),
            Quantity::Missing => write!(f, "-"),
        }
    }
}

/// Parse a table cell into a Quantity.
///
/// Handles formats like:
/// - "1,500" -> Known(1500)
/// - "-20" -> Known(-20)
/// - "$1,000,000" -> Known(1000000)
/// - "$2.5M" -> Known(2500000)
/// - "75%" -> Known(75)
/// - "120/40" -> Known(120) (composite, first component wins)
/// - "UNK" -> Unknown
/// - "", "-", "---" -> Missing
pub fn parse_quantity(s: &str) -> Quantity {
    let s = s.trim();

    if s.is_empty() || s.chars().all(|c| c == '-') {
        return Quantity::Missing;
    }

    if s.eq_ignore_ascii_case(UNKNOWN_SENTINEL) {
        return Quantity::Unknown;
    }

    // Composite values like "120/40": the leading figure is the total
    let first = s.split('/').next().unwrap_or(s);

    let cleaned: String = first
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%'))
        .collect();

    match parse_scaled(&cleaned) {
        Some(v) => Quantity::Known(v),
        None => Quantity::Unknown,
    }
}

/// Parse a decimal with an optional K/M/B magnitude suffix.
fn parse_scaled(s: &str) -> Option<Decimal> {
    let (digits, scale) = match s.chars().last()? {
        'K' | 'k' => (&s[..s.len() - 1], Decimal::from(1_000)),
        'M' | 'm' => (&s[..s.len() - 1], Decimal::from(1_000_000)),
        'B' | 'b' => (&s[..s.len() - 1], Decimal::from(1_000_000_000)),
        _ => (s, Decimal::ONE),
    };
    let value = Decimal::from_str(digits).ok()?;
    value.checked_mul(scale)
}
