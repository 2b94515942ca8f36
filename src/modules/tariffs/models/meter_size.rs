use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote characters stripped from meter-size labels before lookup
const QUOTE_CHARS: &[char] = &['"', '\u{201C}', '\u{201D}', '\u{201E}', '\u{2033}'];

/// Maintenance service charge (in cents) per normalized meter size
const MAINTENANCE_CHARGES: &[(&str, i64)] = &[
    ("1/2", 150),
    ("15mm", 150),
    ("3/4", 200),
    ("20mm", 200),
    ("1", 300),
    ("25mm", 300),
    ("1 1/4", 400),
    ("40mm", 400),
    ("1 1/2", 400),
    ("32mm", 400),
    ("2", 600),
    ("50mm", 600),
    ("3", 1000),
    ("75mm", 1000),
    ("4", 2000),
    ("100mm", 2000),
    ("6", 3500),
    ("150mm", 3500),
    ("8", 5000),
    ("200mm", 5000),
];

/// Charge applied when the size is not in the table (the 1/2" charge)
const DEFAULT_MAINTENANCE_CHARGE_CENTS: i64 = 150;

/// Meter size label as stored on a customer profile, normalized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct MeterSize(String);

impl MeterSize {
    /// Normalizes a free-form label: quote characters removed, surrounding
    /// whitespace trimmed
    pub fn new(label: &str) -> Self {
        let stripped: String = label.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
        Self(stripped.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the normalized label is in the maintenance charge table
    pub fn is_recognized(&self) -> bool {
        MAINTENANCE_CHARGES.iter().any(|(size, _)| *size == self.0)
    }

    /// Fixed monthly maintenance service charge for this meter size
    pub fn maintenance_charge(&self) -> Decimal {
        let cents = MAINTENANCE_CHARGES
            .iter()
            .find(|(size, _)| *size == self.0)
            .map(|(_, cents)| *cents)
            .unwrap_or(DEFAULT_MAINTENANCE_CHARGE_CENTS);
        Decimal::new(cents, 2)
    }
}

impl From<String> for MeterSize {
    fn from(label: String) -> Self {
        MeterSize::new(&label)
    }
}

impl From<&str> for MeterSize {
    fn from(label: &str) -> Self {
        MeterSize::new(label)
    }
}

impl From<MeterSize> for String {
    fn from(size: MeterSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for MeterSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
