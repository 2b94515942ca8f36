// Tests for meter-size normalization and the maintenance charge table

use hydrobill::tariffs::MeterSize;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_maintenance_charge_table() {
    let cases: [(&str, &str, Decimal); 10] = [
        ("1/2", "15mm", dec!(1.50)),
        ("3/4", "20mm", dec!(2.00)),
        ("1", "25mm", dec!(3.00)),
        ("1 1/4", "40mm", dec!(4.00)),
        ("1 1/2", "32mm", dec!(4.00)),
        ("2", "50mm", dec!(6.00)),
        ("3", "75mm", dec!(10.00)),
        ("4", "100mm", dec!(20.00)),
        ("6", "150mm", dec!(35.00)),
        ("8", "200mm", dec!(50.00)),
    ];

    for (inches, millimeters, expected) in cases {
        let quoted = format!("{}\"", inches);
        assert_eq!(MeterSize::new(&quoted).maintenance_charge(), expected, "{}", quoted);
        assert_eq!(MeterSize::new(inches).maintenance_charge(), expected, "{}", inches);
        assert_eq!(
            MeterSize::new(millimeters).maintenance_charge(),
            expected,
            "{}",
            millimeters
        );
        assert!(MeterSize::new(millimeters).is_recognized());
    }
}

#[test]
fn test_quote_variants_normalize_identically() {
    let expected = MeterSize::new("2");
    for label in ["2\"", "2\u{201D}", "\u{201C}2\u{201D}", " 2 ", "2\u{2033}"] {
        assert_eq!(MeterSize::new(label), expected, "{:?}", label);
    }
}

#[test]
fn test_unrecognized_sizes_use_smallest_charge() {
    for label in ["10\"", "12mm", "half inch", "", "1/2 inch"] {
        let size = MeterSize::new(label);
        assert!(!size.is_recognized(), "{:?}", label);
        assert_eq!(size.maintenance_charge(), dec!(1.50), "{:?}", label);
    }
}

#[test]
fn test_inner_whitespace_is_significant() {
    // Only surrounding whitespace is trimmed
    assert_eq!(MeterSize::new(" 1 1/4\" ").as_str(), "1 1/4");
    assert!(!MeterSize::new("11/4").is_recognized());
}

#[test]
fn test_serde_normalizes_on_read() {
    let size: MeterSize = serde_json::from_str("\"3/4\\u201D\"").unwrap();
    assert_eq!(size.as_str(), "3/4");
    assert_eq!(serde_json::to_string(&size).unwrap(), "\"3/4\"");
}
