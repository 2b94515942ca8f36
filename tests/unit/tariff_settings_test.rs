// Property-based tests for settings merging
//
// Explicit fields override defaults one by one; absent fields keep the
// default; negative or oversized percentages never make it into a
// TariffSettings.

use hydrobill::tariffs::{TariffSettings, TariffSettingsPatch, MAX_PERCENTAGE};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn percentage() -> impl Strategy<Value = Option<Decimal>> {
    prop::option::of((0i64..10_000).prop_map(|bp| Decimal::new(bp, 2)))
}

proptest! {
    #[test]
    fn test_merge_is_field_by_field(
        fcda in percentage(),
        ec in percentage(),
        sewerage in percentage(),
        gov in percentage(),
        vat in percentage(),
    ) {
        let patch = TariffSettingsPatch {
            fcda_percentage: fcda,
            environmental_charge_percentage: ec,
            sewerage_charge_percentage_commercial: sewerage,
            government_tax_percentage: gov,
            vat_percentage: vat,
        };
        let defaults = TariffSettings::default();
        let merged = TariffSettings::from_patch(&patch).unwrap();

        prop_assert_eq!(merged.fcda_percentage, fcda.unwrap_or(defaults.fcda_percentage));
        prop_assert_eq!(
            merged.environmental_charge_percentage,
            ec.unwrap_or(defaults.environmental_charge_percentage)
        );
        prop_assert_eq!(
            merged.sewerage_charge_percentage_commercial,
            sewerage.unwrap_or(defaults.sewerage_charge_percentage_commercial)
        );
        prop_assert_eq!(
            merged.government_tax_percentage,
            gov.unwrap_or(defaults.government_tax_percentage)
        );
        prop_assert_eq!(merged.vat_percentage, vat.unwrap_or(defaults.vat_percentage));
    }

    #[test]
    fn test_negative_percentages_rejected(bp in 1i64..10_000) {
        let patch = TariffSettingsPatch {
            government_tax_percentage: Some(Decimal::new(-bp, 2)),
            ..Default::default()
        };

        prop_assert!(TariffSettings::from_patch(&patch).is_err());
    }

    #[test]
    fn test_percentages_above_ceiling_rejected(excess in 1i64..1_000_000_000) {
        let patch = TariffSettingsPatch {
            sewerage_charge_percentage_commercial: Some(
                Decimal::from(MAX_PERCENTAGE) + Decimal::new(excess, 2),
            ),
            ..Default::default()
        };

        prop_assert!(TariffSettings::from_patch(&patch).is_err());
    }
}

#[test]
fn test_huge_vat_percentage_rejected() {
    let patch: TariffSettingsPatch =
        serde_json::from_str(r#"{"vatPercentage": "70000000000000000000000000000"}"#).unwrap();
    let err = TariffSettings::from_patch(&patch).unwrap_err();

    assert!(err.to_string().contains("vatPercentage cannot exceed"));
}

#[test]
fn test_ceiling_percentage_accepted() {
    let patch = TariffSettingsPatch {
        vat_percentage: Some(Decimal::from(MAX_PERCENTAGE)),
        fcda_percentage: Some(Decimal::from(MAX_PERCENTAGE)),
        ..Default::default()
    };

    let settings = TariffSettings::from_patch(&patch).unwrap();
    assert_eq!(settings.vat_percentage, Decimal::from(MAX_PERCENTAGE));
}

#[test]
fn test_patch_deserializes_from_document() {
    let patch: TariffSettingsPatch = serde_json::from_str(
        r#"{
            "fcdaPercentage": 1.5,
            "environmentalChargePercentage": "20",
            "unknownField": true
        }"#,
    )
    .unwrap();

    assert_eq!(patch.fcda_percentage, Some(Decimal::new(15, 1)));
    assert_eq!(patch.environmental_charge_percentage, Some(Decimal::from(20)));
    assert_eq!(patch.vat_percentage, None);
}

#[test]
fn test_settings_serialize_camel_case() {
    let json = serde_json::to_value(TariffSettings::default()).unwrap();

    assert!(json.get("fcdaPercentage").is_some());
    assert!(json.get("sewerageChargePercentageCommercial").is_some());
    assert!(json.get("vatPercentage").is_some());
}

#[test]
fn test_merge_over_non_default_base() {
    let base = TariffSettings::from_patch(&TariffSettingsPatch {
        vat_percentage: Some(Decimal::from(10)),
        ..Default::default()
    })
    .unwrap();

    let merged = base
        .merge(&TariffSettingsPatch {
            fcda_percentage: Some(Decimal::ZERO),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(merged.vat_percentage, Decimal::from(10));
    assert_eq!(merged.fcda_percentage, Decimal::ZERO);
}
