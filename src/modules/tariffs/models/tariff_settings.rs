use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{percent_to_rate, AppError, Result};

/// Settings document as maintained by administrators
///
/// Every field is optional; anything missing falls back to the compiled-in
/// default when merged into [`TariffSettings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcda_percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental_charge_percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sewerage_charge_percentage_commercial: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub government_tax_percentage: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percentage: Option<Decimal>,
}

/// Highest percentage any setting may carry (1000%)
pub const MAX_PERCENTAGE: i64 = 1000;

/// Fully populated tariff settings, all values in whole-number percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffSettings {
    /// Foreign Currency Differential Adjustment
    pub fcda_percentage: Decimal,
    pub environmental_charge_percentage: Decimal,
    /// Sewerage surcharge for commercial-like service classes
    pub sewerage_charge_percentage_commercial: Decimal,
    pub government_tax_percentage: Decimal,
    pub vat_percentage: Decimal,
}

/// Settings converted to decimal rates (percent / 100)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TariffRates {
    pub fcda: Decimal,
    pub environmental: Decimal,
    pub sewerage: Decimal,
    pub government_tax: Decimal,
    pub vat: Decimal,
}

impl Default for TariffSettings {
    fn default() -> Self {
        Self {
            fcda_percentage: Decimal::new(129, 2),
            environmental_charge_percentage: Decimal::new(25, 0),
            sewerage_charge_percentage_commercial: Decimal::new(3285, 2),
            government_tax_percentage: Decimal::new(2, 0),
            vat_percentage: Decimal::new(12, 0),
        }
    }
}

impl TariffSettings {
    /// Merge a settings document over the defaults, field by field
    pub fn from_patch(patch: &TariffSettingsPatch) -> Result<Self> {
        Self::default().merge(patch)
    }

    /// Override the fields present in `patch`, keeping the rest of `self`
    ///
    /// Rejects negative percentages.
    pub fn merge(&self, patch: &TariffSettingsPatch) -> Result<Self> {
        let merged = Self {
            fcda_percentage: patch.fcda_percentage.unwrap_or(self.fcda_percentage),
            environmental_charge_percentage: patch
                .environmental_charge_percentage
                .unwrap_or(self.environmental_charge_percentage),
            sewerage_charge_percentage_commercial: patch
                .sewerage_charge_percentage_commercial
                .unwrap_or(self.sewerage_charge_percentage_commercial),
            government_tax_percentage: patch
                .government_tax_percentage
                .unwrap_or(self.government_tax_percentage),
            vat_percentage: patch.vat_percentage.unwrap_or(self.vat_percentage),
        };

        merged.validate()?;
        Ok(merged)
    }

    /// All percentages must lie within 0..=MAX_PERCENTAGE
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("fcdaPercentage", self.fcda_percentage),
            ("environmentalChargePercentage", self.environmental_charge_percentage),
            (
                "sewerageChargePercentageCommercial",
                self.sewerage_charge_percentage_commercial,
            ),
            ("governmentTaxPercentage", self.government_tax_percentage),
            ("vatPercentage", self.vat_percentage),
        ];

        for (name, value) in fields {
            if value < Decimal::ZERO {
                return Err(AppError::validation(format!(
                    "{} cannot be negative, got: {}",
                    name, value
                )));
            }

            if value > Decimal::from(MAX_PERCENTAGE) {
                return Err(AppError::validation(format!(
                    "{} cannot exceed {}%, got: {}",
                    name, MAX_PERCENTAGE, value
                )));
            }
        }

        Ok(())
    }

    pub fn rates(&self) -> TariffRates {
        TariffRates {
            fcda: percent_to_rate(self.fcda_percentage),
            environmental: percent_to_rate(self.environmental_charge_percentage),
            sewerage: percent_to_rate(self.sewerage_charge_percentage_commercial),
            government_tax: percent_to_rate(self.government_tax_percentage),
            vat: percent_to_rate(self.vat_percentage),
        }
    }
}
