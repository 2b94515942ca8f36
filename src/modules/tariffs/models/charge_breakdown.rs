use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{MeterSize, ServiceType};

/// Structured charge breakdown for one billing event
///
/// Every monetary field is rounded to two decimal places on its own; none
/// is derived by re-summing already-rounded fields. A breakdown is persisted
/// verbatim with its bill and never recomputed in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargeBreakdown {
    pub consumption: Decimal,
    pub service_type: ServiceType,
    pub meter_size: MeterSize,

    /// Tariff-schedule charge for the consumed volume
    pub basic_charge: Decimal,
    /// Foreign Currency Differential Adjustment
    pub fcda: Decimal,
    /// basic charge + FCDA
    pub water_charge: Decimal,
    pub environmental_charge: Decimal,
    /// Zero unless the service class is sewerage-chargeable
    pub sewerage_charge: Decimal,
    pub maintenance_service_charge: Decimal,

    pub sub_total_before_taxes: Decimal,
    /// Same value as `sub_total_before_taxes`
    pub vatable_sales: Decimal,
    pub government_taxes: Decimal,
    /// VAT on the pre-government-tax subtotal
    pub vat: Decimal,
    pub total_calculated_charges: Decimal,
}

impl ChargeBreakdown {
    /// The monetary fields, in display order
    pub fn monetary_fields(&self) -> [(&'static str, Decimal); 11] {
        [
            ("basicCharge", self.basic_charge),
            ("fcda", self.fcda),
            ("waterCharge", self.water_charge),
            ("environmentalCharge", self.environmental_charge),
            ("sewerageCharge", self.sewerage_charge),
            ("maintenanceServiceCharge", self.maintenance_service_charge),
            ("subTotalBeforeTaxes", self.sub_total_before_taxes),
            ("vatableSales", self.vatable_sales),
            ("governmentTaxes", self.government_taxes),
            ("vat", self.vat),
            ("totalCalculatedCharges", self.total_calculated_charges),
        ]
    }
}
