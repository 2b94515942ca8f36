use rust_decimal::Decimal;
use tracing::debug;

use super::tariff_schedule::TariffSchedule;
use crate::core::round_money;
use crate::modules::tariffs::models::{ChargeBreakdown, MeterSize, ServiceType, TariffSettings};

/// TariffCalculator computes the charge breakdown for one billing event
///
/// Pure and total: no I/O, no shared state, and no error path. Unknown
/// service classes use the default schedule and unknown meter sizes the
/// smallest-meter charge.
pub struct TariffCalculator;

impl TariffCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the full charge breakdown
    ///
    /// The whole pipeline runs at full precision; each exposed field is
    /// rounded to cents independently at the end.
    pub fn calculate_bill_details(
        &self,
        consumption: Decimal,
        service_type: &ServiceType,
        meter_size: &MeterSize,
        settings: &TariffSettings,
    ) -> ChargeBreakdown {
        let rates = settings.rates();
        let schedule = TariffSchedule::for_service(service_type);

        let basic_charge = schedule.basic_charge(consumption);
        let fcda = basic_charge * rates.fcda;
        let water_charge = basic_charge + fcda;
        let environmental_charge = water_charge * rates.environmental;
        let sewerage_charge = if service_type.is_sewerage_chargeable() {
            water_charge * rates.sewerage
        } else {
            Decimal::ZERO
        };
        let maintenance_service_charge = meter_size.maintenance_charge();

        let sub_total_before_taxes =
            water_charge + environmental_charge + sewerage_charge + maintenance_service_charge;
        let government_taxes = sub_total_before_taxes * rates.government_tax;
        // VAT base excludes government taxes
        let vat = sub_total_before_taxes * rates.vat;
        let total_calculated_charges = sub_total_before_taxes + government_taxes + vat;

        debug!(
            "Calculated {} m3 for {} on '{}' meter using {} schedule: total {}",
            consumption, service_type, meter_size, schedule.name, total_calculated_charges
        );

        ChargeBreakdown {
            consumption,
            service_type: service_type.clone(),
            meter_size: meter_size.clone(),
            basic_charge: round_money(basic_charge),
            fcda: round_money(fcda),
            water_charge: round_money(water_charge),
            environmental_charge: round_money(environmental_charge),
            sewerage_charge: round_money(sewerage_charge),
            maintenance_service_charge: round_money(maintenance_service_charge),
            sub_total_before_taxes: round_money(sub_total_before_taxes),
            vatable_sales: round_money(sub_total_before_taxes),
            government_taxes: round_money(government_taxes),
            vat: round_money(vat),
            total_calculated_charges: round_money(total_calculated_charges),
        }
    }
}

impl Default for TariffCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point taking raw labels
pub fn calculate_bill_details(
    consumption: Decimal,
    service_type: &str,
    meter_size: &str,
    settings: &TariffSettings,
) -> ChargeBreakdown {
    TariffCalculator::new().calculate_bill_details(
        consumption,
        &ServiceType::from_label(service_type),
        &MeterSize::new(meter_size),
        settings,
    )
}
