mod charge_breakdown;
mod meter_size;
mod service_type;
mod tariff_settings;

pub use charge_breakdown::ChargeBreakdown;
pub use meter_size::MeterSize;
pub use service_type::ServiceType;
pub use tariff_settings::{TariffRates, TariffSettings, TariffSettingsPatch, MAX_PERCENTAGE};
