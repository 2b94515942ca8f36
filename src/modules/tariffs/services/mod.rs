pub mod consumption;
pub mod settings_store;
pub mod tariff_calculator;
pub mod tariff_schedule;

pub use consumption::{coerce_consumption, ensure_consumption_in_range, MAX_CONSUMPTION};
pub use settings_store::TariffSettingsStore;
pub use tariff_calculator::{calculate_bill_details, TariffCalculator};
pub use tariff_schedule::{TariffSchedule, Tier};
