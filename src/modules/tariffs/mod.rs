// Tariffs module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    ChargeBreakdown, MeterSize, ServiceType, TariffSettings, TariffSettingsPatch, MAX_PERCENTAGE,
};
pub use services::{
    calculate_bill_details, TariffCalculator, TariffSchedule, TariffSettingsStore, MAX_CONSUMPTION,
};
