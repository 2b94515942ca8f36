// Bills module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{Bill, GenerateBillRequest, MeterReading};
pub use services::BillGenerator;
