mod bill;

pub use bill::{Bill, GenerateBillRequest, MeterReading};
