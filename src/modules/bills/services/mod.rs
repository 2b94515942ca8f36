pub mod bill_generator;

pub use bill_generator::{BillGenerator, DEFAULT_DUE_DAYS, MAX_DUE_DAYS};
