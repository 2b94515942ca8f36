//! Hydrobill water billing library
//!
//! Tiered consumption-based water tariff calculation, bill issuing from
//! meter readings, and the HTTP surface around them.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bills;
pub use modules::tariffs;
