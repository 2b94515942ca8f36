// Bill model
//
// A bill is issued once per billing period from two consecutive meter
// readings. Its charge breakdown is stored verbatim; nothing on a bill is
// recomputed after issue, and a correction is a new bill.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::tariffs::models::{ChargeBreakdown, MeterSize, ServiceType};

/// A meter reading as recorded on the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterReading {
    /// Cumulative register value in m³
    pub value: Decimal,
    pub read_at: NaiveDate,
}

/// Request to issue a bill for one account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBillRequest {
    pub account_number: String,
    /// Explicit class; derived from the account-number prefix when absent
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub meter_size: String,
    pub previous_reading: MeterReading,
    pub current_reading: MeterReading,
}

/// Issued bill record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub account_number: String,
    pub service_type: ServiceType,
    pub meter_size: MeterSize,
    pub previous_reading: MeterReading,
    pub current_reading: MeterReading,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub charges: ChargeBreakdown,
    /// Equals `charges.total_calculated_charges`
    pub amount_due: Decimal,
    pub issued_at: DateTime<Utc>,
    pub due_date: NaiveDate,
}

impl Bill {
    pub fn consumption(&self) -> Decimal {
        self.charges.consumption
    }
}
