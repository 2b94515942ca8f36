use chrono::{DateTime, Days, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::bills::models::{Bill, GenerateBillRequest, MeterReading};
use crate::modules::tariffs::models::{MeterSize, ServiceType, TariffSettings};
use crate::modules::tariffs::services::{ensure_consumption_in_range, TariffCalculator};

/// Default number of days between issue and due date
pub const DEFAULT_DUE_DAYS: u32 = 15;

/// Longest accepted interval between issue and due date
pub const MAX_DUE_DAYS: u32 = 365;

/// Issues bills from meter readings
///
/// Everything the calculator does not check happens here: the readings must
/// be in order and must not produce negative consumption, and the account
/// must resolve to a service class.
pub struct BillGenerator {
    calculator: TariffCalculator,
    due_days: u32,
}

impl BillGenerator {
    pub fn new(due_days: u32) -> Self {
        Self {
            calculator: TariffCalculator::new(),
            due_days,
        }
    }

    pub fn due_days(&self) -> u32 {
        self.due_days
    }

    /// Issue a bill at `issued_at` using `settings`
    pub fn generate(
        &self,
        request: &GenerateBillRequest,
        settings: &TariffSettings,
        issued_at: DateTime<Utc>,
    ) -> Result<Bill> {
        let account_number = request.account_number.trim();
        if account_number.is_empty() {
            return Err(AppError::validation("Account number cannot be empty"));
        }

        let consumption = Self::consumption_between(&request.previous_reading, &request.current_reading)
            .map_err(|err| {
                warn!("Refusing to bill account {}: {}", account_number, err);
                err
            })?;

        let service_type = Self::resolve_service_type(account_number, request.service_type.as_deref())?;
        let meter_size = MeterSize::new(&request.meter_size);

        let charges = self
            .calculator
            .calculate_bill_details(consumption, &service_type, &meter_size, settings);

        let due_date = issued_at
            .date_naive()
            .checked_add_days(Days::new(u64::from(self.due_days)))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Due date {} days after {} is out of range",
                    self.due_days, issued_at
                ))
            })?;

        let bill = Bill {
            id: Uuid::new_v4().to_string(),
            account_number: account_number.to_string(),
            service_type,
            meter_size,
            previous_reading: request.previous_reading,
            current_reading: request.current_reading,
            period_start: request.previous_reading.read_at,
            period_end: request.current_reading.read_at,
            amount_due: charges.total_calculated_charges,
            charges,
            issued_at,
            due_date,
        };

        info!(
            "Issued bill {} for account {} ({} m3, amount due {}, due {})",
            bill.id, bill.account_number, consumption, bill.amount_due, bill.due_date
        );

        Ok(bill)
    }

    /// Consumption between two readings; rejects out-of-order or decreasing
    /// readings and usage above [`MAX_CONSUMPTION`](crate::modules::tariffs::services::MAX_CONSUMPTION)
    pub fn consumption_between(previous: &MeterReading, current: &MeterReading) -> Result<Decimal> {
        if previous.value < Decimal::ZERO || current.value < Decimal::ZERO {
            return Err(AppError::validation("Meter readings cannot be negative"));
        }

        if current.read_at < previous.read_at {
            return Err(AppError::validation(format!(
                "Current reading date {} is before previous reading date {}",
                current.read_at, previous.read_at
            )));
        }

        let consumption = current.value - previous.value;
        if consumption < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Current reading {} is lower than previous reading {}",
                current.value, previous.value
            )));
        }

        ensure_consumption_in_range(consumption)
    }

    /// Explicit label wins; otherwise the account-number prefix decides
    pub fn resolve_service_type(account_number: &str, explicit: Option<&str>) -> Result<ServiceType> {
        match explicit.map(str::trim).filter(|label| !label.is_empty()) {
            Some(label) => Ok(ServiceType::from_label(label)),
            None => ServiceType::from_account_number(account_number).ok_or_else(|| {
                AppError::validation(format!(
                    "Cannot determine service type for account {}",
                    account_number
                ))
            }),
        }
    }
}

impl Default for BillGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DUE_DAYS)
    }
}
