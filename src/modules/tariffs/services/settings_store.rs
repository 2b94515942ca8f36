use std::sync::RwLock;

use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::tariffs::models::{TariffSettings, TariffSettingsPatch};

/// Holds the tariff settings currently in force
///
/// Readers get a copy of the settings; a replacement swaps the whole value
/// under the write lock, so a calculation never sees a half-applied document.
pub struct TariffSettingsStore {
    current: RwLock<TariffSettings>,
}

impl TariffSettingsStore {
    pub fn new(settings: TariffSettings) -> Self {
        Self {
            current: RwLock::new(settings),
        }
    }

    /// Snapshot of the current settings
    pub fn current(&self) -> Result<TariffSettings> {
        self.current
            .read()
            .map(|settings| *settings)
            .map_err(|_| AppError::internal("Tariff settings lock poisoned"))
    }

    /// Replace the settings document, merged over the defaults
    pub fn replace(&self, patch: &TariffSettingsPatch) -> Result<TariffSettings> {
        let settings = TariffSettings::from_patch(patch)?;

        let mut current = self
            .current
            .write()
            .map_err(|_| AppError::internal("Tariff settings lock poisoned"))?;
        *current = settings;

        info!(
            "Tariff settings replaced (fcda={}%, ec={}%, sewerage={}%, gov_tax={}%, vat={}%)",
            settings.fcda_percentage,
            settings.environmental_charge_percentage,
            settings.sewerage_charge_percentage_commercial,
            settings.government_tax_percentage,
            settings.vat_percentage
        );

        Ok(settings)
    }
}

impl Default for TariffSettingsStore {
    fn default() -> Self {
        Self::new(TariffSettings::default())
    }
}
