use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub use crate::coercion::ValueLocaleConfig;

/// Upper bound on the number of cells a single function may materialize.
pub const DEFAULT_MAX_MATERIALIZED_CELLS: usize = 5_000_000;

/// Workbook-level settings consulted while executing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    pub value_locale: ValueLocaleConfig,
    pub max_materialized_cells: usize,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            value_locale: ValueLocaleConfig::en_us(),
            max_materialized_cells: DEFAULT_MAX_MATERIALIZED_CELLS,
        }
    }
}

impl CalcSettings {
    /// Parses settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.max_materialized_cells == 0 {
            return Err(SettingsError::ZeroCellLimit);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_value_locale(mut self, locale: ValueLocaleConfig) -> Self {
        self.value_locale = locale;
        self
    }

    /// Switches the value locale by id (`de-DE`, `fr-FR`, ...).
    pub fn set_value_locale_id(&mut self, id: &str) -> Result<(), SettingsError> {
        self.value_locale = ValueLocaleConfig::for_locale_id(id)
            .ok_or_else(|| SettingsError::UnknownLocale(id.to_string()))?;
        Ok(())
    }
}
