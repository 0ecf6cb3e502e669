use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fully resolved settings: the mandatory default layer of the override
/// chain. Every lookup through [`BotSettings::timeslot`] and friends
/// terminates here, so resolution is total by construction.
#[derive(Clone, Debug, PartialEq)]
pub struct BotSettings {
    pub timeslot: TimeslotSettings,
    pub product: ProductSettings,
    pub display: DisplaySettings,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeslotSettings {
    /// Finest booking granularity, in minutes.
    pub slot_minutes: u32,
    /// IANA timezone label, carried for display purposes.
    pub timezone: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSettings {
    pub currency: String,
    pub tax_rate: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// `chrono` format string for date quick replies.
    pub date_format: String,
    /// `chrono` format string for time quick replies and summaries.
    pub time_format: String,
    pub date_page_size: usize,
    pub time_page_size: usize,
    pub duration_page_size: usize,
}

/// Optional per-store or per-service timeslot overrides. Consulted
/// first-to-last ahead of the defaults; the first present value wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeslotOverrides {
    pub slot_minutes: Option<u32>,
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOverrides {
    pub currency: Option<String>,
    pub tax_rate: Option<Decimal>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse settings file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("settings validation failed: {0}")]
    Validation(String),
}

impl Default for BotSettings {
    fn default() -> Self {
        Self {
            timeslot: TimeslotSettings { slot_minutes: 30, timezone: "UTC".to_string() },
            product: ProductSettings {
                currency: "USD".to_string(),
                // 0.00 — stores opt in to tax via overrides or the file.
                tax_rate: Decimal::ZERO,
            },
            display: DisplaySettings {
                date_format: "%a %b %e".to_string(),
                time_format: "%H:%M".to_string(),
                date_page_size: 8,
                time_page_size: 8,
                duration_page_size: 8,
            },
        }
    }
}

impl BotSettings {
    /// Load global defaults from a TOML file layered over the built-in
    /// defaults, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
        let patch: SettingsPatch = toml::from_str(&raw)
            .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })?;

        let mut settings = Self::default();
        settings.apply_patch(patch);
        settings.validate()?;
        Ok(settings)
    }

    /// Resolve timeslot settings through an ordered override chain
    /// (typically service first, then store), defaults last.
    pub fn timeslot(&self, layers: &[Option<&TimeslotOverrides>]) -> TimeslotSettings {
        TimeslotSettings {
            slot_minutes: resolve(layers, |o| o.slot_minutes, self.timeslot.slot_minutes),
            timezone: resolve(layers, |o| o.timezone.clone(), self.timeslot.timezone.clone()),
        }
    }

    pub fn product(&self, layers: &[Option<&ProductOverrides>]) -> ProductSettings {
        ProductSettings {
            currency: resolve(layers, |o| o.currency.clone(), self.product.currency.clone()),
            tax_rate: resolve(layers, |o| o.tax_rate, self.product.tax_rate),
        }
    }

    fn apply_patch(&mut self, patch: SettingsPatch) {
        if let Some(timeslot) = patch.timeslot {
            if let Some(slot_minutes) = timeslot.slot_minutes {
                self.timeslot.slot_minutes = slot_minutes;
            }
            if let Some(timezone) = timeslot.timezone {
                self.timeslot.timezone = timezone;
            }
        }

        if let Some(product) = patch.product {
            if let Some(currency) = product.currency {
                self.product.currency = currency;
            }
            if let Some(tax_rate) = product.tax_rate {
                self.product.tax_rate = tax_rate;
            }
        }

        if let Some(display) = patch.display {
            if let Some(date_format) = display.date_format {
                self.display.date_format = date_format;
            }
            if let Some(time_format) = display.time_format {
                self.display.time_format = time_format;
            }
            if let Some(date_page_size) = display.date_page_size {
                self.display.date_page_size = date_page_size;
            }
            if let Some(time_page_size) = display.time_page_size {
                self.display.time_page_size = time_page_size;
            }
            if let Some(duration_page_size) = display.duration_page_size {
                self.display.duration_page_size = duration_page_size;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeslot.slot_minutes == 0 {
            return Err(ConfigError::Validation(
                "timeslot.slot_minutes must be greater than zero".to_string(),
            ));
        }
        if self.timeslot.slot_minutes > crate::timeslot::MINUTES_PER_DAY {
            return Err(ConfigError::Validation(
                "timeslot.slot_minutes must not exceed one day".to_string(),
            ));
        }

        if self.product.tax_rate < Decimal::ZERO || self.product.tax_rate > Decimal::ONE {
            return Err(ConfigError::Validation(
                "product.tax_rate must be in range 0..=1".to_string(),
            ));
        }

        if self.display.date_page_size == 0
            || self.display.time_page_size == 0
            || self.display.duration_page_size == 0
        {
            return Err(ConfigError::Validation(
                "display page sizes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// First present value across the override layers, else the default.
fn resolve<O, T>(layers: &[Option<&O>], pick: impl Fn(&O) -> Option<T>, default: T) -> T {
    layers.iter().flatten().find_map(|layer| pick(layer)).unwrap_or(default)
}

#[derive(Debug, Default, Deserialize)]
struct SettingsPatch {
    timeslot: Option<TimeslotPatch>,
    product: Option<ProductPatch>,
    display: Option<DisplayPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct TimeslotPatch {
    slot_minutes: Option<u32>,
    timezone: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ProductPatch {
    currency: Option<String>,
    tax_rate: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct DisplayPatch {
    date_format: Option<String>,
    time_format: Option<String>,
    date_page_size: Option<usize>,
    time_page_size: Option<usize>,
    duration_page_size: Option<usize>,
}
