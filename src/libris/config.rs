use crate::error::{LibrisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOAN_PERIOD_DAYS: u32 = 14;
const DEFAULT_MAX_LOANS: usize = 5;
pub const MAX_LOAN_PERIOD_DAYS: u32 = 3650;

/// Configuration for libris, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Days between borrowing a book and its due date
    #[serde(default = "default_loan_period_days")]
    pub loan_period_days: u32,

    /// How many unreturned books a patron may hold at once
    #[serde(default = "default_max_loans")]
    pub max_loans_per_patron: usize,

    /// Pre-seed an empty catalog with a few sample books on startup
    #[serde(default = "default_seed_sample_catalog")]
    pub seed_sample_catalog: bool,
}

fn default_loan_period_days() -> u32 {
    DEFAULT_LOAN_PERIOD_DAYS
}

fn default_max_loans() -> usize {
    DEFAULT_MAX_LOANS
}

fn default_seed_sample_catalog() -> bool {
    true
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            max_loans_per_patron: DEFAULT_MAX_LOANS,
            seed_sample_catalog: true,
        }
    }
}

/// Circulation rules applied when borrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CirculationPolicy {
    pub loan_period_days: u32,
    pub max_loans_per_patron: usize,
}

impl Default for CirculationPolicy {
    fn default() -> Self {
        LibrisConfig::default().policy()
    }
}

impl CirculationPolicy {
    pub fn loan_period(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.loan_period_days))
    }

    /// Due date for a loan starting at `borrowed_at`.
    pub fn due_date(&self, borrowed_at: DateTime<Utc>) -> Result<DateTime<Utc>> {
        borrowed_at
            .checked_add_signed(self.loan_period())
            .ok_or_else(|| {
                LibrisError::Config(format!(
                    "a loan period of {} days puts the due date out of range",
                    self.loan_period_days
                ))
            })
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings the circulation rules cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&self.loan_period_days) {
            return Err(LibrisError::Config(format!(
                "loan_period_days must be between 1 and {} (got {})",
                MAX_LOAN_PERIOD_DAYS, self.loan_period_days
            )));
        }
        Ok(())
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }

    pub fn policy(&self) -> CirculationPolicy {
        CirculationPolicy {
            loan_period_days: self.loan_period_days,
            max_loans_per_patron: self.max_loans_per_patron,
        }
    }
}
