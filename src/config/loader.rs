//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay and tax
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ClockTime;

use super::types::{PayConfig, PayRatesFile, TaxTable, TaxTableFile};

/// The financial year the built-in constants belong to.
pub const BUILTIN_FINANCIAL_YEAR: &str = "2023-24";

/// Loads and provides access to pay configuration.
///
/// # Directory Structure
///
/// ```text
/// config/au_2023_24/
/// ├── tax.yaml   # Financial year and tax brackets
/// └── pay.yaml   # Super rate, penalty multiplier and cutoff, unpaid break
/// ```
///
/// # Example
///
/// ```no_run
/// use take_home_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/au_2023_24")?;
/// println!("Tax year: {}", loader.financial_year());
/// # Ok::<(), take_home_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    financial_year: String,
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or is not valid YAML. The
    /// pay file is also rejected when its cutoff is not a 12-hour clock time,
    /// when a rate or break length is negative, or when the break deducted is
    /// longer than the shift that earns it. A bad tax table is an error too.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tax_path = path.join("tax.yaml");
        let tax_file = Self::load_yaml::<TaxTableFile>(&tax_path)?;
        let tax_table = TaxTable::new(tax_file.brackets)?;

        let pay_path = path.join("pay.yaml");
        let pay_file = Self::load_yaml::<PayRatesFile>(&pay_path)?;
        Self::check_pay_values(&pay_file, &pay_path)?;
        let penalty_cutoff = pay_file
            .penalty_cutoff
            .parse::<ClockTime>()
            .map_err(|e| EngineError::ConfigParseError {
                path: pay_path.display().to_string(),
                message: format!("penalty_cutoff '{}': {}", pay_file.penalty_cutoff, e),
            })?
            .time();

        debug!(
            financial_year = %tax_file.financial_year,
            brackets = tax_table.brackets().len(),
            "Loaded pay configuration"
        );

        Ok(Self {
            financial_year: tax_file.financial_year,
            config: PayConfig {
                tax_table,
                super_rate: pay_file.super_rate,
                penalty_multiplier: pay_file.penalty_multiplier,
                penalty_cutoff,
                break_policy: pay_file.unpaid_break,
            },
        })
    }

    /// Returns a loader holding the built-in 2023-24 constants.
    pub fn builtin() -> Self {
        Self {
            financial_year: BUILTIN_FINANCIAL_YEAR.to_string(),
            config: PayConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects pay values no calculation can use.
    fn check_pay_values(pay_file: &PayRatesFile, path: &Path) -> EngineResult<()> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        let non_negative = [
            ("super_rate", pay_file.super_rate),
            ("penalty_multiplier", pay_file.penalty_multiplier),
            (
                "unpaid_break.threshold_hours",
                pay_file.unpaid_break.threshold_hours,
            ),
            (
                "unpaid_break.deduction_hours",
                pay_file.unpaid_break.deduction_hours,
            ),
        ];
        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(parse_error(format!(
                    "{} must not be negative, got {}",
                    field, value
                )));
            }
        }

        let policy = &pay_file.unpaid_break;
        if policy.deduction_hours > policy.threshold_hours {
            return Err(parse_error(format!(
                "unpaid_break.deduction_hours ({}) exceeds threshold_hours ({})",
                policy.deduction_hours, policy.threshold_hours
            )));
        }
        Ok(())
    }

    /// Returns the pay configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Returns the financial year the configuration applies to.
    pub fn financial_year(&self) -> &str {
        &self.financial_year
    }
}
