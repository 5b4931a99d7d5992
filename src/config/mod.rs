//! Configuration loading and management for the take-home pay engine.
//!
//! The tax table, superannuation rate, penalty multiplier, penalty cutoff
//! and unpaid break rule are shared by every calculation. They are built in
//! for the 2023-24 financial year and can also be loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use take_home_pay::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/au_2023_24").unwrap();
//! println!("Super rate: {}", config.config().super_rate);
//! ```

mod loader;
mod types;

pub use loader::{BUILTIN_FINANCIAL_YEAR, ConfigLoader};
pub use types::{BreakPolicy, PayConfig, PayRatesFile, TaxBracket, TaxTable, TaxTableFile};
