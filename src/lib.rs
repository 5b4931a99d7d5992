//! Take-home pay estimator for Australian shift workers.
//!
//! This crate turns a repeating weekly shift pattern into gross pay, income
//! tax, superannuation and net pay for a chosen pay period, using the
//! 2023-24 resident tax brackets. Results can be stored per session, then
//! viewed, edited and deleted.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod session;
