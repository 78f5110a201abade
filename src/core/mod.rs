//! Core abstractions shared by providers and commands

pub mod config;
pub mod currency;
pub mod error;
pub mod log;

// Re-export main types for cleaner imports
pub use currency::{Currency, ExchangeRate, ExchangeRateProvider, select_rates};
pub use error::{ConfigError, FetchError};
