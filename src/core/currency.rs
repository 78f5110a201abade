//! Currency and exchange rate abstractions

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::error::FetchError;

/// An opaque currency code, compared exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Currency(code.into())
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Currency {
    fn from(code: &str) -> Self {
        Currency::new(code)
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        Currency(code)
    }
}

/// One unit of `source_currency` buys `rate` units of `target_currency`, as
/// published by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    source_currency: Currency,
    target_currency: Currency,
    rate: Decimal,
}

impl ExchangeRate {
    pub fn new(source_currency: Currency, target_currency: Currency, rate: Decimal) -> Self {
        ExchangeRate {
            source_currency,
            target_currency,
            rate,
        }
    }

    pub fn source_currency(&self) -> &Currency {
        &self.source_currency
    }

    pub fn target_currency(&self) -> &Currency {
        &self.target_currency
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}={}",
            self.source_currency, self.target_currency, self.rate
        )
    }
}

#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Rates published for `date`, in the order the source lists them.
    async fn fetch_daily_rates(&self, date: &str) -> Result<Vec<ExchangeRate>, FetchError>;
}

/// Keeps the rates whose source and target are both in `currencies`.
///
/// Currencies the source does not publish are ignored, and nothing is derived
/// for pairs that are missing. An empty `currencies` keeps everything.
pub fn select_rates(rates: Vec<ExchangeRate>, currencies: &[Currency]) -> Vec<ExchangeRate> {
    if currencies.is_empty() {
        return rates;
    }

    rates
        .into_iter()
        .filter(|r| {
            currencies.contains(&r.source_currency) && currencies.contains(&r.target_currency)
        })
        .collect()
}
