use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

use crate::core::config::CnbApiConfig;
use crate::core::{Currency, ExchangeRate, ExchangeRateProvider, FetchError};

/// Body of `GET {endpoint}daily`.
#[derive(Debug, Deserialize)]
pub struct CnbRatesResponse {
    pub rates: Vec<CnbRateRecord>,
}

/// A single published rate. Only `currency_code` and `rate` are mapped; the
/// rest is kept as the API sends it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CnbRateRecord {
    pub valid_for: Option<String>,
    pub order: Option<u32>,
    pub country: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<u32>,
    pub currency_code: String,
    /// Read from the JSON number text, so the published scale is kept.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub rate: Decimal,
}

pub struct CnbRateProvider {
    client: reqwest::Client,
    config: CnbApiConfig,
}

impl CnbRateProvider {
    /// Fails if any API setting is blank.
    pub fn new(client: reqwest::Client, config: CnbApiConfig) -> Result<Self, FetchError> {
        config.validate()?;
        Ok(CnbRateProvider { client, config })
    }

    fn daily_url(&self, date: &str) -> String {
        format!(
            "{}{}daily?date={}&lang=EN",
            self.config.base_url, self.config.exchange_rate_endpoint, date
        )
    }

    async fn request_daily_rates(&self, date: &str) -> Result<Vec<ExchangeRate>, FetchError> {
        let url = self.daily_url(date);
        debug!("Requesting exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { status, url });
        }

        let text = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.clone(),
                source,
            })?;

        let data: CnbRatesResponse = serde_json::from_str(&text)?;

        let target = Currency::new(self.config.default_currency.as_str());
        Ok(data
            .rates
            .into_iter()
            .map(|record| {
                ExchangeRate::new(
                    Currency::new(record.currency_code),
                    target.clone(),
                    record.rate,
                )
            })
            .collect())
    }
}

#[async_trait]
impl ExchangeRateProvider for CnbRateProvider {
    #[instrument(name = "CnbRatesFetch", skip(self))]
    async fn fetch_daily_rates(&self, date: &str) -> Result<Vec<ExchangeRate>, FetchError> {
        match self.request_daily_rates(date).await {
            Ok(rates) => {
                info!(count = rates.len(), "Fetched exchange rates successfully");
                Ok(rates)
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch exchange rates");
                Err(e)
            }
        }
    }
}
