use std::fs;
use tracing::{error, info};

mod test_utils {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub const ENDPOINT: &str = "/cnbapi/exrates/";

    pub async fn create_cnb_mock_server(date: &str, template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("{ENDPOINT}daily")))
            .and(query_param("date", date))
            .and(query_param("lang", "EN"))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        mock_server
    }

    pub fn write_config(file: &tempfile::NamedTempFile, base_url: &str, currencies: &str) {
        let config_content = format!(
            r#"
cnb_api:
  base_url: "{base_url}"
  exchange_rate_endpoint: "{ENDPOINT}"
  default_currency: "CZK"
currencies: {currencies}
"#
        );
        std::fs::write(file.path(), config_content).expect("Failed to write config file");
    }
}

const MOCK_JSON: &str = r#"{
    "rates": [
        {"validFor": "2024-01-15", "order": 10, "country": "USA", "currency": "dollar", "amount": 1, "currencyCode": "USD", "rate": 23.10},
        {"validFor": "2024-01-15", "order": 10, "country": "EMU", "currency": "euro", "amount": 1, "currencyCode": "EUR", "rate": 25.30}
    ]
}"#;

#[test_log::test(tokio::test)]
async fn test_full_app_flow_with_mock() {
    let mock_server = test_utils::create_cnb_mock_server(
        "2024-01-15",
        wiremock::ResponseTemplate::new(200).set_body_string(MOCK_JSON),
    )
    .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), r#"["USD", "CZK"]"#);

    let args = cnbrates::RatesArgs {
        date: Some("2024-01-15".to_string()),
        ..Default::default()
    };
    let result = cnbrates::run_command(
        cnbrates::AppCommand::Rates(args),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;
    assert!(
        result.is_ok(),
        "Main function failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_full_app_flow_reports_http_error() {
    let mock_server = test_utils::create_cnb_mock_server(
        "2024-01-15",
        wiremock::ResponseTemplate::new(503),
    )
    .await;

    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    test_utils::write_config(&config_file, &mock_server.uri(), "[]");

    let args = cnbrates::RatesArgs {
        date: Some("2024-01-15".to_string()),
        format: cnbrates::cli::rates::OutputFormat::Json,
        ..Default::default()
    };
    let result = cnbrates::run_command(
        cnbrates::AppCommand::Rates(args),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("503 must fail the command");
    let fetch_err = err
        .downcast_ref::<cnbrates::core::FetchError>()
        .expect("fetch error in chain");
    assert_eq!(fetch_err.status().map(|s| s.as_u16()), Some(503));
}

#[test_log::test(tokio::test)]
async fn test_blank_config_value_fails_before_request() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    fs::write(
        config_file.path(),
        r#"
cnb_api:
  base_url: "https://api.cnb.cz"
  exchange_rate_endpoint: "/cnbapi/exrates/"
  default_currency: ""
"#,
    )
    .expect("Failed to write config file");

    let result = cnbrates::run_command(
        cnbrates::AppCommand::Rates(cnbrates::RatesArgs::default()),
        Some(config_file.path().to_str().unwrap()),
    )
    .await;

    let err = result.expect_err("blank default currency must be rejected");
    assert!(format!("{err:#}").contains("cnb_api.default_currency"));
}

#[test_log::test(tokio::test)]
#[ignore = "requires network access to api.cnb.cz"]
async fn test_real_cnb_api() {
    use cnbrates::core::ExchangeRateProvider;
    use cnbrates::core::config::CnbApiConfig;
    use cnbrates::providers::CnbRateProvider;

    let config = CnbApiConfig {
        base_url: "https://api.cnb.cz".to_string(),
        exchange_rate_endpoint: "/cnbapi/exrates/".to_string(),
        default_currency: "CZK".to_string(),
    };
    let provider = CnbRateProvider::new(reqwest::Client::new(), config).unwrap();

    let date = "2024-01-15";
    info!(?date, "Fetching exchange rates from CNB");

    match provider.fetch_daily_rates(date).await {
        Ok(rates) => {
            info!(count = rates.len(), "Received successful rates response");
            assert!(!rates.is_empty(), "CNB publishes rates on weekdays");
            assert!(rates.iter().all(|r| r.target_currency().code() == "CZK"));
            assert!(rates.iter().any(|r| r.source_currency().code() == "USD"));
        }
        Err(e) => {
            error!("CNB API request failed: {e}\n{e:?}");
            panic!("CNB API request failed: {e}");
        }
    }
}
