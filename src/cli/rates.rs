use super::ui;
use crate::core::{Currency, ExchangeRate, ExchangeRateProvider, select_rates};
use anyhow::{Context, Result};
use comfy_table::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Fetches the rates for `date`, keeps the requested pairs and renders them.
pub async fn fetch_and_render(
    provider: &dyn ExchangeRateProvider,
    date: &str,
    currencies: &[Currency],
    format: OutputFormat,
) -> Result<String> {
    let rates = provider
        .fetch_daily_rates(date)
        .await
        .with_context(|| format!("Failed to fetch exchange rates for {date}"))?;
    let published = rates.len();
    let rates = select_rates(rates, currencies);

    match format {
        OutputFormat::Table => Ok(display_as_table(date, &rates, published)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&rates).context("Failed to serialize exchange rates")
        }
    }
}

/// Renders `rates` left after filtering; `published` is how many the source
/// returned before that.
pub fn display_as_table(date: &str, rates: &[ExchangeRate], published: usize) -> String {
    let mut output = format!(
        "Exchange rates for {}\n\n",
        ui::style_text(date, ui::StyleType::Title)
    );

    if published == 0 {
        output.push_str(&ui::style_text(
            "No rates published for this date",
            ui::StyleType::Subtle,
        ));
        return output;
    }

    if rates.is_empty() {
        output.push_str(&ui::style_text(
            &format!("No published rates match the selected currencies ({published} published)"),
            ui::StyleType::Subtle,
        ));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Quote"),
        ui::header_cell("Rate"),
    ]);

    for rate in rates {
        table.add_row(vec![
            Cell::new(rate.source_currency()),
            Cell::new(rate.target_currency()),
            ui::number_cell(rate.rate()),
        ]);
    }

    output.push_str(&table.to_string());
    let summary = if rates.len() == published {
        format!("{published} rates")
    } else {
        format!("{} of {published} rates", rates.len())
    };
    output.push_str(&format!(
        "\n\n{}",
        ui::style_text(&summary, ui::StyleType::Subtle)
    ));
    output
}
