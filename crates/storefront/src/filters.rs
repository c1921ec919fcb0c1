//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use rust_decimal::Decimal;

/// Format a raw amount as a dollar price, e.g. `$129.99`.
///
/// Values that do not parse as decimals are passed through with a `$`
/// prefix rather than failing the render.
fn format_money(raw: &str) -> String {
    match raw.parse::<Decimal>() {
        Ok(amount) => format!("${:.2}", amount.round_dp(2)),
        Err(_) => format!("${raw}"),
    }
}

/// Formats a decimal amount as a dollar price.
///
/// Usage in templates: `{{ product.price|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format_money(&value.to_string()))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
