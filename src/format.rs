//! Display formatting for amounts, ratios and dates.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Placeholder for a percentage whose total is zero.
pub const EMPTY_PERCENTAGE: &str = "0.0%";

struct Rounded {
    negative: bool,
    whole: String,
    fraction: String,
}

/// Rounds half away from zero on the shortest decimal representation of
/// `value`, so `12.345` becomes `12.35` even though the nearest double sits
/// just below.
fn round_half_up(value: f64, places: u32) -> Rounded {
    let exact = if value.is_finite() {
        Decimal::from_str(&value.to_string()).unwrap_or_else(|err| {
            log::warn!("Cannot represent {} as a decimal: {}", value, err);
            Decimal::ZERO
        })
    } else {
        Decimal::ZERO
    };

    let mut rounded = exact.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded.set_sign_positive(true);
    rounded.rescale(places);

    let text = rounded.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    Rounded {
        negative,
        whole: whole.to_string(),
        fraction: fraction.to_string(),
    }
}

fn group_thousands(whole: &str) -> String {
    let chars: Vec<char> = whole.chars().rev().collect();
    let mut out = Vec::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

/// `-12.345` with `$` renders as `-$12.35`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = round_half_up(amount, 2);
    let sign = if rounded.negative { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        symbol,
        group_thousands(&rounded.whole),
        rounded.fraction
    )
}

pub fn format_percentage(value: f64, total: f64) -> String {
    if total == 0.0 {
        return EMPTY_PERCENTAGE.to_string();
    }
    let ratio = value / total * 100.0;
    if !ratio.is_finite() {
        return EMPTY_PERCENTAGE.to_string();
    }
    let rounded = round_half_up(ratio, 1);
    let sign = if rounded.negative { "-" } else { "" };
    format!("{}{}.{}%", sign, rounded.whole, rounded.fraction)
}

/// `2024-03-02 10:15:00` renders as `3/2/2024`; unparseable input is shown as is.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_has_two_decimals() {
        assert_eq!(format_currency(0.0, "$"), "$0.00");
    }

    #[test]
    fn negative_rounds_half_up() {
        assert_eq!(format_currency(-12.345, "$"), "-$12.35");
        assert_eq!(format_currency(1.005, "$"), "$1.01");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(1234567.5, "$"), "$1,234,567.50");
        assert_eq!(format_currency(-1000.0, "€"), "-€1,000.00");
        assert_eq!(format_currency(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn tiny_negative_is_not_signed() {
        assert_eq!(format_currency(-0.001, "$"), "$0.00");
        assert_eq!(format_currency(-0.0, "$"), "$0.00");
    }

    #[test]
    fn carries_through_every_digit() {
        assert_eq!(format_currency(0.005, "$"), "$0.01");
        assert_eq!(format_currency(-999999.995, "$"), "-$1,000,000.00");
        assert_eq!(format_currency(1e21, "$"), "$1,000,000,000,000,000,000,000.00");
    }

    #[test]
    fn non_finite_amount_renders_zero() {
        assert_eq!(format_currency(f64::NAN, "$"), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, "$"), "$0.00");
    }

    #[test]
    fn percentage_of_zero_total_is_placeholder() {
        assert_eq!(format_percentage(25.0, 0.0), "0.0%");
        assert_eq!(format_percentage(0.0, 0.0), "0.0%");
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(format_percentage(1.0, 3.0), "33.3%");
        assert_eq!(format_percentage(2.0, 3.0), "66.7%");
        assert_eq!(format_percentage(40.0, 140.0), "28.6%");
        assert_eq!(format_percentage(100.0, 100.0), "100.0%");
    }

    #[test]
    fn percentage_with_non_finite_input_is_placeholder() {
        assert_eq!(format_percentage(f64::NAN, 10.0), "0.0%");
        assert_eq!(format_percentage(f64::INFINITY, 10.0), "0.0%");
    }

    #[test]
    fn dates_render_month_day_year() {
        assert_eq!(format_date("2024-03-02 10:15:00"), "3/2/2024");
        assert_eq!(format_date("2024-11-20T08:00:00"), "11/20/2024");
        assert_eq!(format_date("2024-01-09"), "1/9/2024");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
