//! Summary presenter: turns a summary payload into readouts and chart series.
//!
//! Everything here is a pure function of the payload except [`load_summary`],
//! which performs the fetch and swallows failures into a zeroed payload.

use rand::Rng;

use crate::api::ApiClient;
use crate::error::ApiError;
use crate::format;
use crate::models::{AmountMap, SummaryPayload, Transaction};

pub const CATEGORY_PALETTE: [&str; 10] = [
    "#10b981", // green
    "#3b82f6", // blue
    "#f59e0b", // yellow
    "#ef4444", // red
    "#8b5cf6", // purple
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f97316", // orange
    "#06b6d4", // cyan
    "#84cc16", // lime
];

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPoint {
    pub label: String,
    /// Absolute magnitude of the category total.
    pub value: f64,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyPoint {
    pub month: String,
    pub balance: f64,
}

pub type CategorySeries = Vec<CategoryPoint>;
pub type MonthlySeries = Vec<MonthlyPoint>;

/// Palette colors first, then random hues once the palette runs out.
pub fn category_colors<R: Rng>(count: usize, rng: &mut R) -> Vec<String> {
    let mut colors: Vec<String> = CATEGORY_PALETTE
        .iter()
        .take(count)
        .map(|c| c.to_string())
        .collect();
    while colors.len() < count {
        let hue: f64 = rng.gen_range(0.0..360.0);
        colors.push(format!("hsl({:.0}, 70%, 60%)", hue));
    }
    colors
}

pub fn derive_category_series_with<R: Rng>(
    by_category: &AmountMap,
    rng: &mut R,
) -> CategorySeries {
    let mut entries: Vec<(&str, f64)> = by_category
        .iter()
        .map(|(label, amount)| (label, amount.abs()))
        .collect();

    // sort_by is stable, so equal magnitudes keep their wire order.
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    let colors = category_colors(entries.len(), rng);
    entries
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| CategoryPoint {
            label: label.to_string(),
            value,
            color,
        })
        .collect()
}

pub fn derive_category_series(by_category: &AmountMap) -> CategorySeries {
    derive_category_series_with(by_category, &mut rand::thread_rng())
}

pub fn derive_monthly_series(monthly_summary: &AmountMap) -> MonthlySeries {
    let mut series: MonthlySeries = monthly_summary
        .iter()
        .map(|(month, balance)| MonthlyPoint {
            month: month.to_string(),
            balance,
        })
        .collect();
    series.sort_by(|a, b| a.month.cmp(&b.month));
    series
}

/// Everything the dashboard shows for one summary payload.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryView {
    pub income: String,
    pub expenses: String,
    pub balance: String,
    pub balance_negative: bool,
    pub categories: CategorySeries,
    pub monthly: MonthlySeries,
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Presenter {
    currency_symbol: String,
}

impl Default for Presenter {
    fn default() -> Self {
        Presenter::new(format::DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Presenter {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Presenter {
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn format_currency(&self, amount: f64) -> String {
        format::format_currency(amount, &self.currency_symbol)
    }

    pub fn compute_percentage(&self, value: f64, total: f64) -> String {
        format::format_percentage(value, total)
    }

    pub fn present(&self, payload: &SummaryPayload) -> SummaryView {
        self.present_with(payload, &mut rand::thread_rng())
    }

    pub fn present_with<R: Rng>(&self, payload: &SummaryPayload, rng: &mut R) -> SummaryView {
        let balance = payload.balance();
        SummaryView {
            income: self.format_currency(payload.total_income),
            expenses: self.format_currency(payload.total_expenses),
            balance: self.format_currency(balance),
            balance_negative: balance < 0.0,
            categories: derive_category_series_with(&payload.by_category, rng),
            monthly: derive_monthly_series(&payload.monthly_summary),
            transactions: payload.transactions.clone(),
        }
    }

    /// Readouts shown before a session exists or after a failed load.
    pub fn empty_view(&self) -> SummaryView {
        self.present_with(&SummaryPayload::default(), &mut rand::thread_rng())
    }
}

pub async fn load_summary(client: &ApiClient) -> SummaryPayload {
    summary_or_fallback(client.fetch_summary().await)
}

/// Passes a fetched payload through, or logs the failure and zeroes it.
pub fn summary_or_fallback(result: Result<SummaryPayload, ApiError>) -> SummaryPayload {
    match result {
        Ok(payload) => {
            log::debug!(
                "Loaded summary: {} transactions, {} categories, {} months",
                payload.transactions.len(),
                payload.by_category.len(),
                payload.monthly_summary.len()
            );
            payload
        }
        Err(err) => {
            log::error!("Error loading summary: {}", err);
            SummaryPayload::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn amounts(entries: &[(&str, f64)]) -> AmountMap {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn categories_sorted_by_magnitude() {
        let map = amounts(&[("Food", -40.0), ("Salary", 100.0), ("Rent", -900.0), ("Gift", 5.0)]);
        let series = derive_category_series_with(&map, &mut rng());
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Rent", "Salary", "Food", "Gift"]);
        assert!(series.windows(2).all(|w| w[0].value >= w[1].value));
        assert!(series.iter().all(|p| p.value >= 0.0));
    }

    #[test]
    fn ties_keep_wire_order() {
        let map = amounts(&[("B", 10.0), ("A", -10.0), ("C", 10.0)]);
        let series = derive_category_series_with(&map, &mut rng());
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[test]
    fn palette_colors_are_unique_up_to_ten() {
        let entries: Vec<(String, f64)> = (0..10).map(|i| (format!("c{}", i), i as f64 + 1.0)).collect();
        let series = derive_category_series_with(&AmountMap::new(entries), &mut rng());
        let colors: HashSet<&str> = series.iter().map(|p| p.color.as_str()).collect();
        assert_eq!(colors.len(), 10);
        assert!(series.iter().all(|p| CATEGORY_PALETTE.contains(&p.color.as_str())));
    }

    #[test]
    fn overflow_colors_are_generated_hues() {
        let colors = category_colors(14, &mut rng());
        assert_eq!(colors.len(), 14);
        assert_eq!(&colors[..10], &CATEGORY_PALETTE.map(String::from)[..]);
        for color in &colors[10..] {
            assert!(color.starts_with("hsl(") && color.ends_with(", 70%, 60%)"), "{}", color);
        }
    }

    #[test]
    fn null_category_total_sorts_last() {
        let map: AmountMap = serde_json::from_str(r#"{"Broken": null, "Food": -3}"#).unwrap();
        let series = derive_category_series_with(&map, &mut rng());
        let pairs: Vec<(&str, f64)> = series.iter().map(|p| (p.label.as_str(), p.value)).collect();
        assert_eq!(pairs, vec![("Food", 3.0), ("Broken", 0.0)]);
    }

    #[test]
    fn months_sorted_chronologically() {
        let map = amounts(&[("2024-03", -50.0), ("2024-01", 100.0), ("2024-02", 0.0)]);
        let series = derive_monthly_series(&map);
        let pairs: Vec<(&str, f64)> = series.iter().map(|p| (p.month.as_str(), p.balance)).collect();
        assert_eq!(pairs, vec![("2024-01", 100.0), ("2024-02", 0.0), ("2024-03", -50.0)]);
    }

    #[test]
    fn derivation_leaves_payload_untouched() {
        let payload = SummaryPayload {
            by_category: amounts(&[("Food", -40.0), ("Salary", 100.0)]),
            monthly_summary: amounts(&[("2024-02", 1.0), ("2024-01", 2.0)]),
            ..SummaryPayload::default()
        };
        let before = payload.clone();
        let _ = Presenter::default().present_with(&payload, &mut rng());
        assert_eq!(payload, before);
    }

    #[test]
    fn negative_balance_is_flagged() {
        let payload = SummaryPayload {
            total_income: 10.0,
            total_expenses: 25.0,
            ..SummaryPayload::default()
        };
        let view = Presenter::default().present_with(&payload, &mut rng());
        assert_eq!(view.balance, "-$15.00");
        assert!(view.balance_negative);
    }

    #[test]
    fn failed_summary_falls_back_to_zeroes() {
        let payload = summary_or_fallback(Err(ApiError::Status(500)));
        assert_eq!(payload, SummaryPayload::default());

        let view = Presenter::default().present_with(&payload, &mut rng());
        assert_eq!(view.income, "$0.00");
        assert_eq!(view.balance, "$0.00");
        assert!(view.categories.is_empty());
        assert!(view.monthly.is_empty());
    }

    #[test]
    fn fetched_summary_passes_through() {
        let payload = SummaryPayload {
            total_income: 5.0,
            ..SummaryPayload::default()
        };
        assert_eq!(summary_or_fallback(Ok(payload.clone())), payload);
    }

    #[test]
    fn presenter_uses_its_currency() {
        let presenter = Presenter::new("€");
        assert_eq!(presenter.format_currency(1500.0), "€1,500.00");
        assert_eq!(presenter.compute_percentage(25.0, 0.0), "0.0%");
    }
}
