use finance_tracker_frontend::api::decode_body;
use finance_tracker_frontend::charts::{ChartKind, ChartSlot, ChartSlots};
use finance_tracker_frontend::error::ApiError;
use finance_tracker_frontend::models::SummaryPayload;
use finance_tracker_frontend::presenter::{derive_category_series, Presenter, CATEGORY_PALETTE};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SUMMARY: &str = r#"{
    "total_income": 100,
    "total_expenses": 40,
    "balance": 60,
    "transactions": [
        {"id": 1, "amount": 100, "category": "Salary", "transaction_type": "income",
         "description": "March pay", "date": "2024-03-01 09:00:00", "source": "manual"},
        {"id": 2, "amount": 40, "category": "Food", "transaction_type": "expense",
         "description": "", "date": "2024-03-04 12:30:00", "source": "manual"}
    ],
    "by_category": {"Food": -40, "Salary": 100},
    "monthly_summary": {"2024-03": 60}
}"#;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn summary_renders_readouts_and_sorted_categories() {
    let payload: SummaryPayload = decode_body(true, 200, SUMMARY).unwrap();
    let view = Presenter::default().present_with(&payload, &mut rng());

    assert_eq!(view.income, "$100.00");
    assert_eq!(view.expenses, "$40.00");
    assert_eq!(view.balance, "$60.00");
    assert!(!view.balance_negative);

    let categories: Vec<(&str, f64)> = view
        .categories
        .iter()
        .map(|p| (p.label.as_str(), p.value))
        .collect();
    assert_eq!(categories, vec![("Salary", 100.0), ("Food", 40.0)]);
    assert_eq!(view.categories[0].color, CATEGORY_PALETTE[0]);
    assert_eq!(view.categories[1].color, CATEGORY_PALETTE[1]);
    assert_eq!(view.transactions.len(), 2);
}

#[test]
fn backend_error_payload_is_rejected() {
    let result = decode_body::<SummaryPayload>(true, 200, r#"{"error": "database is locked"}"#);
    assert!(matches!(result, Err(ApiError::Backend(ref m)) if m == "database is locked"));

    let result = decode_body::<SummaryPayload>(false, 500, "");
    assert!(matches!(result, Err(ApiError::Status(500))));
}

#[test]
fn fallback_payload_renders_zeroes() {
    let view = Presenter::default().present_with(&SummaryPayload::default(), &mut rng());
    assert_eq!(view.income, "$0.00");
    assert_eq!(view.expenses, "$0.00");
    assert_eq!(view.balance, "$0.00");
    assert!(view.categories.is_empty());
    assert!(view.monthly.is_empty());
}

#[test]
fn many_categories_all_get_colors_and_stay_sorted() {
    let body = format!(
        "{{{}}}",
        (0..25)
            .map(|i| format!("\"cat{}\": {}", i, if i % 2 == 0 { -(i as f64) * 3.5 } else { i as f64 }))
            .collect::<Vec<_>>()
            .join(",")
    );
    let map = serde_json::from_str(&body).unwrap();
    let series = derive_category_series(&map);

    assert_eq!(series.len(), 25);
    assert!(series.windows(2).all(|w| w[0].value >= w[1].value));
    for point in &series[..10] {
        assert!(CATEGORY_PALETTE.contains(&point.color.as_str()));
    }
    for point in &series[10..] {
        assert!(point.color.starts_with("hsl("), "{}", point.color);
    }
}

#[test]
fn repeated_redraws_keep_one_chart_per_slot() {
    let payload: SummaryPayload = decode_body(true, 200, SUMMARY).unwrap();
    let presenter = Presenter::new("€");
    let mut slots = ChartSlots::default();

    for _ in 0..3 {
        let view = presenter.present_with(&payload, &mut rng());
        slots.redraw(&view.categories, &view.monthly, &presenter);
    }

    assert_eq!(slots.disposed_count(), 4);
    match slots.get(ChartSlot::Category).map(|c| &c.kind) {
        Some(ChartKind::Pie(pie)) => {
            assert_eq!(pie.slices.len(), 2);
            assert_eq!(pie.slices[0].legend, "Salary (€100.00)");
        }
        other => panic!("expected a pie chart, got {:?}", other),
    }
    assert!(matches!(
        slots.get(ChartSlot::Monthly).map(|c| &c.kind),
        Some(ChartKind::Line(_))
    ));
}
