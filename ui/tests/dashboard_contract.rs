//! End-to-end checks of what the dashboard shows for the shipped mock week.

use ui::charts::scale::ChartFrame;
use ui::charts::{footnote_copy, ShareGeometry, TrendGeometry};
use ui::components::KpiValues;
use ui::core::aggregate::{AggregateMetrics, AGGREGATES};
use ui::core::selection::SelectionState;
use ui::core::store::{MetricStore, METRIC_STORE};

#[test]
fn kpi_cards_for_shipped_week() {
    let values = KpiValues::from_aggregates(&AGGREGATES, "en-US");
    assert_eq!(values.watch_time, "12.0k hrs");
    assert_eq!(values.active_users, "48,000");
    assert_eq!(values.session_length, "45 min");
    assert_eq!(values.completion, "69%");
}

#[test]
fn aggregates_are_a_pure_function_of_the_store() {
    let first = AggregateMetrics::from_store(&METRIC_STORE);
    let second = AggregateMetrics::from_store(&METRIC_STORE);
    assert_eq!(first, second);
    assert_eq!(first, AggregateMetrics::from_store(&MetricStore::shipped()));
    assert_eq!(first.total_watch_hours, 12_000.0);
}

#[test]
fn selection_flow_updates_footnote() {
    ui::i18n::init();
    ui::i18n::set_language("en-US").unwrap();
    let mut selection = SelectionState::new();
    assert!(footnote_copy(&selection).is_none());

    selection.activate(Some("Cloud City"));
    let text = footnote_copy(&selection).map(|c| c.plain_text()).unwrap_or_default();
    assert!(text.starts_with("You selected Cloud City "));

    selection.activate(Some("Bug Hunters"));
    let text = footnote_copy(&selection).map(|c| c.plain_text()).unwrap_or_default();
    assert!(text.contains("Bug Hunters"));
    assert!(!text.contains("Cloud City"));
}

#[test]
fn activation_titles_come_from_ranking() {
    let mut selection = SelectionState::new();
    for show in METRIC_STORE.top_shows() {
        assert!(selection.activate(Some(show.title.as_str())));
        assert_eq!(selection.selected_show(), Some(show.title.as_str()));
    }
}

#[test]
fn device_slices_get_distinct_colors() {
    let geometry = ShareGeometry::compute(METRIC_STORE.device_usage(), ChartFrame::default());
    let mut colors: Vec<&str> = geometry.slices.iter().map(|s| s.color).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), 4);
}

#[test]
fn trend_axis_preserves_input_order() {
    let geometry = TrendGeometry::compute(METRIC_STORE.daily_watch_time(), ChartFrame::default());
    let labels: Vec<&str> = geometry.points.iter().map(|p| p.label.as_str()).collect();
    let source: Vec<&str> = METRIC_STORE
        .daily_watch_time()
        .iter()
        .map(|p| p.date.as_str())
        .collect();
    assert_eq!(labels, source);
}
