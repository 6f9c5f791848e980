//! Summary values derived from the metric store.
//!
//! All functions are pure and total. Empty inputs report zero rather than
//! dividing by zero. Rounding is half away from zero (`f64::round`), so a mean
//! of exactly 44.5 minutes reports 45.

use once_cell::sync::Lazy;
use tracing::info;

use super::store::{DailyWatchPoint, MetricStore, SessionStat, METRIC_STORE};

/// Aggregates for the shipped store, computed on first access and never again.
pub static AGGREGATES: Lazy<AggregateMetrics> = Lazy::new(|| {
    let aggregates = AggregateMetrics::from_store(&METRIC_STORE);
    info!(
        total_watch_hours = aggregates.total_watch_hours,
        avg_session_length = aggregates.avg_session_length,
        completion_percentage = aggregates.completion_percentage,
        "dashboard aggregates computed"
    );
    aggregates
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateMetrics {
    pub total_watch_hours: f64,
    /// Whole minutes.
    pub avg_session_length: i64,
    /// Fraction in [0, 1], unrounded.
    pub avg_completion_rate: f64,
    /// `avg_completion_rate * 100`, rounded.
    pub completion_percentage: i64,
    pub estimated_active_users: u64,
}

impl AggregateMetrics {
    pub fn from_store(store: &MetricStore) -> Self {
        let avg_completion_rate = avg_completion_rate(store.session_stats());
        Self {
            total_watch_hours: total_watch_hours(store.daily_watch_time()),
            avg_session_length: avg_session_length(store.session_stats()),
            avg_completion_rate,
            completion_percentage: completion_percentage(avg_completion_rate),
            estimated_active_users: store.estimated_active_users(),
        }
    }
}

pub fn total_watch_hours(points: &[DailyWatchPoint]) -> f64 {
    points.iter().map(|point| point.hours).sum()
}

pub fn avg_session_length(stats: &[SessionStat]) -> i64 {
    let minutes: Vec<f64> = stats.iter().map(|stat| stat.avg_minutes).collect();
    round_half_away(mean(&minutes))
}

pub fn avg_completion_rate(stats: &[SessionStat]) -> f64 {
    let rates: Vec<f64> = stats.iter().map(|stat| stat.completion_rate).collect();
    mean(&rates)
}

pub fn completion_percentage(avg_completion_rate: f64) -> i64 {
    round_half_away(avg_completion_rate * 100.0)
}

/// Round to the nearest integer, ties away from zero.
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        0.0
    } else {
        data.iter().sum::<f64>() / data.len() as f64
    }
}
