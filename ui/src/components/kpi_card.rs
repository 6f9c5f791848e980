use dioxus::prelude::*;

use crate::core::aggregate::AggregateMetrics;
use crate::core::format::{
    format_grouped, format_minutes, format_percent, format_watch_hours_k, group_separator,
};
use crate::t;

/// A single headline number. The subtitle line is omitted when `None`.
#[component]
pub fn KpiCard(label: String, value: String, subtitle: Option<String>) -> Element {
    rsx! {
        div { class: "kpi-card",
            div { class: "kpi-label", "{label}" }
            div { class: "kpi-value", "{value}" }
            if let Some(subtitle) = subtitle {
                div { class: "kpi-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Display strings for the four cards, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiValues {
    pub watch_time: String,
    pub active_users: String,
    pub session_length: String,
    pub completion: String,
}

impl KpiValues {
    /// `language` picks the thousands separator for the active-users figure.
    pub fn from_aggregates(metrics: &AggregateMetrics, language: &str) -> Self {
        Self {
            watch_time: format_watch_hours_k(metrics.total_watch_hours),
            active_users: format_grouped(metrics.estimated_active_users, group_separator(language)),
            session_length: format_minutes(metrics.avg_session_length),
            completion: format_percent(metrics.completion_percentage),
        }
    }
}

#[component]
pub fn KpiRow(metrics: AggregateMetrics, language: String) -> Element {
    let values = KpiValues::from_aggregates(&metrics, &language);

    rsx! {
        section { class: "kpi-row",
            KpiCard {
                label: t!("kpi-watch-time-label"),
                value: values.watch_time,
                subtitle: t!("kpi-watch-time-subtitle"),
            }
            KpiCard {
                label: t!("kpi-active-users-label"),
                value: values.active_users,
                subtitle: t!("kpi-active-users-subtitle"),
            }
            KpiCard {
                label: t!("kpi-session-label"),
                value: values.session_length,
                subtitle: t!("kpi-session-subtitle"),
            }
            KpiCard {
                label: t!("kpi-completion-label"),
                value: values.completion,
                subtitle: t!("kpi-completion-subtitle"),
            }
        }
    }
}
