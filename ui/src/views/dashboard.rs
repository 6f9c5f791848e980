use dioxus::prelude::*;
use tracing::debug;

use crate::charts::{DualMetricPanel, RankingPanel, SharePanel, TrendPanel};
use crate::components::KpiRow;
use crate::core::aggregate::AGGREGATES;
use crate::core::selection::SelectionState;
use crate::core::store::METRIC_STORE;
use crate::i18n;

#[component]
pub fn Dashboard() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();
    let language = i18n::current_language();

    let mut selection = use_signal(SelectionState::new);
    let store = &*METRIC_STORE;
    let metrics = *AGGREGATES;

    let on_activate = move |label: Option<String>| {
        let changed = selection.with_mut(|state| state.activate(label.as_deref()));
        debug!(changed, "ranking activation handled");
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-dashboard",
            header { class: "app-header",
                h1 { class: "app-title", {crate::t!("dashboard-title")} }
                p { class: "app-subtitle", {crate::t!("dashboard-subtitle")} }
            }

            KpiRow { metrics, language }

            section { class: "grid",
                TrendPanel { points: store.daily_watch_time().to_vec() }
                RankingPanel {
                    shows: store.top_shows().to_vec(),
                    selection: selection(),
                    on_activate,
                }
                SharePanel { shares: store.device_usage().to_vec() }
                DualMetricPanel { stats: store.session_stats().to_vec() }
            }
        }
    }
}
