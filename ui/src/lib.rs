//! Shared UI crate for Reelstats: datasets, aggregates, chart panels and views.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod views;

use dioxus::prelude::*;

/// Shared theme, linked as an asset on web. Desktop embeds the same file inline.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod kpi_card;
    pub use kpi_card::{KpiCard, KpiRow, KpiValues};
}
