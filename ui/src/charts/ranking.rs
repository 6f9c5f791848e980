use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::core::selection::SelectionState;
use crate::core::store::ShowEntry;
use crate::t;

use super::scale::{nice_ticks, BandScale, ChartFrame, LinearScale};
use super::{legend, vertical_grid, AxisTick, LegendEntry, AXIS_TEXT_COLOR, SECONDARY_COLOR};

const BAR_RADIUS: f64 = 4.0;

/// One horizontal bar plus the full-width row that activates it.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingBar {
    pub title: String,
    pub hours: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub row_y: f64,
    pub row_height: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingGeometry {
    pub frame: ChartFrame,
    pub bars: Vec<RankingBar>,
    pub x_ticks: Vec<AxisTick>,
}

impl RankingGeometry {
    pub fn compute(shows: &[ShowEntry], frame: ChartFrame) -> Self {
        let max = shows.iter().map(|s| s.hours).fold(0.0, f64::max);
        let tick_values = nice_ticks(max, 4);
        let top = tick_values.last().copied().unwrap_or(0.0);

        let x_scale = LinearScale::new((0.0, top), (frame.plot_left(), frame.plot_right()));
        let rows = BandScale::new(shows.len(), (frame.plot_top(), frame.plot_bottom()), 0.25);

        let bars = shows
            .iter()
            .enumerate()
            .map(|(idx, show)| RankingBar {
                title: show.title.clone(),
                hours: show.hours,
                x: frame.plot_left(),
                y: rows.bar_start(idx),
                width: (x_scale.map(show.hours) - frame.plot_left()).max(0.0),
                height: rows.bandwidth(),
                row_y: rows.band_start(idx),
                row_height: rows.step(),
                label_y: rows.center(idx),
            })
            .collect();

        let x_ticks = tick_values
            .iter()
            .map(|value| AxisTick {
                position: x_scale.map(*value),
                label: format_number(*value),
            })
            .collect();

        Self {
            frame,
            bars,
            x_ticks,
        }
    }

    /// Tooltip for the bar at `index`: its title over `<series>: <hours>`.
    pub fn readout(&self, index: usize, series_label: &str) -> Option<RankingReadout> {
        let bar = self.bars.get(index)?;
        Some(RankingReadout {
            title: bar.title.clone(),
            line: format!("{series_label}: {}", format_number(bar.hours)),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingReadout {
    pub title: String,
    pub line: String,
}

/// Localized footnote pieces for the current selection; the title sits between
/// `lead` and `tail` and is rendered in bold.
#[derive(Debug, Clone, PartialEq)]
pub struct FootnoteCopy {
    pub lead: String,
    pub title: String,
    pub tail: String,
}

impl FootnoteCopy {
    pub fn plain_text(&self) -> String {
        format!("{} {} {}", self.lead, self.title, self.tail)
    }
}

pub fn footnote_copy(selection: &SelectionState) -> Option<FootnoteCopy> {
    selection.selected_show().map(|title| FootnoteCopy {
        lead: t!("footnote-lead"),
        title: title.to_string(),
        tail: t!("footnote-tail"),
    })
}

/// Horizontal bars for the weekly ranking.
///
/// Activating a row reports its title through `on_activate`; clicks elsewhere in
/// the chart report `None`. The selection footnote renders under the chart.
#[component]
pub fn RankingPanel(
    shows: Vec<ShowEntry>,
    selection: SelectionState,
    on_activate: EventHandler<Option<String>>,
) -> Element {
    let frame = ChartFrame::default().with_margins(12.0, 16.0, 28.0, 104.0);
    let geometry = RankingGeometry::compute(&shows, frame);
    let view_box = frame.view_box();
    let plot_width = frame.plot_right() - frame.plot_left();
    let axis_y = frame.plot_bottom() + 18.0;
    let mut hovered = use_signal(|| Option::<usize>::None);

    let series_label = t!("ranking-series");
    let readout = hovered().and_then(|idx| geometry.readout(idx, &series_label));
    let footnote = footnote_copy(&selection);

    let legend_entries = vec![LegendEntry {
        label: series_label.clone(),
        color: SECONDARY_COLOR,
    }];

    rsx! {
        div { class: "panel",
            div { class: "panel-header",
                h2 { {t!("ranking-title")} }
                p { {t!("ranking-blurb")} }
            }
            div { class: "chart",
                svg {
                    class: "chart__svg chart-ranking",
                    view_box: "{view_box}",
                    onclick: move |_| on_activate.call(None),
                    {vertical_grid(frame, &geometry.x_ticks)}
                    g { class: "chart__axis",
                        for tick in geometry.x_ticks.iter() {
                            text {
                                x: tick.position,
                                y: axis_y,
                                fill: AXIS_TEXT_COLOR,
                                font_size: "11",
                                text_anchor: "middle",
                                "{tick.label}"
                            }
                        }
                    }
                    for (idx, bar) in geometry.bars.iter().cloned().enumerate() {
                        g {
                            key: "{bar.title}",
                            class: row_class(&selection, &bar.title),
                            onmouseenter: move |_| hovered.set(Some(idx)),
                            onmouseleave: move |_| hovered.set(None),
                            onclick: {
                                let title = bar.title.clone();
                                move |evt: MouseEvent| {
                                    evt.stop_propagation();
                                    on_activate.call(Some(title.clone()));
                                }
                            },
                            rect {
                                class: "chart__hit",
                                x: frame.plot_left(),
                                y: bar.row_y,
                                width: plot_width,
                                height: bar.row_height,
                                fill: "transparent",
                            }
                            rect {
                                x: bar.x,
                                y: bar.y,
                                width: bar.width,
                                height: bar.height,
                                rx: BAR_RADIUS,
                                ry: BAR_RADIUS,
                                fill: SECONDARY_COLOR,
                            }
                            text {
                                x: frame.plot_left() - 8.0,
                                y: bar.label_y,
                                fill: AXIS_TEXT_COLOR,
                                font_size: "11",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                "{bar.title}"
                            }
                        }
                    }
                }
                if let Some(readout) = readout {
                    div { class: "chart-tooltip",
                        strong { "{readout.title}" }
                        span { "{readout.line}" }
                    }
                }
                {legend(legend_entries)}
            }
            if let Some(copy) = footnote {
                p { class: "panel-footnote",
                    "{copy.lead} "
                    strong { "{copy.title}" }
                    " {copy.tail}"
                }
            }
        }
    }
}

fn row_class(selection: &SelectionState, title: &str) -> &'static str {
    if selection.selected_show() == Some(title) {
        "chart-ranking__row chart-ranking__row--active"
    } else {
        "chart-ranking__row"
    }
}
