//! Chart panels rendered as inline SVG.
//!
//! Each panel pairs a pure geometry builder (unit tested, renderer-free) with a
//! Dioxus component that draws it. Panels never talk to each other; the only
//! outward signal is the ranking panel's activation callback.

pub mod scale;

mod trend;
pub use trend::{TrendGeometry, TrendPanel};

mod ranking;
pub use ranking::{
    footnote_copy, FootnoteCopy, RankingBar, RankingGeometry, RankingPanel, RankingReadout,
};

mod share;
pub use share::{ShareGeometry, SharePanel, ShareSlice};

mod dual;
pub use dual::{DualMetricGeometry, DualMetricPanel, DualReadout};

use dioxus::prelude::*;

use scale::ChartFrame;

/// Slice colours, assigned by index and cycled.
pub const PALETTE: [&str; 4] = ["#8884d8", "#82ca9d", "#ffc658", "#ff7f7f"];
pub const PRIMARY_COLOR: &str = PALETTE[0];
pub const SECONDARY_COLOR: &str = PALETTE[1];

const GRID_COLOR: &str = "#2d3340";
const AXIS_TEXT_COLOR: &str = "#9aa3b5";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// A labelled position along an axis (pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// A category mark in input order (pixels).
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedPoint {
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

/// Dashed horizontal grid lines at each tick.
fn horizontal_grid(frame: ChartFrame, ticks: &[AxisTick]) -> Element {
    rsx! {
        g { class: "chart__grid",
            for tick in ticks.iter() {
                line {
                    x1: frame.plot_left(),
                    x2: frame.plot_right(),
                    y1: tick.position,
                    y2: tick.position,
                    stroke: GRID_COLOR,
                    stroke_dasharray: "3 3",
                }
            }
        }
    }
}

/// Dashed vertical grid lines at each tick.
fn vertical_grid(frame: ChartFrame, ticks: &[AxisTick]) -> Element {
    rsx! {
        g { class: "chart__grid",
            for tick in ticks.iter() {
                line {
                    x1: tick.position,
                    x2: tick.position,
                    y1: frame.plot_top(),
                    y2: frame.plot_bottom(),
                    stroke: GRID_COLOR,
                    stroke_dasharray: "3 3",
                }
            }
        }
    }
}

/// Tick labels for a vertical value axis drawn at `x`.
fn value_axis_labels(ticks: &[AxisTick], x: f64, anchor: &'static str) -> Element {
    rsx! {
        g { class: "chart__axis",
            for tick in ticks.iter() {
                text {
                    x: x,
                    y: tick.position,
                    fill: AXIS_TEXT_COLOR,
                    font_size: "11",
                    text_anchor: anchor,
                    dominant_baseline: "middle",
                    "{tick.label}"
                }
            }
        }
    }
}

/// Category labels under the plot area, in input order.
fn category_axis_labels(frame: ChartFrame, points: &[PlottedPoint]) -> Element {
    let y = frame.plot_bottom() + 18.0;
    rsx! {
        g { class: "chart__axis",
            for point in points.iter() {
                text {
                    x: point.x,
                    y: y,
                    fill: AXIS_TEXT_COLOR,
                    font_size: "11",
                    text_anchor: "middle",
                    "{point.label}"
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LegendEntry {
    label: String,
    color: &'static str,
}

fn legend(entries: Vec<LegendEntry>) -> Element {
    rsx! {
        ul { class: "chart-legend",
            for entry in entries.into_iter() {
                li { class: "chart-legend__item",
                    span {
                        class: "chart-legend__swatch",
                        style: "background:{entry.color}",
                    }
                    "{entry.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_every_four() {
        assert_eq!(palette_color(0), "#8884d8");
        assert_eq!(palette_color(3), "#ff7f7f");
        assert_eq!(palette_color(4), palette_color(0));
        assert_eq!(palette_color(9), palette_color(1));
    }
}
