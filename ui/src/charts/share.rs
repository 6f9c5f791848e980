use std::f64::consts::{PI, TAU};

use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::core::store::DeviceShare;
use crate::t;

use super::scale::ChartFrame;
use super::{legend, palette_color, LegendEntry, AXIS_TEXT_COLOR};

const OUTER_RADIUS: f64 = 80.0;
const LABEL_OFFSET: f64 = 18.0;

/// A pie slice. Angles are radians, starting at three o'clock and running
/// counter-clockwise, each slice proportional to its share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareSlice {
    pub device: String,
    pub percentage: f64,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path for the wedge; empty when the slice is the whole circle.
    pub path: String,
    pub full_circle: bool,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub label_anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShareGeometry {
    pub frame: ChartFrame,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub slices: Vec<ShareSlice>,
}

impl ShareGeometry {
    pub fn compute(shares: &[DeviceShare], frame: ChartFrame) -> Self {
        let cx = frame.width / 2.0;
        let cy = frame.height / 2.0;
        let radius = OUTER_RADIUS;
        let total: f64 = shares.iter().map(|s| s.percentage.max(0.0)).sum();

        let mut slices = Vec::with_capacity(shares.len());
        if total > 0.0 {
            let mut cursor = 0.0;
            for (idx, share) in shares.iter().enumerate() {
                let sweep = share.percentage.max(0.0) / total * TAU;
                let start_angle = cursor;
                let end_angle = cursor + sweep;
                cursor = end_angle;

                let full_circle = sweep >= TAU - 1e-9;
                let path = if full_circle || sweep <= 0.0 {
                    String::new()
                } else {
                    wedge_path(cx, cy, radius, start_angle, end_angle)
                };

                let mid = (start_angle + end_angle) / 2.0;
                let (label_x, label_y) = polar(cx, cy, radius + LABEL_OFFSET, mid);
                let label_anchor = if mid.cos() > 0.1 {
                    "start"
                } else if mid.cos() < -0.1 {
                    "end"
                } else {
                    "middle"
                };

                slices.push(ShareSlice {
                    device: share.device.clone(),
                    percentage: share.percentage,
                    color: palette_color(idx),
                    start_angle,
                    end_angle,
                    path,
                    full_circle,
                    label: slice_label(share),
                    label_x,
                    label_y,
                    label_anchor,
                });
            }
        }

        Self {
            frame,
            cx,
            cy,
            radius,
            slices,
        }
    }

    /// Tooltip text for the slice at `index`, e.g. `TV: 45`.
    pub fn readout(&self, index: usize) -> Option<String> {
        let slice = self.slices.get(index)?;
        Some(format!("{}: {}", slice.device, format_number(slice.percentage)))
    }
}

/// `TV (45%)`.
pub fn slice_label(share: &DeviceShare) -> String {
    format!("{} ({}%)", share.device, format_number(share.percentage))
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}

fn wedge_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, end);
    let large_arc = u8::from(end - start > PI);
    // Sweep flag 0: counter-clockwise on screen, matching the angle direction.
    format!(
        "M{cx:.2},{cy:.2} L{x0:.2},{y0:.2} A{radius:.2},{radius:.2} 0 {large_arc} 0 {x1:.2},{y1:.2} Z"
    )
}

#[component]
pub fn SharePanel(shares: Vec<DeviceShare>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let geometry = ShareGeometry::compute(&shares, ChartFrame::default());
    let view_box = geometry.frame.view_box();
    let tooltip = hovered().and_then(|idx| geometry.readout(idx));

    let legend_entries = geometry
        .slices
        .iter()
        .map(|slice| LegendEntry {
            label: slice.device.clone(),
            color: slice.color,
        })
        .collect();

    rsx! {
        div { class: "panel",
            div { class: "panel-header",
                h2 { {t!("share-title")} }
                p { {t!("share-blurb")} }
            }
            div { class: "chart",
                svg {
                    class: "chart__svg chart-share",
                    view_box: "{view_box}",
                    for (idx, slice) in geometry.slices.iter().enumerate() {
                        g {
                            key: "{slice.device}",
                            class: "chart-share__slice",
                            onmouseenter: move |_| hovered.set(Some(idx)),
                            onmouseleave: move |_| hovered.set(None),
                            if slice.full_circle {
                                circle {
                                    cx: geometry.cx,
                                    cy: geometry.cy,
                                    r: geometry.radius,
                                    fill: slice.color,
                                }
                            } else {
                                path { d: "{slice.path}", fill: slice.color, stroke: "#0f1116" }
                            }
                            text {
                                x: slice.label_x,
                                y: slice.label_y,
                                fill: AXIS_TEXT_COLOR,
                                font_size: "11",
                                text_anchor: slice.label_anchor,
                                dominant_baseline: "middle",
                                "{slice.label}"
                            }
                        }
                    }
                }
                if let Some(text) = tooltip {
                    div { class: "chart-tooltip", "{text}" }
                }
                {legend(legend_entries)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MetricStore;

    fn share(device: &str, percentage: f64) -> DeviceShare {
        DeviceShare {
            device: device.into(),
            percentage,
        }
    }

    #[test]
    fn shipped_devices_get_distinct_colors_in_order() {
        let store = MetricStore::shipped();
        let geometry = ShareGeometry::compute(store.device_usage(), ChartFrame::default());
        let colors: Vec<&str> = geometry.slices.iter().map(|s| s.color).collect();
        assert_eq!(colors, ["#8884d8", "#82ca9d", "#ffc658", "#ff7f7f"]);
        let labels: Vec<&str> = geometry.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["TV (45%)", "Mobile (30%)", "Tablet (10%)", "Web (15%)"]);
    }

    #[test]
    fn readout_names_device_and_share() {
        let store = MetricStore::shipped();
        let geometry = ShareGeometry::compute(store.device_usage(), ChartFrame::default());
        assert_eq!(geometry.readout(0).as_deref(), Some("TV: 45"));
        assert_eq!(geometry.readout(3).as_deref(), Some("Web: 15"));
        assert!(geometry.readout(4).is_none());
    }

    #[test]
    fn fifth_slice_reuses_first_color() {
        let shares = [
            share("TV", 20.0),
            share("Mobile", 20.0),
            share("Tablet", 20.0),
            share("Web", 20.0),
            share("Console", 20.0),
        ];
        let geometry = ShareGeometry::compute(&shares, ChartFrame::default());
        assert_eq!(geometry.slices[4].color, geometry.slices[0].color);
    }

    #[test]
    fn angles_are_proportional_and_contiguous() {
        let store = MetricStore::shipped();
        let geometry = ShareGeometry::compute(store.device_usage(), ChartFrame::default());
        let first = &geometry.slices[0];
        assert!((first.end_angle - 0.45 * TAU).abs() < 1e-9);
        assert!(geometry
            .slices
            .windows(2)
            .all(|w| (w[0].end_angle - w[1].start_angle).abs() < 1e-12));
        let last = geometry.slices.last().unwrap();
        assert!((last.end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn shares_are_normalized_when_total_is_not_hundred() {
        let shares = [share("TV", 30.0), share("Web", 30.0)];
        let geometry = ShareGeometry::compute(&shares, ChartFrame::default());
        assert!((geometry.slices[0].end_angle - PI).abs() < 1e-9);
        assert_eq!(geometry.slices[1].label, "Web (30%)");
    }

    #[test]
    fn single_full_share_is_a_circle() {
        let geometry = ShareGeometry::compute(&[share("TV", 100.0)], ChartFrame::default());
        assert!(geometry.slices[0].full_circle);
        assert!(geometry.slices[0].path.is_empty());
    }

    #[test]
    fn zero_total_draws_no_slices() {
        let geometry = ShareGeometry::compute(&[share("TV", 0.0)], ChartFrame::default());
        assert!(geometry.slices.is_empty());
    }

    #[test]
    fn large_slices_use_large_arc_flag() {
        let shares = [share("TV", 75.0), share("Web", 25.0)];
        let geometry = ShareGeometry::compute(&shares, ChartFrame::default());
        assert!(geometry.slices[0].path.contains(" 0 1 0 "));
        assert!(geometry.slices[1].path.contains(" 0 0 0 "));
    }
}
