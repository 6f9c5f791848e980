use dioxus::prelude::*;

use crate::core::format::{format_fraction_percent, format_number};
use crate::core::store::SessionStat;
use crate::t;

use super::scale::{monotone_path, nice_ticks, ChartFrame, LinearScale, PointScale};
use super::{
    category_axis_labels, horizontal_grid, legend, value_axis_labels, AxisTick, LegendEntry,
    PlottedPoint, PRIMARY_COLOR, SECONDARY_COLOR,
};

/// Right-axis ticks: the completion fraction is always drawn over [0, 1].
const COMPLETION_TICKS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Two lines over shared weekdays: minutes on the left axis, completion on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct DualMetricGeometry {
    pub frame: ChartFrame,
    pub minutes: Vec<PlottedPoint>,
    pub completion: Vec<PlottedPoint>,
    pub left_ticks: Vec<AxisTick>,
    pub right_ticks: Vec<AxisTick>,
    pub minutes_path: String,
    pub completion_path: String,
    pub hit_half_width: f64,
}

impl DualMetricGeometry {
    pub fn compute(stats: &[SessionStat], frame: ChartFrame) -> Self {
        let max_minutes = stats.iter().map(|s| s.avg_minutes).fold(0.0, f64::max);
        let left_values = nice_ticks(max_minutes, 4);
        let left_top = left_values.last().copied().unwrap_or(0.0);

        let x_scale = PointScale::new(stats.len(), (frame.plot_left(), frame.plot_right()));
        let left = LinearScale::new((0.0, left_top), (frame.plot_bottom(), frame.plot_top()));
        let right = LinearScale::new((0.0, 1.0), (frame.plot_bottom(), frame.plot_top()));

        let minutes: Vec<PlottedPoint> = stats
            .iter()
            .enumerate()
            .map(|(idx, stat)| PlottedPoint {
                label: stat.day.clone(),
                value: stat.avg_minutes,
                x: x_scale.position(idx),
                y: left.map(stat.avg_minutes),
            })
            .collect();
        let completion: Vec<PlottedPoint> = stats
            .iter()
            .enumerate()
            .map(|(idx, stat)| PlottedPoint {
                label: stat.day.clone(),
                value: stat.completion_rate,
                x: x_scale.position(idx),
                y: right.map(stat.completion_rate),
            })
            .collect();

        let minutes_path = monotone_path(&minutes.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());
        let completion_path =
            monotone_path(&completion.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());

        let left_ticks = left_values
            .iter()
            .map(|value| AxisTick {
                position: left.map(*value),
                label: format_number(*value),
            })
            .collect();
        let right_ticks = COMPLETION_TICKS
            .iter()
            .map(|value| AxisTick {
                position: right.map(*value),
                label: format_fraction_percent(*value),
            })
            .collect();

        Self {
            frame,
            minutes,
            completion,
            left_ticks,
            right_ticks,
            minutes_path,
            completion_path,
            hit_half_width: x_scale.half_step(),
        }
    }

    /// Tooltip lines for the day at `index`: raw minutes, completion as a percentage.
    pub fn readout(&self, index: usize) -> Option<DualReadout> {
        let minutes = self.minutes.get(index)?;
        let completion = self.completion.get(index)?;
        Some(DualReadout {
            day: minutes.label.clone(),
            minutes: format_number(minutes.value),
            completion: format_fraction_percent(completion.value),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DualReadout {
    pub day: String,
    pub minutes: String,
    pub completion: String,
}

#[component]
pub fn DualMetricPanel(stats: Vec<SessionStat>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let frame = ChartFrame::default().with_margins(12.0, 48.0, 28.0, 40.0);
    let geometry = DualMetricGeometry::compute(&stats, frame);
    let view_box = frame.view_box();
    let plot_height = frame.plot_bottom() - frame.plot_top();

    let minutes_label = t!("session-minutes-series");
    let completion_label = t!("session-completion-series");
    let readout = hovered().and_then(|idx| geometry.readout(idx));

    let legend_entries = vec![
        LegendEntry {
            label: minutes_label.clone(),
            color: PRIMARY_COLOR,
        },
        LegendEntry {
            label: completion_label.clone(),
            color: SECONDARY_COLOR,
        },
    ];

    rsx! {
        div { class: "panel",
            div { class: "panel-header",
                h2 { {t!("session-title")} }
                p { {t!("session-blurb")} }
            }
            div { class: "chart",
                svg {
                    class: "chart__svg chart-dual",
                    view_box: "{view_box}",
                    {horizontal_grid(frame, &geometry.left_ticks)}
                    {value_axis_labels(&geometry.left_ticks, frame.plot_left() - 8.0, "end")}
                    {value_axis_labels(&geometry.right_ticks, frame.plot_right() + 8.0, "start")}
                    {category_axis_labels(frame, &geometry.minutes)}
                    path {
                        d: "{geometry.minutes_path}",
                        fill: "none",
                        stroke: PRIMARY_COLOR,
                        stroke_width: "2",
                    }
                    path {
                        d: "{geometry.completion_path}",
                        fill: "none",
                        stroke: SECONDARY_COLOR,
                        stroke_width: "2",
                    }
                    for (idx, point) in geometry.minutes.iter().enumerate() {
                        rect {
                            key: "{point.label}",
                            class: "chart__hit",
                            x: point.x - geometry.hit_half_width,
                            y: frame.plot_top(),
                            width: geometry.hit_half_width * 2.0,
                            height: plot_height,
                            fill: "transparent",
                            onmouseenter: move |_| hovered.set(Some(idx)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
                if let Some(readout) = readout {
                    div { class: "chart-tooltip",
                        strong { "{readout.day}" }
                        span { "{minutes_label}: {readout.minutes}" }
                        span { "{completion_label}: {readout.completion}" }
                    }
                }
                {legend(legend_entries)}
            }
        }
    }
}
