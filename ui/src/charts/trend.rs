use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::core::store::DailyWatchPoint;
use crate::t;

use super::scale::{monotone_path, nice_ticks, ChartFrame, LinearScale, PointScale};
use super::{
    category_axis_labels, horizontal_grid, value_axis_labels, AxisTick, PlottedPoint,
    PRIMARY_COLOR,
};

/// Filled area over the daily points, categories kept in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendGeometry {
    pub frame: ChartFrame,
    pub points: Vec<PlottedPoint>,
    pub y_ticks: Vec<AxisTick>,
    pub line_path: String,
    pub area_path: String,
    pub hit_half_width: f64,
}

impl TrendGeometry {
    pub fn compute(points: &[DailyWatchPoint], frame: ChartFrame) -> Self {
        let max = points.iter().map(|p| p.hours).fold(0.0, f64::max);
        let tick_values = nice_ticks(max, 4);
        let top = tick_values.last().copied().unwrap_or(0.0);

        let x_scale = PointScale::new(points.len(), (frame.plot_left(), frame.plot_right()));
        let y_scale = LinearScale::new((0.0, top), (frame.plot_bottom(), frame.plot_top()));

        let plotted: Vec<PlottedPoint> = points
            .iter()
            .enumerate()
            .map(|(idx, point)| PlottedPoint {
                label: point.date.clone(),
                value: point.hours,
                x: x_scale.position(idx),
                y: y_scale.map(point.hours),
            })
            .collect();

        let coords: Vec<(f64, f64)> = plotted.iter().map(|p| (p.x, p.y)).collect();
        let line_path = monotone_path(&coords);
        let area_path = match (coords.first(), coords.last()) {
            (Some((first_x, _)), Some((last_x, _))) => format!(
                "{line_path} L{last_x:.2},{base:.2} L{first_x:.2},{base:.2} Z",
                base = frame.plot_bottom()
            ),
            _ => String::new(),
        };

        let y_ticks = tick_values
            .iter()
            .map(|value| AxisTick {
                position: y_scale.map(*value),
                label: format_number(*value),
            })
            .collect();

        Self {
            frame,
            points: plotted,
            y_ticks,
            line_path,
            area_path,
            hit_half_width: x_scale.half_step(),
        }
    }

    /// Tooltip text for the day at `index`, e.g. `Mon: 1200`.
    pub fn readout(&self, index: usize) -> Option<String> {
        let point = self.points.get(index)?;
        Some(format!("{}: {}", point.label, format_number(point.value)))
    }
}

#[component]
pub fn TrendPanel(points: Vec<DailyWatchPoint>) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let geometry = TrendGeometry::compute(&points, ChartFrame::default());
    let frame = geometry.frame;
    let view_box = frame.view_box();
    let plot_height = frame.plot_bottom() - frame.plot_top();

    let tooltip = hovered().and_then(|idx| geometry.readout(idx));
    let marker = hovered().and_then(|idx| geometry.points.get(idx)).cloned();

    rsx! {
        div { class: "panel panel-large",
            div { class: "panel-header",
                h2 { {t!("trend-title")} }
                p { {t!("trend-blurb")} }
            }
            div { class: "chart",
                svg {
                    class: "chart__svg chart-trend",
                    view_box: "{view_box}",
                    defs {
                        linearGradient { id: "colorWatch", x1: "0", y1: "0", x2: "0", y2: "1",
                            stop { offset: "5%", stop_color: PRIMARY_COLOR, stop_opacity: "0.8" }
                            stop { offset: "95%", stop_color: PRIMARY_COLOR, stop_opacity: "0" }
                        }
                    }
                    {horizontal_grid(frame, &geometry.y_ticks)}
                    {value_axis_labels(&geometry.y_ticks, frame.plot_left() - 8.0, "end")}
                    {category_axis_labels(frame, &geometry.points)}
                    path { d: "{geometry.area_path}", fill: "url(#colorWatch)", stroke: "none" }
                    path {
                        d: "{geometry.line_path}",
                        fill: "none",
                        stroke: PRIMARY_COLOR,
                        stroke_width: "2",
                    }
                    if let Some(point) = marker {
                        circle { cx: point.x, cy: point.y, r: "4", fill: PRIMARY_COLOR }
                    }
                    for (idx, point) in geometry.points.iter().enumerate() {
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
                if let Some(text) = tooltip {
                    div { class: "chart-tooltip", "{text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MetricStore;

    #[test]
    fn keeps_weekday_order_on_category_axis() {
        let store = MetricStore::shipped();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), ChartFrame::default());
        let labels: Vec<&str> = geometry.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert!(geometry.points.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn peak_day_sits_highest() {
        let store = MetricStore::shipped();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), ChartFrame::default());
        let highest = geometry
            .points
            .iter()
            .min_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert_eq!(highest.label, "Sat");
    }

    #[test]
    fn area_closes_along_baseline() {
        let store = MetricStore::shipped();
        let frame = ChartFrame::default();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), frame);
        assert!(geometry.area_path.starts_with(&geometry.line_path));
        assert!(geometry.area_path.ends_with('Z'));
        assert!(geometry
            .area_path
            .contains(&format!("{:.2}", frame.plot_bottom())));
    }

    #[test]
    fn y_ticks_start_at_zero_and_cover_max() {
        let store = MetricStore::shipped();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), ChartFrame::default());
        assert_eq!(geometry.y_ticks.first().unwrap().label, "0");
        assert_eq!(geometry.y_ticks.last().unwrap().label, "3000");
    }

    #[test]
    fn line_is_a_smooth_curve_through_each_day() {
        let store = MetricStore::shipped();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), ChartFrame::default());
        assert_eq!(geometry.line_path.matches('C').count(), 6);
        let last = geometry.points.last().unwrap();
        assert!(geometry
            .line_path
            .ends_with(&format!("{:.2},{:.2}", last.x, last.y)));
    }

    #[test]
    fn readout_names_day_and_hours() {
        let store = MetricStore::shipped();
        let geometry = TrendGeometry::compute(store.daily_watch_time(), ChartFrame::default());
        assert_eq!(geometry.readout(0).as_deref(), Some("Mon: 1200"));
        assert_eq!(geometry.readout(5).as_deref(), Some("Sat: 2200"));
        assert!(geometry.readout(7).is_none());
    }

    #[test]
    fn empty_series_draws_nothing() {
        let geometry = TrendGeometry::compute(&[], ChartFrame::default());
        assert!(geometry.points.is_empty());
        assert!(geometry.line_path.is_empty());
        assert!(geometry.area_path.is_empty());
    }
}
