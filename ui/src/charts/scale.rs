//! Axis scales and the drawing frame shared by every panel.

/// Outer SVG size plus the margins reserved for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 260.0,
            margin_top: 12.0,
            margin_right: 16.0,
            margin_bottom: 28.0,
            margin_left: 48.0,
        }
    }
}

impl ChartFrame {
    pub fn with_margins(self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            margin_top: top,
            margin_right: right,
            margin_bottom: bottom,
            margin_left: left,
            ..self
        }
    }

    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.margin_right).max(self.margin_left)
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.margin_bottom).max(self.margin_top)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Maps a numeric domain onto a pixel range. A degenerate domain maps to the range start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Evenly spaced category positions across a pixel range, in input order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    pub count: usize,
    pub range: (f64, f64),
}

impl PointScale {
    pub fn new(count: usize, range: (f64, f64)) -> Self {
        Self { count, range }
    }

    pub fn position(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        if self.count <= 1 {
            return (r0 + r1) / 2.0;
        }
        r0 + index as f64 * (r1 - r0) / (self.count - 1) as f64
    }

    /// Half the gap between neighbouring points; used for hover hit areas.
    pub fn half_step(&self) -> f64 {
        let (r0, r1) = self.range;
        if self.count <= 1 {
            (r1 - r0).abs() / 2.0
        } else {
            (r1 - r0).abs() / (self.count - 1) as f64 / 2.0
        }
    }
}

/// Equal-height bands for categorical rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    /// Fraction of each band left empty around the bar.
    pub padding: f64,
}

impl BandScale {
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self {
            count,
            range,
            padding: padding.clamp(0.0, 0.9),
        }
    }

    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        if self.count == 0 {
            0.0
        } else {
            (r1 - r0) / self.count as f64
        }
    }

    pub fn band_start(&self, index: usize) -> f64 {
        self.range.0 + self.step() * index as f64
    }

    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Where the padded bar starts inside band `index`.
    pub fn bar_start(&self, index: usize) -> f64 {
        self.band_start(index) + self.step() * self.padding / 2.0
    }

    pub fn center(&self, index: usize) -> f64 {
        self.band_start(index) + self.step() / 2.0
    }
}

/// Round `max` up to a readable axis extent and return ticks from zero.
///
/// Steps are 1, 2, 2.5, 5 or 10 times a power of ten. `intervals` is the number
/// of gaps the caller would like (the result can have fewer).
pub fn nice_ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0];
    }

    let raw_step = max / intervals as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|candidate| *candidate >= normalized - 1e-9)
        .unwrap_or(10.0);
    let step = nice * magnitude;

    let count = (max / step - 1e-9).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// SVG path data (`Mx,y Lx,y …`) through the given points.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (idx, (x, y)) in points.iter().enumerate() {
        let command = if idx == 0 { 'M' } else { 'L' };
        if idx > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{command}{x:.2},{y:.2}"));
    }
    path
}

/// Smooth SVG path through points with strictly increasing x.
///
/// Cubic segments use monotone tangents, so the curve never overshoots a data
/// point: local peaks and troughs stay flat. Two or fewer points fall back to
/// straight segments.
pub fn monotone_path(points: &[(f64, f64)]) -> String {
    if points.len() <= 2 {
        return polyline_path(points);
    }
    let tangents = monotone_tangents(points);
    let (x0, y0) = points[0];
    let mut path = format!("M{x0:.2},{y0:.2}");
    for (idx, pair) in points.windows(2).enumerate() {
        let ((xa, ya), (xb, yb)) = (pair[0], pair[1]);
        let third = (xb - xa) / 3.0;
        let (c1x, c1y) = (xa + third, ya + third * tangents[idx]);
        let (c2x, c2y) = (xb - third, yb - third * tangents[idx + 1]);
        path.push_str(&format!(
            " C{c1x:.2},{c1y:.2} {c2x:.2},{c2y:.2} {xb:.2},{yb:.2}"
        ));
    }
    path
}

fn monotone_tangents(points: &[(f64, f64)]) -> Vec<f64> {
    let n = points.len();
    let secant = |i: usize| {
        let h = points[i + 1].0 - points[i].0;
        if h == 0.0 {
            0.0
        } else {
            (points[i + 1].1 - points[i].1) / h
        }
    };

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = points[i].0 - points[i - 1].0;
        let h1 = points[i + 1].0 - points[i].0;
        let (s0, s1) = (secant(i - 1), secant(i));
        let blended = if h0 + h1 == 0.0 {
            0.0
        } else {
            (s0 * h1 + s1 * h0) / (h0 + h1)
        };
        tangents[i] = if s0 * s1 <= 0.0 {
            0.0
        } else {
            2.0 * s0.signum() * s0.abs().min(s1.abs()).min(0.5 * blended.abs())
        };
    }
    tangents[0] = (3.0 * secant(0) - tangents[1]) / 2.0;
    tangents[n - 1] = (3.0 * secant(n - 2) - tangents[n - 2]) / 2.0;
    tangents
}
