// Geometry of the inline SVG cost chart

use crate::models::{CostCurve, SamplingRange};
use crate::utils::format_whole;

pub const WIDTH: f64 = 800.0;
pub const HEIGHT: f64 = 400.0;
pub const MARGIN_LEFT: f64 = 80.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 50.0;

const TARGET_TICKS: usize = 5;

pub fn plot_width() -> f64 {
    WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

pub fn plot_height() -> f64 {
    HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Rounds `span / target_ticks` to 1, 2 or 5 times a power of ten.
pub fn nice_step(span: f64, target_ticks: usize) -> f64 {
    if !span.is_finite() || span <= 0.0 || target_ticks == 0 {
        return 1.0;
    }
    let raw = span / target_ticks as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn ticks_between(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut i = 0.0;
    loop {
        let tick = min + i * step;
        if tick > max + step * 1e-9 {
            break;
        }
        ticks.push(tick);
        i += 1.0;
    }
    ticks
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub x_max: f64,
    pub x_step: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub y_step: f64,
}

impl ChartScale {
    /// Fits the y axis to every sampled cost, snapped outwards to tick steps.
    /// The axis starts at 0 unless some cost is negative, and ticks are at
    /// least 1 € apart.
    pub fn fit(curves: &[CostCurve], range: &SamplingRange) -> Self {
        let costs = curves.iter().flat_map(|c| c.points.iter().map(|p| p.cost));
        let (mut lo, mut hi) = costs.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), cost| {
            (lo.min(cost), hi.max(cost))
        });
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }
        if lo >= 0.0 {
            lo = 0.0;
        }
        if hi - lo < 1.0 {
            hi = lo + 1.0;
        }

        let y_step = nice_step(hi - lo, TARGET_TICKS).max(1.0);
        let y_min = (lo / y_step).floor() * y_step;
        let mut y_max = (hi / y_step).ceil() * y_step;
        if y_max <= y_min {
            y_max = y_min + y_step;
        }

        let x_max = range.max_distance_km.max(1) as f64;
        ChartScale {
            x_max,
            x_step: nice_step(x_max, TARGET_TICKS),
            y_min,
            y_max,
            y_step,
        }
    }

    pub fn x(&self, distance_km: f64) -> f64 {
        MARGIN_LEFT + distance_km / self.x_max * plot_width()
    }

    pub fn y(&self, cost: f64) -> f64 {
        MARGIN_TOP + (self.y_max - cost) / (self.y_max - self.y_min) * plot_height()
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        ticks_between(0.0, self.x_max, self.x_step)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        ticks_between(self.y_min, self.y_max, self.y_step)
    }

    pub fn y_tick_labels(&self) -> Vec<String> {
        self.y_ticks().into_iter().map(format_whole).collect()
    }
}

/// SVG `points` attribute for one curve.
pub fn polyline_points(curve: &CostCurve, scale: &ChartScale) -> String {
    curve
        .points
        .iter()
        .map(|p| format!("{:.1},{:.1}", scale.x(p.distance_km as f64), scale.y(p.cost)))
        .collect::<Vec<_>>()
        .join(" ")
}
