//! Staggered enter animations.
//!
//! A [`Timeline`] schedules item `i` to start at `start_ms + i * step_ms` and run for
//! `duration_ms`. Progress is clamped to `[0, 1]` outside that window and shaped by an
//! [`Easing`]. Nothing waits on an animation; renderers just ask for the progress of the
//! current frame.

use super::Dashboard;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    OutQuad,
    OutCubic,
    /// Overshooting spring; `amplitude` is clamped to `[1, 10]`, `period` to `[0.1, 2]`.
    OutElastic { amplitude: f64, period: f64 },
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` to eased progress. `0` and `1` are fixed points.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::OutElastic { amplitude, period } => {
                1.0 - elastic_in(1.0 - t, amplitude, period)
            }
        }
    }
}

fn elastic_in(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let a = amplitude.clamp(1.0, 10.0);
    let p = period.clamp(0.1, 2.0);
    let s = p / (2.0 * PI) * (1.0 / a).asin();
    -a * 2f64.powf(10.0 * (t - 1.0)) * (((t - 1.0) - s) * 2.0 * PI / p).sin()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    pub start_ms: f64,
    pub step_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Timeline {
    pub const fn new(start_ms: f64, step_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self {
            start_ms,
            step_ms,
            duration_ms,
            easing,
        }
    }

    /// Eased progress of item `index` at `elapsed_ms` since the dashboard became ready.
    pub fn progress(&self, index: usize, elapsed_ms: f64) -> f64 {
        let begin = self.start_ms + self.step_ms * index as f64;
        if elapsed_ms <= begin {
            return 0.0;
        }
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        self.easing.apply((elapsed_ms - begin) / self.duration_ms)
    }

    /// Time at which the last of `items` settles.
    pub fn total_ms(&self, items: usize) -> f64 {
        self.start_ms + self.step_ms * items.saturating_sub(1) as f64 + self.duration_ms
    }

    pub fn is_finished(&self, items: usize, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.total_ms(items)
    }
}

/// Stats cards sliding up 30px and fading in.
pub const CARDS: Timeline = Timeline::new(200.0, 100.0, 800.0, Easing::OutCubic);
pub const CARD_OFFSET_PX: f32 = 30.0;

/// Chart containers sliding up 40px and fading in.
pub const CHARTS: Timeline = Timeline::new(600.0, 150.0, 1000.0, Easing::OutCubic);
pub const CHART_OFFSET_PX: f32 = 40.0;

/// Regional bars growing from the baseline.
pub const BARS: Timeline = Timeline::new(300.0, 150.0, 1200.0, Easing::OutCubic);

/// Value labels above the regional bars.
pub const BAR_LABELS: Timeline = Timeline::new(800.0, 150.0, 600.0, Easing::OutQuad);

/// Histogram bars growing from the baseline.
pub const HISTOGRAM_BARS: Timeline = Timeline::new(400.0, 100.0, 1200.0, Easing::OutCubic);

/// Scatter points popping in to their resting radius.
pub const POINTS: Timeline = Timeline::new(
    300.0,
    2.0,
    1000.0,
    Easing::OutElastic {
        amplitude: 1.0,
        period: 0.8,
    },
);

pub const POINT_RADIUS: f32 = 5.0;
pub const POINT_HOVER_RADIUS: f32 = 8.0;
pub const POINT_OPACITY: f32 = 0.7;
pub const BAR_HOVER_OPACITY: f32 = 0.8;

/// True once every enter animation of `dashboard` has settled, so renderers can stop
/// requesting frames.
pub fn dashboard_settled(dashboard: &Dashboard, elapsed_ms: f64) -> bool {
    CARDS.is_finished(4, elapsed_ms)
        && CHARTS.is_finished(3, elapsed_ms)
        && BARS.is_finished(dashboard.regional.len(), elapsed_ms)
        && BAR_LABELS.is_finished(dashboard.regional.len(), elapsed_ms)
        && HISTOGRAM_BARS.is_finished(dashboard.bmi_bins.len(), elapsed_ms)
        && POINTS.is_finished(dashboard.records.len(), elapsed_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_are_fixed() {
        for e in [
            Easing::OutQuad,
            Easing::OutCubic,
            Easing::OutElastic {
                amplitude: 1.0,
                period: 0.8,
            },
        ] {
            assert!(e.apply(0.0).abs() < 1e-9, "{e:?} at 0");
            assert!((e.apply(1.0) - 1.0).abs() < 1e-9, "{e:?} at 1");
        }
    }

    #[test]
    fn elastic_overshoots() {
        let e = Easing::OutElastic {
            amplitude: 1.0,
            period: 0.8,
        };
        let peak = (1..100)
            .map(|i| e.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
