//! Axis domains and BMI reference categories used by every chart renderer.

use crate::models::{HistogramBin, Record, RegionalAverage};
use std::ops::Range;

/// Headroom factor above the tallest bar.
const BAR_HEADROOM: f64 = 1.1;
const AGE_PADDING: f64 = 5.0;
const CHARGES_PADDING: f64 = 5000.0;

/// `y ∈ [0, 1.1 · max mean]`. `None` for no rows.
pub fn regional_y_domain(rows: &[RegionalAverage]) -> Option<Range<f64>> {
    let max = rows
        .iter()
        .map(|r| r.avg_charges)
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))?;
    Some(0.0..non_degenerate(max * BAR_HEADROOM))
}

/// `x ∈ [first x0, last x1]`, widened by one unit on each side for a zero-width domain.
pub fn histogram_x_domain(bins: &[HistogramBin]) -> Option<Range<f64>> {
    if bins.is_empty() {
        return None;
    }
    let lo = bins.iter().map(|b| b.x0).fold(f64::INFINITY, f64::min);
    let hi = bins.iter().map(|b| b.x1).fold(f64::NEG_INFINITY, f64::max);
    if hi - lo < f64::EPSILON {
        return Some((lo - 1.0)..(hi + 1.0));
    }
    Some(lo..hi)
}

/// `y ∈ [0, 1.1 · max count]`.
pub fn histogram_y_domain(bins: &[HistogramBin]) -> Option<Range<f64>> {
    let max = bins.iter().map(|b| b.count).max()?;
    Some(0.0..non_degenerate(max as f64 * BAR_HEADROOM))
}

/// `(x, y)` for the scatter plot: `[0, max age + 5] × [0, max charges + 5000]`.
pub fn scatter_domains(records: &[Record]) -> Option<(Range<f64>, Range<f64>)> {
    if records.is_empty() {
        return None;
    }
    let max_age = records.iter().map(|r| r.age).fold(f64::NEG_INFINITY, f64::max);
    let max_charges = records
        .iter()
        .map(|r| r.charges)
        .fold(f64::NEG_INFINITY, f64::max);
    Some((
        0.0..non_degenerate(max_age + AGE_PADDING),
        0.0..non_degenerate(max_charges + CHARGES_PADDING),
    ))
}

/// Upper bound of a `[0, v]` domain; keeps at least one unit of height.
fn non_degenerate(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

/// WHO adult BMI classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Dashed vertical reference line on the histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub label: &'static str,
    /// Drawn in the warning tone when true, the success tone otherwise.
    pub warning: bool,
}

pub const BMI_REFERENCE_LINES: [ReferenceLine; 3] = [
    ReferenceLine {
        value: 18.5,
        label: "Underweight",
        warning: true,
    },
    ReferenceLine {
        value: 25.0,
        label: "Normal",
        warning: false,
    },
    ReferenceLine {
        value: 30.0,
        label: "Overweight",
        warning: true,
    },
];

/// Reference lines that fall inside `domain` (inclusive).
pub fn visible_reference_lines(domain: &Range<f64>) -> Vec<ReferenceLine> {
    BMI_REFERENCE_LINES
        .iter()
        .copied()
        .filter(|l| l.value >= domain.start && l.value <= domain.end)
        .collect()
}
