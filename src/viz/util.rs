//! Utility functions for visualization: colors and label-area sizing.

use crate::models::Smoker;
use plotters::prelude::*;

use super::text::estimate_text_width_px;

/// Microsoft Office (2013+) chart series palette.
/// Order: Blue, Orange, Gray, Gold, Light Blue, Green, Dark Blue, Dark Orange, Dark Gray, Brownish Gold.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

pub fn primary_color() -> RGBAColor {
    office_color(0)
}

pub fn secondary_color() -> RGBAColor {
    office_color(4)
}

pub fn warning_color() -> RGBAColor {
    office_color(3)
}

pub fn success_color() -> RGBAColor {
    office_color(5)
}

/// Smokers orange, non-smokers blue, anything else gray.
pub fn smoker_color(smoker: &Smoker) -> RGBAColor {
    match smoker {
        Smoker::Yes => office_color(1),
        Smoker::No => office_color(0),
        Smoker::Other(_) => office_color(2),
    }
}

/// Compute a tight left label area width for the Y axis (in pixels),
/// based on the formatted tick labels that will appear.
/// - `ymin..ymax`: the Y range you pass to Plotters
/// - `ticks`: how many Y labels you plan to show
/// - `fmt`: must match the formatter given to `.configure_mesh().y_label_formatter(...)`
///
/// Returns a width clamped to a sensible range to avoid extremes.
pub fn compute_left_label_area_px(
    ymin: f64,
    ymax: f64,
    ticks: usize,
    font_px: u32,
    fmt: impl Fn(f64) -> String,
) -> u32 {
    let mut max_px = 0u32;
    for i in 0..=ticks {
        let t = if ticks == 0 {
            0.0
        } else {
            i as f64 / ticks as f64
        };
        let s = fmt(ymin + (ymax - ymin) * t);
        max_px = max_px.max(estimate_text_width_px(&s, font_px));
    }

    // Room for the rotated axis description plus tick marks.
    let with_padding = max_px.saturating_add(18 + font_px + 8);
    with_padding.clamp(48, 140)
}
