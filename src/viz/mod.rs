//! Static chart rendering to **SVG** or **PNG** (chosen by file extension).
//!
//! - Regional bar chart with `$N.Nk` value labels
//! - BMI histogram with dashed category reference lines
//! - Age vs. charges scatter, coloured by smoker status, with an inside legend
//!
//! Scales, captions and category lines come from [`crate::dashboard`], so these files
//! match what the desktop dashboard shows.

pub mod text;
pub mod types;
pub mod util;

pub use types::{ChartKind, DEFAULT_HEIGHT, DEFAULT_WIDTH, ImageFormat};

use crate::dashboard::Dashboard;
use crate::dashboard::hover::{SMOKER_GROUPS, group_members};
use crate::dashboard::scales::{
    histogram_x_domain, histogram_y_domain, regional_y_domain, scatter_domains,
    visible_reference_lines,
};
use crate::format::{dollars_k, dollars_k1, trimmed};
use crate::models::{HistogramBin, Record, RegionalAverage};
use anyhow::{Context, Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Once;

use text::fit_label;
use util::{
    compute_left_label_area_px, primary_color, secondary_color, smoker_color, success_color,
    warning_color,
};

/// One-time registration for a fallback "sans-serif" font when using the `ab_glyph` text path.
/// Required because `ab_glyph` doesn't discover OS fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        // from `src/viz/mod.rs` → project root → `assets/DejaVuSans.ttf`
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../../assets/DejaVuSans.ttf"),
        );
    });
}

const MARGIN: u32 = 16;
const TICK_FONT_PX: u32 = 12;
const BAR_PADDING: f64 = 0.15;
const Y_TICKS: usize = 6;

fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"))
}

fn plot_err<E: std::fmt::Debug>(e: E) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Render one dashboard chart to `out_path`.
pub fn plot_chart<P: AsRef<Path>>(
    kind: ChartKind,
    dashboard: &Dashboard,
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    match kind {
        ChartKind::RegionalBars => plot_regional_bars(&dashboard.regional, out_path, width, height),
        ChartKind::BmiHistogram => plot_bmi_histogram(&dashboard.bmi_bins, out_path, width, height),
        ChartKind::AgeCharges => plot_age_charges(&dashboard.records, out_path, width, height),
    }
}

/// Render all three charts into `dir` as `regional.*`, `bmi.*` and `scatter.*`.
/// Returns the written paths.
pub fn render_all<P: AsRef<Path>>(
    dashboard: &Dashboard,
    dir: P,
    format: ImageFormat,
    width: u32,
    height: u32,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let mut written = Vec::new();
    for kind in ChartKind::ALL {
        let path = dir.join(format!("{}.{}", kind.file_stem(), format.extension()));
        plot_chart(kind, dashboard, &path, width, height)
            .with_context(|| format!("render {}", kind.title()))?;
        written.push(path);
    }
    Ok(written)
}

/// Bar chart of average charges per region, in the order given.
pub fn plot_regional_bars<P: AsRef<Path>>(
    rows: &[RegionalAverage],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let y = regional_y_domain(rows).ok_or_else(|| anyhow!("no data to plot"))?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if is_svg(out_path) {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_regional_bars(root, rows, y)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_regional_bars(root, rows, y)
    }
}

/// Histogram bars over the BMI bins, with reference lines for the BMI categories.
pub fn plot_bmi_histogram<P: AsRef<Path>>(
    bins: &[HistogramBin],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let x = histogram_x_domain(bins).ok_or_else(|| anyhow!("no data to plot"))?;
    let y = histogram_y_domain(bins).ok_or_else(|| anyhow!("no data to plot"))?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if is_svg(out_path) {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bmi_histogram(root, bins, x, y)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_bmi_histogram(root, bins, x, y)
    }
}

/// Scatter of age vs. charges, one colour per smoker status.
pub fn plot_age_charges<P: AsRef<Path>>(
    records: &[Record],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    let (x, y) = scatter_domains(records).ok_or_else(|| anyhow!("no data to plot"))?;
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if is_svg(out_path) {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_age_charges(root, records, x, y)
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_age_charges(root, records, x, y)
    }
}

fn draw_regional_bars<DB>(
    root: DrawingArea<DB, Shift>,
    rows: &[RegionalAverage],
    y: Range<f64>,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let kind = ChartKind::RegionalBars;
    root.fill(&WHITE).map_err(plot_err)?;

    let n = rows.len();
    let left_px = compute_left_label_area_px(y.start, y.end, Y_TICKS, TICK_FONT_PX, dollars_k);
    let (root_w, _) = root.dim_in_pixel();
    let band_px = (root_w.saturating_sub(left_px + 2 * MARGIN) / n.max(1) as u32).max(1);

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(kind.title(), (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(0f64..n as f64, y)
        .map_err(plot_err)?;

    // Ticks fall every half band; only the band centres carry a region name.
    let x_label_fmt = |x: &f64| region_label(rows, *x, band_px);
    let y_label_fmt = |v: &f64| dollars_k(*v);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(kind.x_desc())
        .y_desc(kind.y_desc())
        .x_labels(2 * n + 1)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, TICK_FONT_PX))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(plot_err)?;

    let fill = primary_color().filled();
    chart
        .draw_series(rows.iter().enumerate().map(|(i, r)| {
            let x0 = i as f64 + BAR_PADDING;
            let x1 = i as f64 + 1.0 - BAR_PADDING;
            Rectangle::new([(x0, 0.0), (x1, r.avg_charges)], fill)
        }))
        .map_err(plot_err)?;

    let value_style = (FontFamily::SansSerif, TICK_FONT_PX)
        .into_text_style(&root)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    chart
        .draw_series(rows.iter().enumerate().map(|(i, r)| {
            EmptyElement::at((i as f64 + 0.5, r.avg_charges))
                + Text::new(dollars_k1(r.avg_charges), (0, -6), value_style.clone())
        }))
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Region name for an x tick at a band centre `i + 0.5`; empty for every other tick.
fn region_label(rows: &[RegionalAverage], x: f64, band_px: u32) -> String {
    let band = x - 0.5;
    let i = band.round();
    if i < 0.0 || (band - i).abs() > 1e-6 {
        return String::new();
    }
    rows.get(i as usize)
        .map(|r| fit_label(&r.region, TICK_FONT_PX, band_px))
        .unwrap_or_default()
}

fn draw_bmi_histogram<DB>(
    root: DrawingArea<DB, Shift>,
    bins: &[HistogramBin],
    x: Range<f64>,
    y: Range<f64>,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let kind = ChartKind::BmiHistogram;
    root.fill(&WHITE).map_err(plot_err)?;

    let count_fmt = |v: f64| trimmed(v, 0);
    let left_px = compute_left_label_area_px(y.start, y.end, Y_TICKS, TICK_FONT_PX, count_fmt);
    let (y_top, x_span) = (y.end, x.clone());

    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(kind.title(), (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(x, y)
        .map_err(plot_err)?;

    let x_label_fmt = |v: &f64| trimmed(*v, 1);
    let y_label_fmt = |v: &f64| count_fmt(*v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(kind.x_desc())
        .y_desc(kind.y_desc())
        .x_labels(10)
        .y_labels(Y_TICKS)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, TICK_FONT_PX))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(plot_err)?;

    let fill = secondary_color().filled();
    chart
        .draw_series(bins.iter().map(|b| {
            // thin gap between neighbouring bars
            let gap = (b.x1 - b.x0) * 0.02;
            Rectangle::new([(b.x0 + gap, 0.0), (b.x1 - gap, b.count as f64)], fill)
        }))
        .map_err(plot_err)?;

    // Dashed reference lines, built from short segments.
    const DASHES: usize = 40;
    let label_style = (FontFamily::SansSerif, 11)
        .into_text_style(&root)
        .pos(Pos::new(HPos::Left, VPos::Top));
    for line in visible_reference_lines(&x_span) {
        let color = if line.warning {
            warning_color()
        } else {
            success_color()
        };
        let stroke = color.mix(0.5).stroke_width(2);
        let seg = y_top / DASHES as f64;
        chart
            .draw_series((0..DASHES).step_by(2).map(|k| {
                let y0 = seg * k as f64;
                PathElement::new(vec![(line.value, y0), (line.value, y0 + seg)], stroke)
            }))
            .map_err(plot_err)?;
        chart
            .draw_series(std::iter::once(
                EmptyElement::at((line.value, y_top))
                    + Text::new(line.label, (5, 4), label_style.clone().color(&color)),
            ))
            .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

fn draw_age_charges<DB>(
    root: DrawingArea<DB, Shift>,
    records: &[Record],
    x: Range<f64>,
    y: Range<f64>,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let kind = ChartKind::AgeCharges;
    root.fill(&WHITE).map_err(plot_err)?;

    let left_px = compute_left_label_area_px(y.start, y.end, 8, TICK_FONT_PX, dollars_k);
    let mut chart = ChartBuilder::on(&root)
        .margin(MARGIN)
        .caption(kind.title(), (FontFamily::SansSerif, 22))
        .set_label_area_size(LabelAreaPosition::Left, left_px)
        .set_label_area_size(LabelAreaPosition::Bottom, 56)
        .build_cartesian_2d(x, y)
        .map_err(plot_err)?;

    let x_label_fmt = |v: &f64| trimmed(*v, 0);
    let y_label_fmt = |v: &f64| dollars_k(*v);
    chart
        .configure_mesh()
        .x_desc(kind.x_desc())
        .y_desc(kind.y_desc())
        .x_labels(10)
        .y_labels(8)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style((FontFamily::SansSerif, TICK_FONT_PX))
        .axis_desc_style((FontFamily::SansSerif, 16))
        .draw()
        .map_err(plot_err)?;

    for label in SMOKER_GROUPS {
        let pts: Vec<&Record> = group_members(records, label).collect();
        let Some(first) = pts.first() else {
            continue;
        };
        let color = smoker_color(&first.smoker);
        chart
            .draw_series(
                pts.iter()
                    .map(|r| Circle::new((r.age, r.charges), 4, color.mix(0.7).filled())),
            )
            .map_err(plot_err)?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 8, y), 5, color.mix(0.7).filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .label_font((FontFamily::SansSerif, 14))
        .draw()
        .map_err(plot_err)?;

    root.present().map_err(plot_err)?;
    Ok(())
}
