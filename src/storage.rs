use crate::dashboard::Dashboard;
use crate::models::{HistogramBin, RegionalAverage, SummaryStats};
use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Everything the dashboard computed, as one serializable document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub bin_count: usize,
    pub stats: SummaryStats,
    pub regional: Vec<RegionalAverage>,
    pub bmi_bins: Vec<HistogramBin>,
}

impl AnalysisReport {
    pub fn new(dashboard: &Dashboard, source: &str, bin_count: usize) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.to_string(),
            bin_count,
            stats: dashboard.stats,
            regional: dashboard.regional.clone(),
            bmi_bins: dashboard.bmi_bins.clone(),
        }
    }
}

/// Prefix cells that a spreadsheet would evaluate as a formula.
fn safe_cell(s: &str) -> Cow<'_, str> {
    if s.starts_with(['=', '+', '-', '@']) {
        Cow::Owned(format!("'{s}"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Save the report as pretty JSON.
pub fn save_report_json<P: AsRef<Path>>(report: &AnalysisReport, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(report)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save the regional table as CSV with header.
pub fn save_regional_csv<P: AsRef<Path>>(rows: &[RegionalAverage], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("region", "avg_charges", "count"))?;
    for r in rows {
        wtr.serialize((safe_cell(&r.region).as_ref(), r.avg_charges, r.count))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save histogram bins as CSV with header.
pub fn save_bins_csv<P: AsRef<Path>>(bins: &[HistogramBin], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("x0", "x1", "count", "midpoint"))?;
    for b in bins {
        wtr.serialize((b.x0, b.x1, b.count, b.midpoint))?;
    }
    wtr.flush()?;
    Ok(())
}
