//! Hover tooltip contents. One `label: value` pair per line.

use super::scales::BmiCategory;
use crate::format::{dollars, trimmed};
use crate::models::{HistogramBin, Record, RegionalAverage};

pub fn region_tooltip(row: &RegionalAverage) -> String {
    format!(
        "Region: {}\nAvg Charges: {}\nSample Size: {}",
        row.region,
        dollars(row.avg_charges),
        row.count
    )
}

pub fn bin_tooltip(bin: &HistogramBin) -> String {
    format!(
        "BMI Range: {:.1} - {:.1}\nCount: {}\nCategory: {}",
        bin.x0,
        bin.x1,
        bin.count,
        BmiCategory::classify(bin.midpoint).label()
    )
}

pub fn record_tooltip(r: &Record) -> String {
    format!(
        "Age: {}\nCharges: {}\nBMI: {:.1}\nSmoker: {}\nRegion: {}",
        trimmed(r.age, 2),
        dollars(r.charges),
        r.bmi,
        r.smoker,
        r.region
    )
}
