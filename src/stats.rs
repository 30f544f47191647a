use crate::models::{HistogramBin, Record, RegionalAverage, Smoker, SummaryStats};
use ahash::AHashMap;

/// Overall summary statistics. Empty input gives all-zero stats.
pub fn calculate_stats(records: &[Record]) -> SummaryStats {
    if records.is_empty() {
        return SummaryStats::default();
    }

    let mut out = SummaryStats {
        total_count: records.len(),
        ..SummaryStats::default()
    };
    let (mut charges, mut age, mut bmi) = (0.0f64, 0.0f64, 0.0f64);
    for r in records {
        charges += r.charges;
        age += r.age;
        bmi += r.bmi;
        match r.smoker {
            Smoker::Yes => out.smoker_count += 1,
            Smoker::No => out.non_smoker_count += 1,
            Smoker::Other(_) => out.other_smoker_count += 1,
        }
    }
    let n = records.len() as f64;
    out.avg_charge = charges / n;
    out.avg_age = age / n;
    out.avg_bmi = bmi / n;
    out
}

/// Mean charges per distinct region label, highest first.
///
/// Labels are compared exactly (no case folding). Regions with equal means keep the order
/// in which they first appear in `records`.
pub fn regional_averages(records: &[Record]) -> Vec<RegionalAverage> {
    let mut index: AHashMap<&str, usize> = AHashMap::new();
    let mut acc: Vec<(&str, f64, usize)> = Vec::new();
    for r in records {
        let slot = *index.entry(r.region.as_str()).or_insert_with(|| {
            acc.push((r.region.as_str(), 0.0, 0));
            acc.len() - 1
        });
        acc[slot].1 += r.charges;
        acc[slot].2 += 1;
    }

    let mut out: Vec<RegionalAverage> = acc
        .into_iter()
        .map(|(region, sum, count)| RegionalAverage {
            region: region.to_string(),
            avg_charges: sum / count as f64,
            count,
        })
        .collect();
    // stable: ties stay in discovery order
    out.sort_by(|a, b| b.avg_charges.total_cmp(&a.avg_charges));
    log::debug!("{} regions", out.len());
    out
}

/// Histogram of the BMI column with `bin_count` equal-width bins.
pub fn bmi_distribution(records: &[Record], bin_count: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = records.iter().map(|r| r.bmi).collect();
    histogram(&values, bin_count)
}

/// Equal-width histogram over the observed `[min, max]` of `values`.
///
/// - Bins are half-open `[x0, x1)` except the last, which also includes `max`.
/// - Edges are shared: `bins[i].x0 == bins[i - 1].x1` exactly, and empty bins are kept.
/// - All values identical: one bin `[v, v]` holding every value.
/// - Empty input or `bin_count == 0`: no bins.
///
/// Non-finite values are skipped.
pub fn histogram(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bin_count == 0 {
        return Vec::new();
    }
    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max <= min {
        return vec![HistogramBin::new(min, max, finite.len())];
    }

    // Divide before subtracting so a span wider than f64::MAX stays finite.
    let width = max / bin_count as f64 - min / bin_count as f64;
    let mut edges: Vec<f64> = (0..bin_count).map(|i| min + width * i as f64).collect();
    edges.push(max);

    let mut counts = vec![0usize; bin_count];
    for v in finite {
        counts[bin_index(&edges, v)] += 1;
    }

    log::debug!("histogram [{min}, {max}] in {bin_count} bins");
    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin::new(edges[i], edges[i + 1], count))
        .collect()
}

/// Index of the bin containing `v`, checked against the materialized edges so that
/// floating-point rounding in the initial estimate never moves a value across an edge.
fn bin_index(edges: &[f64], v: f64) -> usize {
    let last = edges.len() - 2;
    let (min, max) = (edges[0], edges[last + 1]);
    let guess = ((v / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0) * (last + 1) as f64).floor();
    let mut i = if guess.is_nan() || guess < 0.0 {
        0
    } else {
        (guess as usize).min(last)
    };
    while i > 0 && v < edges[i] {
        i -= 1;
    }
    while i < last && v >= edges[i + 1] {
        i += 1;
    }
    i
}
