use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Smoker flag as recorded in the dataset.
///
/// Only the exact strings `"yes"` and `"no"` map to [`Smoker::Yes`] / [`Smoker::No`];
/// anything else is preserved verbatim in [`Smoker::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Smoker {
    Yes,
    #[default]
    No,
    Other(String),
}

impl Smoker {
    pub fn parse(s: &str) -> Self {
        match s {
            "yes" => Smoker::Yes,
            "no" => Smoker::No,
            other => Smoker::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
            Smoker::Other(s) => s.as_str(),
        }
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Smoker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Smoker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Smoker::parse(&s))
    }
}

/// One observation row (one insured person).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub age: f64,
    pub sex: String,
    pub bmi: f64,
    pub children: u32,
    pub smoker: Smoker,
    pub region: String,
    pub charges: f64,
}

/// Dataset-wide summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SummaryStats {
    pub avg_charge: f64,
    pub avg_age: f64,
    pub avg_bmi: f64,
    pub total_count: usize,
    pub smoker_count: usize,
    pub non_smoker_count: usize,
    /// Rows whose smoker flag was neither `"yes"` nor `"no"`.
    pub other_smoker_count: usize,
}

/// Mean charges for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalAverage {
    pub region: String,
    pub avg_charges: f64,
    pub count: usize,
}

/// One histogram bin. `[x0, x1)` except the last bin of a histogram, which is closed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
    pub midpoint: f64,
}

impl HistogramBin {
    pub fn new(x0: f64, x1: f64, count: usize) -> Self {
        Self {
            x0,
            x1,
            count,
            midpoint: x0 / 2.0 + x1 / 2.0,
        }
    }
}
