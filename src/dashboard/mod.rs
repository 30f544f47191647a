//! Renderer-independent dashboard model.
//!
//! [`Dashboard`] holds the loaded records and every aggregate derived from them; the
//! submodules turn those into what a renderer shows: card texts, tooltip texts, axis
//! domains and enter-animation timelines. Both the static `viz` charts and the desktop
//! GUI draw from this model.

pub mod anim;
pub mod cards;
pub mod hover;
pub mod scales;
pub mod tooltip;

pub use cards::{StatsCard, Tone, stats_cards};
pub use scales::{BmiCategory, ReferenceLine};

use crate::config::AnalysisConfig;
use crate::error::LoadError;
use crate::loader::{DataSource, load_records};
use crate::models::{HistogramBin, Record, RegionalAverage, SummaryStats};
use crate::stats::{bmi_distribution, calculate_stats, regional_averages};

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub records: Vec<Record>,
    pub stats: SummaryStats,
    pub regional: Vec<RegionalAverage>,
    pub bmi_bins: Vec<HistogramBin>,
}

impl Dashboard {
    /// Aggregate `records`: summary stats, then regional averages, then BMI bins.
    pub fn build(records: Vec<Record>, bin_count: usize) -> Self {
        let stats = calculate_stats(&records);
        let regional = regional_averages(&records);
        let bmi_bins = bmi_distribution(&records, bin_count);
        Self {
            records,
            stats,
            regional,
            bmi_bins,
        }
    }

    /// Load the configured source and aggregate it.
    pub fn try_load(config: &AnalysisConfig) -> Result<Self, LoadError> {
        let source = DataSource::parse(&config.data);
        let records = load_records(&source, config.smoker_policy).inspect_err(|e| {
            log::error!("loading {source} failed: {e}");
        })?;
        Ok(Self::build(records, config.bin_count))
    }

    /// [`Dashboard::try_load`] as a display state. Any failure is terminal.
    pub fn load(config: &AnalysisConfig) -> DashboardState {
        match Self::try_load(config) {
            Ok(dashboard) => DashboardState::Ready(dashboard),
            Err(e) => DashboardState::Failed(e.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cards(&self, locale_tag: &str) -> Vec<StatsCard> {
        stats_cards(&self.stats, locale_tag)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(Dashboard),
    /// Load or parse failure message; nothing else is shown.
    Failed(String),
}

impl DashboardState {
    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            DashboardState::Ready(d) => Some(d),
            _ => None,
        }
    }
}
