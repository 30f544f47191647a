//! medcharges
//!
//! A small Rust library for loading, summarizing, and charting a medical-insurance
//! charges dataset. Pairs with the `medcharges` CLI and the `medcharges-gui` dashboard.
//!
//! ### Features
//! - Typed CSV loading from a path or an http(s) URL, with per-field validation
//! - Summary statistics, per-region averages, BMI histogram
//! - Dashboard view model: stats cards, tooltips, axis domains, enter animations
//! - SVG/PNG bar, histogram and scatter charts
//! - JSON / CSV export of the aggregates
//!
//! ### Example
//! ```no_run
//! use medcharges::{AnalysisConfig, Dashboard, DashboardState};
//!
//! let config = AnalysisConfig::default();
//! let DashboardState::Ready(dash) = Dashboard::load(&config) else {
//!     anyhow::bail!("could not load {}", config.data);
//! };
//! println!("{:#?}", dash.stats);
//! medcharges::viz::plot_chart(
//!     medcharges::viz::ChartKind::RegionalBars,
//!     &dash,
//!     "regional.svg",
//!     1000,
//!     400,
//! )?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod loader;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viz;

pub use config::{AnalysisConfig, SmokerPolicy};
pub use dashboard::{Dashboard, DashboardState};
pub use error::{ConfigError, LoadError};
pub use loader::DataSource;
pub use models::{HistogramBin, Record, RegionalAverage, Smoker, SummaryStats};
