//! Public types and constants for the visualization module.

/// The three dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Average charges per region, tallest first.
    RegionalBars,
    /// BMI distribution with category reference lines.
    BmiHistogram,
    /// Age vs. charges, coloured by smoker status.
    AgeCharges,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [
        ChartKind::AgeCharges,
        ChartKind::RegionalBars,
        ChartKind::BmiHistogram,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::RegionalBars => "Average Charges by Region",
            ChartKind::BmiHistogram => "BMI Distribution",
            ChartKind::AgeCharges => "Medical Charges vs Age",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ChartKind::RegionalBars => "Regional comparison of medical insurance costs",
            ChartKind::BmiHistogram => "Body Mass Index distribution across the population",
            ChartKind::AgeCharges => "Impact of smoking on healthcare costs across age groups",
        }
    }

    pub fn x_desc(self) -> &'static str {
        match self {
            ChartKind::RegionalBars => "Region",
            ChartKind::BmiHistogram => "BMI (Body Mass Index)",
            ChartKind::AgeCharges => "Age (years)",
        }
    }

    pub fn y_desc(self) -> &'static str {
        match self {
            ChartKind::RegionalBars => "Average Charges ($)",
            ChartKind::BmiHistogram => "Frequency",
            ChartKind::AgeCharges => "Medical Charges ($)",
        }
    }

    /// File name stem used by report exports.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::RegionalBars => "regional",
            ChartKind::BmiHistogram => "bmi",
            ChartKind::AgeCharges => "scatter",
        }
    }
}

/// Output image format for report exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
        }
    }
}

pub const DEFAULT_WIDTH: u32 = 1000;
/// The scatter plot is taller in the dashboard; the two bar charts use 400.
pub const DEFAULT_HEIGHT: u32 = 500;
