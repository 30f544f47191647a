use crate::format::{dollars, grouped_count};
use crate::models::SummaryStats;

/// Colour role of a stats card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    pub icon: &'static str,
    pub tone: Tone,
}

/// The four headline cards, in display order.
pub fn stats_cards(stats: &SummaryStats, locale_tag: &str) -> Vec<StatsCard> {
    let mut population = format!(
        "{} smokers, {} non-smokers",
        stats.smoker_count, stats.non_smoker_count
    );
    if stats.other_smoker_count > 0 {
        population.push_str(&format!(", {} other", stats.other_smoker_count));
    }

    vec![
        StatsCard {
            title: "Average Charge",
            value: dollars(stats.avg_charge),
            subtitle: "Mean medical insurance cost".to_string(),
            icon: "💰",
            tone: Tone::Primary,
        },
        StatsCard {
            title: "Average Age",
            value: format!("{:.1} yrs", stats.avg_age),
            subtitle: "Mean age of patients".to_string(),
            icon: "👤",
            tone: Tone::Secondary,
        },
        StatsCard {
            title: "Average BMI",
            value: format!("{:.1}", stats.avg_bmi),
            subtitle: "Mean Body Mass Index".to_string(),
            icon: "📊",
            tone: Tone::Success,
        },
        StatsCard {
            title: "Total Records",
            value: grouped_count(stats.total_count, locale_tag),
            subtitle: population,
            icon: "📋",
            tone: Tone::Warning,
        },
    ]
}
