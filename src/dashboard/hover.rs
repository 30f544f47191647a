//! Scatter legend groups and pointer hit-testing.

use crate::models::{Record, Smoker};

/// Legend groups of the age vs. charges scatter, in drawing order.
pub const SMOKER_GROUPS: [&str; 3] = ["Smoker", "Non-Smoker", "Other"];

/// Legend group a smoker value is drawn in.
pub fn smoker_group(smoker: &Smoker) -> &'static str {
    match smoker {
        Smoker::Yes => SMOKER_GROUPS[0],
        Smoker::No => SMOKER_GROUPS[1],
        Smoker::Other(_) => SMOKER_GROUPS[2],
    }
}

/// Records drawn in `group`, in input order.
pub fn group_members<'a>(records: &'a [Record], group: &'a str) -> impl Iterator<Item = &'a Record> {
    records.iter().filter(move |r| smoker_group(&r.smoker) == group)
}

/// Index of the point nearest to `cursor` that lies within `radius`.
///
/// Points and cursor share one coordinate space (screen pixels in the GUI). On equal
/// distances the earliest point wins.
pub fn nearest_point<I>(points: I, cursor: (f32, f32), radius: f32) -> Option<usize>
where
    I: IntoIterator<Item = (f32, f32)>,
{
    points
        .into_iter()
        .enumerate()
        .map(|(i, (x, y))| (i, (x - cursor.0).hypot(y - cursor.1)))
        .filter(|(_, d)| *d <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}
