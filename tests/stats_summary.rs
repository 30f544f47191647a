use medcharges::models::{Record, Smoker};
use medcharges::stats::{bmi_distribution, calculate_stats, histogram, regional_averages};

fn rec(bmi: f64, charges: f64, smoker: Smoker, region: &str) -> Record {
    Record {
        bmi,
        charges,
        smoker,
        region: region.to_string(),
        ..Record::default()
    }
}

fn pair() -> Vec<Record> {
    vec![
        rec(20.0, 1000.0, Smoker::No, "a"),
        rec(30.0, 3000.0, Smoker::Yes, "b"),
    ]
}

#[test]
fn stats_of_two_records() {
    let s = calculate_stats(&pair());
    assert_eq!(s.avg_charge, 2000.0);
    assert_eq!(s.avg_age, 0.0);
    assert_eq!(s.avg_bmi, 25.0);
    assert_eq!(s.total_count, 2);
    assert_eq!(s.smoker_count, 1);
    assert_eq!(s.non_smoker_count, 1);
    assert_eq!(s.other_smoker_count, 0);
}

#[test]
fn empty_input_gives_zero_stats() {
    let s = calculate_stats(&[]);
    assert_eq!(s.avg_charge, 0.0);
    assert_eq!(s.avg_age, 0.0);
    assert_eq!(s.avg_bmi, 0.0);
    assert_eq!(s.total_count, 0);
    assert_eq!(s.smoker_count + s.non_smoker_count, 0);
    assert!(regional_averages(&[]).is_empty());
    assert!(bmi_distribution(&[], 15).is_empty());
}

#[test]
fn unknown_smoker_values_are_tallied_as_other() {
    let mut rows = pair();
    rows.push(rec(22.0, 500.0, Smoker::Other("Yes".into()), "a"));
    let s = calculate_stats(&rows);
    assert_eq!(s.smoker_count, 1);
    assert_eq!(s.non_smoker_count, 1);
    assert_eq!(s.other_smoker_count, 1);
    assert_eq!(
        s.smoker_count + s.non_smoker_count + s.other_smoker_count,
        s.total_count
    );
}

#[test]
fn regions_sorted_by_descending_mean() {
    let out = regional_averages(&pair());
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].region, "b");
    assert_eq!(out[0].avg_charges, 3000.0);
    assert_eq!(out[0].count, 1);
    assert_eq!(out[1].region, "a");
    assert_eq!(out[1].avg_charges, 1000.0);
    assert_eq!(out[1].count, 1);
}

#[test]
fn region_labels_are_not_normalized() {
    let rows = vec![
        rec(20.0, 100.0, Smoker::No, "North"),
        rec(20.0, 300.0, Smoker::No, "north"),
        rec(20.0, 200.0, Smoker::No, "north"),
    ];
    let out = regional_averages(&rows);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].region, "north");
    assert_eq!(out[0].count, 2);
    assert_eq!(out[0].avg_charges, 250.0);
    assert_eq!(out.iter().map(|r| r.count).sum::<usize>(), rows.len());
}

#[test]
fn tied_regions_keep_discovery_order() {
    let rows = vec![
        rec(20.0, 500.0, Smoker::No, "west"),
        rec(20.0, 900.0, Smoker::No, "east"),
        rec(20.0, 500.0, Smoker::No, "south"),
    ];
    let names: Vec<String> = regional_averages(&rows)
        .into_iter()
        .map(|r| r.region)
        .collect();
    assert_eq!(names, ["east", "west", "south"]);
}

#[test]
fn two_bins_split_at_midpoint() {
    let bins = bmi_distribution(&pair(), 2);
    assert_eq!(bins.len(), 2);
    assert_eq!((bins[0].x0, bins[0].x1, bins[0].count), (20.0, 25.0, 1));
    assert_eq!((bins[1].x0, bins[1].x1, bins[1].count), (25.0, 30.0, 1));
    assert_eq!(bins[0].midpoint, 22.5);
}

#[test]
fn bins_are_contiguous_and_cover_every_value() {
    let values: Vec<f64> = (0..200).map(|i| 15.0 + (i as f64 * 0.37) % 38.0).collect();
    let bins = histogram(&values, 15);
    assert_eq!(bins.len(), 15);
    assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(bins[0].x0, min);
    assert_eq!(bins[14].x1, max);
    for w in bins.windows(2) {
        assert_eq!(w[0].x1, w[1].x0);
        assert!(w[0].x0 < w[0].x1);
    }
}

#[test]
fn empty_bins_are_kept() {
    let bins = histogram(&[10.0, 10.5, 40.0], 6);
    assert_eq!(bins.len(), 6);
    assert!(bins.iter().any(|b| b.count == 0));
    assert_eq!(bins.first().unwrap().count, 2);
    assert_eq!(bins.last().unwrap().count, 1);
}

#[test]
fn identical_values_give_one_closed_bin() {
    let bins = histogram(&[27.5, 27.5, 27.5], 15);
    assert_eq!(bins.len(), 1);
    assert_eq!((bins[0].x0, bins[0].x1, bins[0].count), (27.5, 27.5, 3));
    assert_eq!(bins[0].midpoint, 27.5);
}

#[test]
fn zero_bin_count_gives_no_bins() {
    assert!(bmi_distribution(&pair(), 0).is_empty());
}
