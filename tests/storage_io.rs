use medcharges::models::{HistogramBin, Record, RegionalAverage, Smoker};
use medcharges::storage::{self, AnalysisReport};
use medcharges::Dashboard;
use tempfile::tempdir;

fn dashboard() -> Dashboard {
    let records = vec![
        Record {
            age: 40.0,
            bmi: 20.0,
            charges: 1000.0,
            smoker: Smoker::No,
            region: "a".into(),
            ..Record::default()
        },
        Record {
            age: 50.0,
            bmi: 30.0,
            charges: 3000.0,
            smoker: Smoker::Yes,
            region: "b".into(),
            ..Record::default()
        },
    ];
    Dashboard::build(records, 2)
}

#[test]
fn report_json_round_trips() {
    let dash = dashboard();
    let dir = tempdir().unwrap();
    let path = dir.path().join("summary.json");
    let report = AnalysisReport::new(&dash, "medical-charges.csv", 2);
    storage::save_report_json(&report, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back: AnalysisReport = serde_json::from_str(&text).unwrap();
    assert_eq!(back, report);

    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["stats"]["avg_charge"], 2000.0);
    assert_eq!(v["regional"][0]["region"], "b");
    assert_eq!(v["bmi_bins"].as_array().unwrap().len(), 2);
    assert!(v["generated_at"].is_string());
}

#[test]
fn regional_csv_has_header_and_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regional.csv");
    let rows = vec![
        RegionalAverage {
            region: "southeast".into(),
            avg_charges: 14735.5,
            count: 364,
        },
        RegionalAverage {
            region: "=cmd".into(),
            avg_charges: 1.0,
            count: 1,
        },
    ];
    storage::save_regional_csv(&rows, &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "region,avg_charges,count");
    assert_eq!(lines[1], "southeast,14735.5,364");
    assert_eq!(lines[2], "'=cmd,1.0,1");
}

#[test]
fn bins_csv_keeps_empty_bins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bmi_bins.csv");
    let bins = [
        HistogramBin::new(20.0, 25.0, 0),
        HistogramBin::new(25.0, 30.0, 2),
    ];
    storage::save_bins_csv(&bins, &path).unwrap();
    let mut rdr = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        rdr.headers().unwrap().iter().collect::<Vec<_>>(),
        ["x0", "x1", "count", "midpoint"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][2], "0");
    assert_eq!(&rows[1][3], "27.5");
}
