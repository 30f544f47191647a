use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

const SAMPLE: &str = "age,sex,bmi,children,smoker,region,charges
19,female,27.9,0,yes,southwest,16884.924
18,male,33.77,1,no,southeast,1725.5523
28,male,33,3,no,southeast,4449.462
33,male,22.705,0,no,northwest,21984.47061
";

fn write_sample(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("charges.csv");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("medcharges"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn summary_prints_cards_and_tables() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["summary", "--data"]).arg(&data);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Average Charge"))
        .stdout(predicate::str::contains("1 smokers, 3 non-smokers"))
        .stdout(predicate::str::contains("northwest"));
}

#[test]
fn summary_json_is_machine_readable() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let output = Command::cargo_bin("medcharges")
        .unwrap()
        .args(["summary", "--json", "--bins", "4", "--data"])
        .arg(&data)
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["stats"]["total_count"], 4);
    assert_eq!(v["stats"]["smoker_count"], 1);
    assert_eq!(v["bin_count"], 4);
    assert_eq!(v["bmi_bins"].as_array().unwrap().len(), 4);
    assert_eq!(v["regional"][0]["region"], "northwest");
}

#[test]
fn config_file_sets_bins_and_flags_override_it() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let config = dir.path().join("config.json");
    let body = serde_json::json!({ "data": data, "bin_count": 3 });
    std::fs::write(&config, body.to_string()).unwrap();

    let output = Command::cargo_bin("medcharges")
        .unwrap()
        .args(["summary", "--json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["bmi_bins"].as_array().unwrap().len(), 3);

    let output = Command::cargo_bin("medcharges")
        .unwrap()
        .args(["summary", "--json", "--bins", "5", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["bmi_bins"].as_array().unwrap().len(), 5);
}

#[test]
fn plot_writes_svg() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let out = dir.path().join("bars.svg");
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["plot", "--chart", "bar", "--out"])
        .arg(&out)
        .arg("--data")
        .arg(&data);
    cmd.assert().success();
    assert!(std::fs::read_to_string(&out).unwrap().contains("<svg"));
}

#[test]
fn report_writes_charts_and_tables() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let out_dir = dir.path().join("report");
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["report", "--out-dir"])
        .arg(&out_dir)
        .arg("--data")
        .arg(&data);
    cmd.assert().success();
    for name in [
        "regional.svg",
        "bmi.svg",
        "scatter.svg",
        "summary.json",
        "regional.csv",
        "bmi_bins.csv",
    ] {
        assert!(out_dir.join(name).exists(), "missing {name}");
    }
}

#[test]
fn summary_without_data_uses_bundled_sample() {
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.current_dir(env!("CARGO_MANIFEST_DIR")).arg("summary");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total Records"))
        .stdout(predicate::str::contains("southwest"));
}

#[test]
fn missing_data_fails() {
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["summary", "--data", "definitely/missing.csv"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error loading data"));
}

#[test]
fn reject_policy_fails_on_unknown_smoker() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("odd.csv");
    std::fs::write(
        &path,
        "age,sex,bmi,children,smoker,region,charges\n40,male,30,1,maybe,northeast,900\n",
    )
    .unwrap();
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["summary", "--smoker-policy", "reject", "--data"]).arg(&path);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown smoker value"));
}

#[test]
fn zero_bins_are_rejected() {
    let dir = tempdir().unwrap();
    let data = write_sample(dir.path());
    let mut cmd = Command::cargo_bin("medcharges").unwrap();
    cmd.args(["summary", "--bins", "0", "--data"]).arg(&data);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("bin_count"));
}
