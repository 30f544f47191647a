use medcharges::models::{Record, Smoker};
use medcharges::viz::{self, ChartKind, ImageFormat};
use medcharges::Dashboard;
use tempfile::tempdir;

fn sample_dashboard() -> Dashboard {
    let rows = [
        (19.0, 27.9, 16884.924, Smoker::Yes, "southwest"),
        (18.0, 33.77, 1725.5523, Smoker::No, "southeast"),
        (28.0, 33.0, 4449.462, Smoker::No, "southeast"),
        (33.0, 22.705, 21984.47061, Smoker::No, "northwest"),
        (37.0, 29.83, 6406.4107, Smoker::Other("unknown".into()), "northeast"),
    ];
    let records = rows
        .into_iter()
        .map(|(age, bmi, charges, smoker, region)| Record {
            age,
            bmi,
            charges,
            smoker,
            region: region.into(),
            ..Record::default()
        })
        .collect();
    Dashboard::build(records, 15)
}

#[test]
fn renders_every_chart_as_svg() {
    let dash = sample_dashboard();
    let dir = tempdir().unwrap();
    for kind in ChartKind::ALL {
        let out = dir.path().join(format!("{}.svg", kind.file_stem()));
        viz::plot_chart(kind, &dash, &out, 800, 400).unwrap();
        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"), "{kind:?}");
        assert!(svg.contains(kind.title()), "{kind:?} caption missing");
    }
}

#[test]
fn bar_chart_labels_each_region() {
    let dash = sample_dashboard();
    let dir = tempdir().unwrap();
    let out = dir.path().join("regional.svg");
    viz::plot_regional_bars(&dash.regional, &out, 1000, 400).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    for r in &dash.regional {
        assert_eq!(svg.matches(r.region.as_str()).count(), 1, "{}", r.region);
    }
    assert!(svg.contains("$22.0k"));
}

#[test]
fn histogram_draws_category_lines() {
    let dash = sample_dashboard();
    let dir = tempdir().unwrap();
    let out = dir.path().join("bmi.svg");
    viz::plot_bmi_histogram(&dash.bmi_bins, &out, 800, 400).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("Normal"));
    assert!(svg.contains("Overweight"));
    assert!(!svg.contains("Underweight"));
}

#[test]
fn renders_png_by_extension() {
    let dash = sample_dashboard();
    let dir = tempdir().unwrap();
    let out = dir.path().join("scatter.png");
    viz::plot_age_charges(&dash.records, &out, 640, 360).unwrap();
    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn empty_data_is_an_error() {
    let dash = Dashboard::build(Vec::new(), 15);
    let dir = tempdir().unwrap();
    for kind in ChartKind::ALL {
        let out = dir.path().join(format!("{}.svg", kind.file_stem()));
        let err = viz::plot_chart(kind, &dash, &out, 800, 400).unwrap_err();
        assert!(err.to_string().contains("no data to plot"), "{kind:?}: {err}");
        assert!(!out.exists());
    }
}

#[test]
fn render_all_writes_three_files() {
    let dash = sample_dashboard();
    let dir = tempdir().unwrap();
    let out_dir = dir.path().join("charts");
    let written = viz::render_all(&dash, &out_dir, ImageFormat::Svg, 800, 400).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["scatter.svg", "regional.svg", "bmi.svg"]);
    for p in &written {
        assert!(std::fs::metadata(p).unwrap().len() > 0);
    }
}
