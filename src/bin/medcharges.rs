use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use medcharges::format::{dollars, trimmed};
use medcharges::storage::{self, AnalysisReport};
use medcharges::viz::{self, ChartKind, ImageFormat};
use medcharges::{AnalysisConfig, Dashboard, SmokerPolicy};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "medcharges",
    version,
    about = "Summarize & chart medical insurance charges data"
)]
struct Cli {
    /// CSV path or http(s) URL (default: data/medical-charges.csv).
    #[arg(long, global = true)]
    data: Option<String>,
    /// JSON config file with `data`, `bin_count` and `smoker_policy` keys.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Number of BMI histogram bins (default 15).
    #[arg(long, global = true)]
    bins: Option<usize>,
    /// How to treat smoker values other than "yes"/"no".
    #[arg(long, value_enum, global = true)]
    smoker_policy: Option<PolicyArg>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print summary statistics, regional averages and the BMI histogram.
    Summary(SummaryArgs),
    /// Render one chart (.svg or .png).
    Plot(PlotArgs),
    /// Write all charts plus JSON/CSV tables into a directory.
    Report(ReportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Keep,
    Reject,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ChartArg {
    Bar,
    Histogram,
    Scatter,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Svg,
    Png,
}

#[derive(Args, Debug)]
struct SummaryArgs {
    /// Print the full report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Locale for thousands separators (e.g., en, de).
    #[arg(long, default_value = "en")]
    locale: String,
}

#[derive(Args, Debug)]
struct PlotArgs {
    #[arg(long, value_enum)]
    chart: ChartArg,
    /// Output path; `.svg` selects SVG, anything else PNG.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = viz::DEFAULT_HEIGHT)]
    height: u32,
}

#[derive(Args, Debug)]
struct ReportArgs {
    #[arg(long)]
    out_dir: PathBuf,
    #[arg(long, value_enum, default_value = "svg")]
    format: FormatArg,
    #[arg(long, default_value_t = viz::DEFAULT_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = viz::DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let dash = Dashboard::try_load(&config).context("error loading data")?;
    match cli.cmd {
        Command::Summary(args) => cmd_summary(&dash, &config, args),
        Command::Plot(args) => cmd_plot(&dash, args),
        Command::Report(args) => cmd_report(&dash, &config, args),
    }
}

/// Defaults, then the config file, then flags.
fn resolve_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.data = data.clone();
    }
    if let Some(bins) = cli.bins {
        config.bin_count = bins;
    }
    if let Some(policy) = cli.smoker_policy {
        config.smoker_policy = match policy {
            PolicyArg::Keep => SmokerPolicy::Keep,
            PolicyArg::Reject => SmokerPolicy::Reject,
        };
    }
    config.validate()?;
    Ok(config)
}

fn cmd_summary(dash: &Dashboard, config: &AnalysisConfig, args: SummaryArgs) -> Result<()> {
    if args.json {
        let report = AnalysisReport::new(dash, &config.data, config.bin_count);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for card in dash.cards(&args.locale) {
        println!("{:<16} {:>14}  {}", card.title, card.value, card.subtitle);
    }

    println!();
    println!("{:<16} {:>14} {:>8}", "region", "avg charges", "count");
    for r in &dash.regional {
        println!(
            "{:<16} {:>14} {:>8}",
            r.region,
            dollars(r.avg_charges),
            r.count
        );
    }

    println!();
    println!("{:>8} {:>8} {:>8}", "bmi from", "to", "count");
    for b in &dash.bmi_bins {
        println!(
            "{:>8} {:>8} {:>8}",
            trimmed(b.x0, 2),
            trimmed(b.x1, 2),
            b.count
        );
    }
    Ok(())
}

fn cmd_plot(dash: &Dashboard, args: PlotArgs) -> Result<()> {
    let kind = match args.chart {
        ChartArg::Bar => ChartKind::RegionalBars,
        ChartArg::Histogram => ChartKind::BmiHistogram,
        ChartArg::Scatter => ChartKind::AgeCharges,
    };
    viz::plot_chart(kind, dash, &args.out, args.width, args.height)?;
    eprintln!("Wrote plot to {}", args.out.display());
    Ok(())
}

fn cmd_report(dash: &Dashboard, config: &AnalysisConfig, args: ReportArgs) -> Result<()> {
    let format = match args.format {
        FormatArg::Svg => ImageFormat::Svg,
        FormatArg::Png => ImageFormat::Png,
    };
    let dir = &args.out_dir;
    let charts = viz::render_all(dash, dir, format, args.width, args.height)?;

    let report = AnalysisReport::new(dash, &config.data, config.bin_count);
    storage::save_report_json(&report, dir.join("summary.json"))
        .context("write summary.json")?;
    storage::save_regional_csv(&dash.regional, dir.join("regional.csv"))
        .context("write regional.csv")?;
    storage::save_bins_csv(&dash.bmi_bins, dir.join("bmi_bins.csv"))
        .context("write bmi_bins.csv")?;

    eprintln!(
        "Wrote {} charts and 3 tables to {}",
        charts.len(),
        dir.display()
    );
    Ok(())
}
