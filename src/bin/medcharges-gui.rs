/*!
 * Desktop dashboard for medcharges
 *
 * Loads the charges CSV on a background thread, then shows the four stats cards,
 * the age vs. charges scatter, the regional bar chart and the BMI histogram with
 * hover tooltips and staggered enter animations.
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui::{self, Align2, Color32, RichText};
use egui_plot::{Bar, BarChart, Corner, Legend, LineStyle, Plot, PlotPoint, Points, Text, VLine};
use medcharges::dashboard::anim;
use medcharges::dashboard::hover::{SMOKER_GROUPS, group_members, nearest_point, smoker_group};
use medcharges::dashboard::scales::{
    histogram_x_domain, histogram_y_domain, regional_y_domain, scatter_domains,
    visible_reference_lines,
};
use medcharges::dashboard::tooltip::{bin_tooltip, record_tooltip, region_tooltip};
use medcharges::dashboard::{StatsCard, Tone};
use medcharges::format::{dollars_k, dollars_k1, trimmed};
use medcharges::models::{HistogramBin, Record, RegionalAverage, Smoker};
use medcharges::viz::util::{
    primary_color, secondary_color, smoker_color, success_color, warning_color,
};
use medcharges::viz::{self, ChartKind, ImageFormat};
use medcharges::{AnalysisConfig, Dashboard, DashboardState};
use plotters::style::RGBAColor;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

const CHART_HEIGHT: f32 = 320.0;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let mut config = AnalysisConfig::default();
    if let Some(data) = std::env::args().nth(1) {
        config.data = data;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Medical Charges Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Medical Charges Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashboardApp::new(config)))),
    )
}

struct DashboardApp {
    config: AnalysisConfig,
    state: DashboardState,
    /// Set when the state turns `Ready`; all enter animations count from here.
    ready_at: Option<Instant>,
    export_dir: PathBuf,
    status_message: String,
    load_receiver: Option<mpsc::Receiver<DashboardState>>,
}

impl DashboardApp {
    fn new(config: AnalysisConfig) -> Self {
        let mut app = Self {
            config,
            state: DashboardState::Loading,
            ready_at: None,
            export_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            status_message: String::new(),
            load_receiver: None,
        };
        app.start_load();
        app
    }

    fn start_load(&mut self) {
        self.state = DashboardState::Loading;
        self.ready_at = None;
        self.status_message.clear();

        let (sender, receiver) = mpsc::channel();
        self.load_receiver = Some(receiver);

        let config = self.config.clone();
        thread::spawn(move || {
            let _ = sender.send(Dashboard::load(&config));
        });
    }

    fn check_load_result(&mut self) {
        if let Some(receiver) = &self.load_receiver
            && let Ok(state) = receiver.try_recv()
        {
            self.load_receiver = None;
            if matches!(state, DashboardState::Ready(_)) {
                self.ready_at = Some(Instant::now());
            }
            self.state = state;
        }
    }

    fn elapsed_ms(&self) -> f64 {
        self.ready_at
            .map(|t| t.elapsed().as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }

    fn export_charts(&mut self) {
        let Some(dash) = self.state.dashboard() else {
            return;
        };
        let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.export_dir)
            .pick_folder()
        else {
            return;
        };
        self.status_message = match viz::render_all(
            dash,
            &dir,
            ImageFormat::Svg,
            viz::DEFAULT_WIDTH,
            viz::DEFAULT_HEIGHT,
        ) {
            Ok(paths) => format!("Wrote {} charts to {}", paths.len(), dir.display()),
            Err(e) => format!("Export failed: {e:#}"),
        };
        self.export_dir = dir;
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_result();

        let elapsed = self.elapsed_ms();
        let animating = match &self.state {
            DashboardState::Loading => true,
            DashboardState::Ready(d) => !anim::dashboard_settled(d, elapsed),
            DashboardState::Failed(_) => false,
        };
        if animating {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open CSV…").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("CSV", &["csv"])
                        .pick_file()
                {
                    self.config.data = path.to_string_lossy().to_string();
                    self.start_load();
                }
                let can_export = self.state.dashboard().is_some_and(|d| !d.is_empty());
                if ui
                    .add_enabled(can_export, egui::Button::new("Export charts…"))
                    .clicked()
                {
                    self.export_charts();
                }
                ui.label(RichText::new(&self.config.data).weak());
                if !self.status_message.is_empty() {
                    ui.separator();
                    ui.label(&self.status_message);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            DashboardState::Loading => {
                ui.centered_and_justified(|ui| {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Loading medical data...");
                    });
                });
            }
            DashboardState::Failed(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.heading(RichText::new("Error Loading Data").color(Color32::RED));
                    ui.label(message);
                });
            }
            DashboardState::Ready(dash) => {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    show_dashboard(ui, dash, elapsed);
                });
            }
        });
    }
}

fn show_dashboard(ui: &mut egui::Ui, dash: &Dashboard, elapsed: f64) {
    ui.vertical_centered(|ui| {
        ui.heading(RichText::new("Medical Charges Dashboard").size(28.0).strong());
        ui.label("Insurance charges by age, BMI, region and smoking status");
    });
    ui.add_space(12.0);

    let cards = dash.cards("en");
    ui.columns(cards.len(), |cols| {
        for (i, (col, card)) in cols.iter_mut().zip(&cards).enumerate() {
            let t = anim::CARDS.progress(i, elapsed) as f32;
            entering(col, t, anim::CARD_OFFSET_PX, |ui| show_card(ui, card));
        }
    });
    ui.add_space(16.0);

    let panels: [(ChartKind, fn(&mut egui::Ui, &Dashboard, f64)); 3] = [
        (ChartKind::AgeCharges, scatter_panel),
        (ChartKind::RegionalBars, regional_panel),
        (ChartKind::BmiHistogram, histogram_panel),
    ];
    for (i, (kind, body)) in panels.into_iter().enumerate() {
        let t = anim::CHARTS.progress(i, elapsed) as f32;
        entering(ui, t, anim::CHART_OFFSET_PX, |ui| {
            panel_frame(ui).show(ui, |ui| {
                ui.label(RichText::new(kind.title()).size(18.0).strong());
                ui.label(RichText::new(kind.subtitle()).weak());
                ui.add_space(6.0);
                body(ui, dash, elapsed);
            });
        });
        ui.add_space(16.0);
    }
}

/// Fade in and slide up by `offset_px` as `t` goes from 0 to 1.
fn entering(ui: &mut egui::Ui, t: f32, offset_px: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let t = t.clamp(0.0, 1.0);
    ui.scope(|ui| {
        ui.set_opacity(t);
        ui.add_space(offset_px * (1.0 - t));
        add_contents(ui);
        ui.add_space(offset_px * t);
    });
}

fn panel_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::none()
        .rounding(8.0)
        .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
        .fill(ui.visuals().extreme_bg_color)
        .inner_margin(12.0)
}

fn show_card(ui: &mut egui::Ui, card: &StatsCard) {
    let accent = to_color32(tone_color(card.tone));
    panel_frame(ui)
        .stroke(egui::Stroke::new(1.5, accent))
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.icon).size(22.0));
                ui.label(RichText::new(card.title).strong());
            });
            ui.label(RichText::new(&card.value).size(24.0).color(accent).strong());
            ui.label(RichText::new(&card.subtitle).small().weak());
        });
}

fn tone_color(tone: Tone) -> RGBAColor {
    match tone {
        Tone::Primary => primary_color(),
        Tone::Secondary => secondary_color(),
        Tone::Success => success_color(),
        Tone::Warning => warning_color(),
    }
}

fn to_color32(c: RGBAColor) -> Color32 {
    Color32::from_rgb(c.0, c.1, c.2)
}

fn no_data(ui: &mut egui::Ui) {
    ui.add_sized([ui.available_width(), CHART_HEIGHT], egui::Label::new("No data"));
}

fn base_plot(id: &str) -> Plot {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
}

fn scatter_panel(ui: &mut egui::Ui, dash: &Dashboard, elapsed: f64) {
    let Some((x, y)) = scatter_domains(&dash.records) else {
        no_data(ui);
        return;
    };
    let records = &dash.records;
    let settled = anim::POINTS.is_finished(records.len(), elapsed);

    let response = base_plot("age_charges")
        .legend(Legend::default().position(Corner::RightTop))
        .include_x(x.start)
        .include_x(x.end)
        .include_y(y.start)
        .include_y(y.end)
        .x_axis_label(ChartKind::AgeCharges.x_desc())
        .y_axis_label(ChartKind::AgeCharges.y_desc())
        .y_axis_formatter(|mark, _range| dollars_k(mark.value))
        .show(ui, |plot_ui| {
            let hovered = plot_ui.pointer_coordinate().and_then(|pointer| {
                let cursor = plot_ui.screen_from_plot(pointer);
                let screen = records.iter().map(|r| {
                    let pos = plot_ui.screen_from_plot(PlotPoint::new(r.age, r.charges));
                    (pos.x, pos.y)
                });
                nearest_point(screen, (cursor.x, cursor.y), anim::POINT_HOVER_RADIUS)
            });

            if settled {
                for group in SMOKER_GROUPS {
                    let members: Vec<&Record> = group_members(records, group).collect();
                    let Some(first) = members.first() else {
                        continue;
                    };
                    let pts: Vec<[f64; 2]> = members.iter().map(|r| [r.age, r.charges]).collect();
                    plot_ui.points(
                        Points::new(pts)
                            .radius(anim::POINT_RADIUS)
                            .color(point_color(&first.smoker))
                            .name(group),
                    );
                }
            } else {
                for (i, r) in records.iter().enumerate() {
                    let radius = anim::POINT_RADIUS * anim::POINTS.progress(i, elapsed) as f32;
                    if radius <= 0.0 {
                        continue;
                    }
                    plot_ui.points(
                        Points::new(vec![[r.age, r.charges]])
                            .radius(radius)
                            .color(point_color(&r.smoker))
                            .name(smoker_group(&r.smoker)),
                    );
                }
            }

            if let Some(i) = hovered {
                let r = &records[i];
                plot_ui.points(
                    Points::new(vec![[r.age, r.charges]])
                        .radius(anim::POINT_HOVER_RADIUS)
                        .color(to_color32(smoker_color(&r.smoker))),
                );
            }
            hovered
        });

    if let Some(i) = response.inner {
        response.response.on_hover_text(record_tooltip(&records[i]));
    }
}

fn point_color(s: &Smoker) -> Color32 {
    to_color32(smoker_color(s)).gamma_multiply(anim::POINT_OPACITY)
}

fn regional_panel(ui: &mut egui::Ui, dash: &Dashboard, elapsed: f64) {
    let Some(y) = regional_y_domain(&dash.regional) else {
        no_data(ui);
        return;
    };
    let rows: Vec<RegionalAverage> = dash.regional.clone();
    let fill = to_color32(primary_color());

    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let t = anim::BARS.progress(i, elapsed);
            Bar::new(i as f64, r.avg_charges * t)
                .width(0.7)
                .fill(fill)
        })
        .collect();

    let tooltip_rows = rows.clone();
    let chart = BarChart::new(bars)
        .color(fill.gamma_multiply(anim::BAR_HOVER_OPACITY))
        .element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
            tooltip_rows
                .get(bar.argument.round() as usize)
                .map(region_tooltip)
                .unwrap_or_default()
        }));

    let names: Vec<String> = rows.iter().map(|r| r.region.clone()).collect();
    base_plot("regional")
        .include_x(-0.5)
        .include_x(rows.len() as f64 - 0.5)
        .include_y(y.start)
        .include_y(y.end)
        .x_axis_label(ChartKind::RegionalBars.x_desc())
        .y_axis_label(ChartKind::RegionalBars.y_desc())
        .x_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() > 1e-6 || i < 0.0 {
                return String::new();
            }
            names.get(i as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| dollars_k(mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            for (i, r) in rows.iter().enumerate() {
                let t = anim::BAR_LABELS.progress(i, elapsed) as f32;
                if t <= 0.0 {
                    continue;
                }
                let color = ui_text_color().gamma_multiply(t);
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(i as f64, r.avg_charges),
                        RichText::new(dollars_k1(r.avg_charges)).color(color),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

fn ui_text_color() -> Color32 {
    Color32::from_gray(60)
}

fn histogram_panel(ui: &mut egui::Ui, dash: &Dashboard, elapsed: f64) {
    let (Some(x), Some(y)) = (
        histogram_x_domain(&dash.bmi_bins),
        histogram_y_domain(&dash.bmi_bins),
    ) else {
        no_data(ui);
        return;
    };
    let bins: Vec<HistogramBin> = dash.bmi_bins.clone();
    let fill = to_color32(secondary_color());

    let bars: Vec<Bar> = bins
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let t = anim::HISTOGRAM_BARS.progress(i, elapsed);
            let width = b.x1 - b.x0;
            let width = if width > 0.0 { width * 0.96 } else { 1.0 };
            Bar::new(b.midpoint, b.count as f64 * t)
                .width(width)
                .fill(fill)
        })
        .collect();

    let tooltip_bins = bins.clone();
    let chart = BarChart::new(bars)
        .color(fill.gamma_multiply(anim::BAR_HOVER_OPACITY))
        .element_formatter(Box::new(move |bar: &Bar, _chart: &BarChart| {
            tooltip_bins
                .iter()
                .find(|b| b.midpoint == bar.argument)
                .map(bin_tooltip)
                .unwrap_or_default()
        }));

    let lines = visible_reference_lines(&x);
    base_plot("bmi_histogram")
        .include_x(x.start)
        .include_x(x.end)
        .include_y(y.start)
        .include_y(y.end)
        .x_axis_label(ChartKind::BmiHistogram.x_desc())
        .y_axis_label(ChartKind::BmiHistogram.y_desc())
        .x_axis_formatter(|mark, _range| trimmed(mark.value, 1))
        .y_axis_formatter(|mark, _range| trimmed(mark.value, 0))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
            for line in &lines {
                let color = if line.warning {
                    to_color32(warning_color())
                } else {
                    to_color32(success_color())
                };
                plot_ui.vline(
                    VLine::new(line.value)
                        .color(color)
                        .width(2.0)
                        .style(LineStyle::dashed_loose()),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(line.value, y.end),
                        RichText::new(line.label).color(color).small(),
                    )
                    .anchor(Align2::LEFT_TOP),
                );
            }
        });
}
