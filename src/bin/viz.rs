use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use tracing::info;

use ballistic_flight::render::{self, Rgb, ANIMATION_FRAME_BUDGET, TABLE_HEADER};
use ballistic_flight::{simulate, ParameterForm, RunHistory};

fn main() -> eframe::Result {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1600.0, 950.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Point-Mass Flight in Air",
        options,
        Box::new(|_| Ok(Box::new(FlightViz::default()))),
    )
}

/// Plot-ready copy of one run.
struct Curve {
    label: String,
    color: Rgb,
    points: Vec<[f64; 2]>,
}

#[derive(Default)]
struct FlightViz {
    form: ParameterForm,
    history: RunHistory,
    curves: Vec<Curve>,
    /// Points revealed so far on the newest curve.
    frame: usize,
    error: Option<String>,
    limits: Option<((f64, f64), (f64, f64))>,
}

impl FlightViz {
    fn run_simulation(&mut self) {
        let params = match self.form.parse() {
            Ok(p) => p,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };
        let result = match simulate(&params) {
            Ok(r) => r,
            Err(e) => {
                self.error = Some(e.to_string());
                return;
            }
        };

        let run = self.history.len();
        let points: Vec<[f64; 2]> = render::downsample(result.trajectory(), ANIMATION_FRAME_BUDGET)
            .iter()
            .map(|p| [p.x, p.y])
            .collect();
        self.limits = Some(render::axis_limits(result.trajectory()));
        self.curves.push(Curve {
            label: format!("dt={}", result.time_step()),
            color: render::color_for_run(run),
            points,
        });
        self.frame = 0;
        info!(run, samples = result.len(), "run added");
        self.history.push(result);
    }

    fn clear(&mut self) {
        self.history.clear();
        self.curves.clear();
        self.frame = 0;
        self.limits = None;
    }

    fn animating(&self) -> bool {
        self.curves
            .last()
            .is_some_and(|c| self.frame < c.points.len())
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Launch parameters");
        egui::Grid::new("params").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
            let form = &mut self.form;
            let fields: [(&str, &mut String); 7] = [
                ("Initial speed (m/s)", &mut form.initial_speed),
                ("Launch angle (deg)", &mut form.launch_angle_deg),
                ("Mass (kg)", &mut form.mass),
                ("Air density (kg/m^3)", &mut form.air_density),
                ("Drag coefficient", &mut form.drag_coefficient),
                ("Cross-section area (m^2)", &mut form.cross_section_area),
                ("Time step (s)", &mut form.time_step),
            ];
            for (label, text) in fields {
                ui.label(label);
                ui.add(egui::TextEdit::singleline(text).desired_width(100.0));
                ui.end_row();
            }
        });
        ui.add_space(16.0);
        if ui.button("Run simulation").clicked() {
            self.run_simulation();
        }
        if ui.button("Clear results").clicked() {
            self.clear();
        }
    }

    fn results_table(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("results").striped(true).num_columns(5).show(ui, |ui| {
                for h in TABLE_HEADER {
                    ui.strong(h);
                }
                ui.end_row();
                for row in render::table_rows(&self.history) {
                    for cell in row {
                        ui.label(cell);
                    }
                    ui.end_row();
                }
            });
        });
    }

    fn trajectory_plot(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("trajectory")
            .legend(Legend::default())
            .x_axis_label("Range (m)")
            .y_axis_label("Height (m)");
        if let Some(((x0, x1), (y0, y1))) = self.limits {
            plot = plot.include_x(x0).include_x(x1).include_y(y0).include_y(y1);
        }

        let newest = self.curves.len().saturating_sub(1);
        plot.show(ui, |plot_ui| {
            for (i, c) in self.curves.iter().enumerate() {
                let shown = if i == newest {
                    render::revealed(&c.points, self.frame)
                } else {
                    &c.points[..]
                };
                let Rgb(r, g, b) = c.color;
                plot_ui.line(
                    Line::new(c.label.clone(), PlotPoints::from(shown.to_vec()))
                        .color(egui::Color32::from_rgb(r, g, b))
                        .width(2.0),
                );
            }
        });
    }
}

impl eframe::App for FlightViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.animating() {
            self.frame += 1;
            ctx.request_repaint();
        }

        egui::SidePanel::right("controls")
            .min_width(320.0)
            .show(ctx, |ui| self.controls(ui));

        egui::TopBottomPanel::bottom("results")
            .resizable(true)
            .min_height(220.0)
            .show(ctx, |ui| {
                ui.columns(2, |cols| {
                    cols[0].heading("Simulation results");
                    self.results_table(&mut cols[0]);
                    cols[1].heading("Last simulation");
                    cols[1].label(render::info_text(self.history.latest()));
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| self.trajectory_plot(ui));

        let mut open = self.error.is_some();
        if let Some(msg) = self.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .open(&mut open)
                .show(ctx, |ui| {
                    ui.label(format!("Invalid input: {msg}"));
                });
        }
        if !open {
            self.error = None;
        }
    }
}
