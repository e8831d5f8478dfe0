use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, VLine};

use planform::config::presets;
use planform::io::polar_file;
use planform::polar::{derive_metrics, DerivedPolarRow, PolarTable};
use planform::sizing::{self, Sizing};

fn main() -> eframe::Result {
    let cfg = presets::light_utility();
    let sizing = sizing::size(&cfg).expect("preset configuration is valid");

    let polars: Vec<(PolarTable, Vec<DerivedPolarRow>)> = std::env::args()
        .skip(1)
        .filter_map(|path| match polar_file::read_polar_file(&path) {
            Ok(table) => {
                let derived = derive_metrics(&table);
                Some((table, derived))
            }
            Err(e) => {
                eprintln!("skipping {path}: {e}");
                None
            }
        })
        .collect();

    let app = SizingViz {
        cruise_speed: cfg.speed_max,
        page: if polars.is_empty() { Page::Sizing } else { Page::Airfoils },
        sizing,
        polars,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Planform Sizing", options, Box::new(|_| Ok(Box::new(app))))
}

#[derive(PartialEq, Clone, Copy)]
enum Page {
    Sizing,
    Airfoils,
}

struct SizingViz {
    sizing: Sizing,
    cruise_speed: f64,
    polars: Vec<(PolarTable, Vec<DerivedPolarRow>)>,
    page: Page,
}

impl eframe::App for SizingViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Preliminary sizing & airfoil comparison");
            let cruise = self.sizing.cruise_point();
            ui.label(format!(
                "Takeoff mass: {:.1} kg  |  Cruise wing: {:.2} m^2, span {:.2} m  |  Airfoils: {}",
                self.sizing.budget.takeoff_mass,
                cruise.wing_area,
                cruise.span,
                self.polars.len(),
            ));
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.page, Page::Sizing, "Geometry sweep");
                ui.selectable_value(&mut self.page, Page::Airfoils, "Airfoil polars");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Sizing => self.sizing_charts(ui),
            Page::Airfoils => self.polar_charts(ui),
        });
    }
}

impl SizingViz {
    fn sizing_charts(&self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let half_w = available.x / 2.0 - 8.0;
        let half_h = available.y / 2.0 - 8.0;

        let series = |f: fn(&planform::GeometryPoint) -> f64| -> PlotPoints {
            self.sizing.points.iter().map(|p| [p.speed, f(p)]).collect()
        };

        let charts: [(&str, &str, PlotPoints); 4] = [
            ("span", "Wingspan (m)", series(|p| p.span)),
            ("area", "Wing Area (m^2)", series(|p| p.wing_area)),
            ("chord", "Mean Chord (m)", series(|p| p.chord)),
            ("reynolds", "Reynolds Number", series(|p| p.reynolds)),
        ];

        let mut charts = charts.into_iter();
        for _ in 0..2 {
            ui.horizontal(|ui| {
                for _ in 0..2 {
                    let (id, label, points) = charts.next().expect("four charts");
                    ui.vertical(|ui| {
                        ui.label(label);
                        Plot::new(id)
                            .width(half_w)
                            .height(half_h)
                            .x_axis_label("Takeoff Speed (m/s)")
                            .show(ui, |plot_ui| {
                                plot_ui.line(Line::new(label, points));
                                plot_ui.vline(VLine::new("Cruise", self.cruise_speed));
                            });
                    });
                }
            });
        }
    }

    fn polar_charts(&self, ui: &mut egui::Ui) {
        if self.polars.is_empty() {
            ui.label("No polar files loaded — pass .txt polar exports as arguments.");
            return;
        }

        let available = ui.available_size();
        let half_w = available.x / 2.0 - 8.0;
        let half_h = available.y / 2.0 - 8.0;

        ui.horizontal(|ui| {
            // CL vs alpha
            ui.vertical(|ui| {
                ui.label("CL vs Alpha");
                Plot::new("cl_alpha")
                    .width(half_w)
                    .height(half_h)
                    .x_axis_label("Angle of Attack (deg)")
                    .show(ui, |plot_ui| {
                        for (table, _) in &self.polars {
                            let points: PlotPoints = table
                                .rows
                                .iter()
                                .filter(|r| r.alpha.is_finite() && r.cl.is_finite())
                                .map(|r| [r.alpha, r.cl])
                                .collect();
                            plot_ui.line(Line::new(table.name.clone(), points));
                        }
                    });
            });

            // Drag polar
            ui.vertical(|ui| {
                ui.label("Drag Polar (CL vs CD)");
                Plot::new("drag_polar")
                    .width(half_w)
                    .height(half_h)
                    .x_axis_label("Drag Coefficient")
                    .show(ui, |plot_ui| {
                        for (table, _) in &self.polars {
                            let points: PlotPoints = table
                                .rows
                                .iter()
                                .filter(|r| r.cd.is_finite() && r.cl.is_finite())
                                .map(|r| [r.cd, r.cl])
                                .collect();
                            plot_ui.line(Line::new(table.name.clone(), points));
                        }
                    });
            });
        });

        ui.horizontal(|ui| {
            // L/D vs alpha
            ui.vertical(|ui| {
                ui.label("L/D vs Alpha");
                Plot::new("ld_alpha")
                    .width(half_w)
                    .height(half_h)
                    .x_axis_label("Angle of Attack (deg)")
                    .show(ui, |plot_ui| {
                        for (table, derived) in &self.polars {
                            let points: PlotPoints = derived
                                .iter()
                                .filter(|d| d.alpha.is_finite() && d.l_over_d.is_finite())
                                .map(|d| [d.alpha, d.l_over_d])
                                .collect();
                            plot_ui.line(Line::new(table.name.clone(), points));
                        }
                    });
            });

            // Cm vs alpha
            ui.vertical(|ui| {
                ui.label("Cm vs Alpha");
                Plot::new("cm_alpha")
                    .width(half_w)
                    .height(half_h)
                    .x_axis_label("Angle of Attack (deg)")
                    .show(ui, |plot_ui| {
                        for (table, _) in &self.polars {
                            let points: PlotPoints = table
                                .rows
                                .iter()
                                .filter(|r| r.alpha.is_finite() && r.cm.is_finite())
                                .map(|r| [r.alpha, r.cm])
                                .collect();
                            plot_ui.line(Line::new(table.name.clone(), points));
                        }
                    });
            });
        });
    }
}
