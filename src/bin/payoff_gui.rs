//! Option Payoff GUI
//!
//! Three price fields, an "Update Plot" button and a chart comparing the
//! call option's gain with owning the stock.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use option_payoff::plot::{X_AXIS_LABEL, Y_AXIS_LABEL};
use option_payoff::prelude::*;

struct PayoffApp {
    config: PlotConfig,

    // Input fields
    inputs: RawInputs,

    // Displayed chart and status line
    state: PlotState,
}

impl PayoffApp {
    fn new(config: PlotConfig) -> Self {
        let inputs = config.default_raw_inputs();
        let mut state = PlotState::new();
        state.apply(refresh_with_config(&inputs, &config));

        Self {
            config,
            inputs,
            state,
        }
    }

    fn update_plot(&mut self) {
        let result = refresh_with_config(&self.inputs, &self.config);
        if self.state.apply(result) {
            tracing::info!(
                "Plot updated: strike={}, contract={}, current={}",
                self.inputs.strike_price.trim(),
                self.inputs.contract_price.trim(),
                self.inputs.current_price.trim()
            );
        }
    }

    fn draw_chart(&self, ui: &mut egui::Ui) {
        let Some(chart) = self.state.chart() else {
            ui.label("Click 'Update Plot' to draw the payoff chart");
            return;
        };

        ui.heading(chart.title());

        Plot::new("payoff_chart")
            .view_aspect(1.5)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                // Zero reference lines (unnamed, kept out of the legend)
                for line in chart.reference_lines() {
                    match line {
                        ReferenceLine::Horizontal(y) => plot_ui.hline(
                            HLine::new(y)
                                .color(egui::Color32::GRAY)
                                .width(1.0)
                                .style(LineStyle::Dashed { length: 5.0 }),
                        ),
                        ReferenceLine::Vertical(x) => plot_ui.vline(
                            VLine::new(x)
                                .color(egui::Color32::GRAY)
                                .width(1.0)
                                .style(LineStyle::Dashed { length: 5.0 }),
                        ),
                    }
                }

                let colors = [egui::Color32::LIGHT_BLUE, egui::Color32::from_rgb(255, 150, 100)];
                for ((name, points), color) in chart.series().into_iter().zip(colors) {
                    plot_ui.line(
                        Line::new(PlotPoints::new(points))
                            .name(name)
                            .color(color)
                            .width(2.0),
                    );
                }
            });
    }
}

impl eframe::App for PayoffApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_chart(ui);

            ui.separator();

            egui::Grid::new("inputs_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("strike_price:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.inputs.strike_price)
                            .desired_width(80.0),
                    );
                    ui.end_row();

                    ui.label("contract_price:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.inputs.contract_price)
                            .desired_width(80.0),
                    );
                    ui.end_row();

                    ui.label("current_price:");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.inputs.current_price)
                            .desired_width(80.0),
                    );
                    ui.end_row();
                });

            if !self.state.status().is_empty() {
                ui.label(self.state.status());
            }

            ui.horizontal(|ui| {
                if ui.button("Exit").clicked() {
                    tracing::info!("Exit requested");
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui.button("Update Plot").clicked() {
                    self.update_plot();
                }
            });
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = PlotConfig::default();
    tracing::info!("Starting Option Gain Analyser");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title("Option Gain Analyser"),
        ..Default::default()
    };

    eframe::run_native(
        "Option Gain Analyser",
        options,
        Box::new(|_cc| Box::new(PayoffApp::new(config))),
    )
}
