use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

pub struct ExclusionPlotApp {
    pub state: AppState,
}

impl ExclusionPlotApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Ctrl/Cmd+S writes the figures, Ctrl/Cmd+R re-reads the data folder.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (save, reload) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.modifiers.command && i.key_pressed(egui::Key::R),
            )
        });
        if reload {
            let result = self.state.reload();
            self.state.report(result);
        }
        if save {
            let result = self.state.save_figures();
            self.state.report(result);
        }
    }
}

impl eframe::App for ExclusionPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        egui::SidePanel::left("plot_settings")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            plot::exclusion_plot(ui, &self.state);
        });
    }
}
