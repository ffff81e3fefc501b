use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::compose::ZOrderScheme;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – plot settings and curve list
// ---------------------------------------------------------------------------

/// Render the left settings panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Plot");
    ui.separator();

    ui.checkbox(&mut state.config.show_legend, "Legend");
    ui.checkbox(&mut state.config.fill_regions, "Fill regions");
    ui.checkbox(&mut state.config.reverse_order, "Reverse draw order");

    let mut full_range = state.config.full_range;
    if ui.checkbox(&mut full_range, "Full mass range").changed() {
        let result = state.set_full_range(full_range);
        state.report(result);
    }

    ui.strong("z-order");
    egui::ComboBox::from_id_salt("z_scheme")
        .selected_text(scheme_label(state.config.z_scheme))
        .show_ui(ui, |ui: &mut Ui| {
            for scheme in [ZOrderScheme::Stacked, ZOrderScheme::Sequential] {
                ui.selectable_value(&mut state.config.z_scheme, scheme, scheme_label(scheme));
            }
        });
    ui.separator();

    let Some(set) = &state.layers else {
        ui.label("No curves loaded.");
        return;
    };

    ui.strong("Curves (back to front)");
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for layer in &set.layers {
                ui.label(RichText::new(format!("■ {}", layer.label)).color(layer.color));
            }
        });
}

fn scheme_label(scheme: ZOrderScheme) -> &'static str {
    match scheme {
        ZOrderScheme::Stacked => "2·base + 3 + i",
        ZOrderScheme::Sequential => "base + 1 + i",
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                let result = state.reload();
                state.report(result);
                ui.close_menu();
            }
            if ui.button("Save figures").clicked() {
                let result = state.save_figures();
                state.report(result);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(set) = &state.layers {
            ui.label(format!(
                "{} curves from {}",
                set.len(),
                state.config.data_dir.display()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if state.is_error() {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open exclusion data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        let result = state.set_data_dir(dir);
        state.report(result);
    }
}
