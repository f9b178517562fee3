use eframe::egui;

use crate::state::AppState;

pub fn show_preview(ui: &mut egui::Ui, state: &AppState) {
    ui.label("First page preview:");
    ui.add_space(5.0);

    let Some(path) = state.files.selected_path() else {
        ui.weak("Select a file to preview first page");
        return;
    };

    match state.files.thumbnail(path) {
        Some(texture) => {
            ui.image((texture.id(), texture.size_vec2()));
        }
        None if state.preview_failed(path) => {
            ui.weak("No preview");
        }
        None => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating preview...");
            });
        }
    }
}
