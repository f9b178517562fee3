use eframe::egui;
use pdf_merge::{Direction, rebuild_rows};
use pdf_merge_runtime::CommandSender;

use crate::state::AppState;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, command_tx: &CommandSender) {
    let rows = rebuild_rows(&state.files);
    let selected = state.files.selected();
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .max_height(260.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("staged_files")
                .num_columns(3)
                .striped(true)
                .min_col_width(40.0)
                .show(ui, |ui| {
                    ui.strong("Order");
                    ui.strong("File Name");
                    ui.strong("Pages");
                    ui.end_row();

                    for (index, row) in rows.iter().enumerate() {
                        ui.label(row.position.to_string());
                        let name = ui
                            .selectable_label(selected == Some(index), &row.name)
                            .on_hover_text(row.path.display().to_string());
                        if name.clicked() {
                            clicked = Some(index);
                        }
                        ui.label(row.pages.to_string());
                        ui.end_row();
                    }
                });

            if rows.is_empty() {
                ui.weak("No files added yet");
            }
        });

    if let Some(index) = clicked {
        state.select(index, command_tx);
    }

    ui.add_space(5.0);

    let can_edit = !state.merging && state.files.selected().is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(can_edit, egui::Button::new("⬆ Move Up"))
            .clicked()
        {
            state.move_selected(Direction::Up, command_tx);
        }
        if ui
            .add_enabled(can_edit, egui::Button::new("⬇ Move Down"))
            .clicked()
        {
            state.move_selected(Direction::Down, command_tx);
        }
        if ui
            .add_enabled(can_edit, egui::Button::new("🗑 Remove Selected"))
            .clicked()
        {
            state.remove_selected(command_tx);
        }
    });
}
