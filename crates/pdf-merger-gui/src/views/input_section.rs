use eframe::egui;
use pdf_merge::drop::filter_pdfs;
use pdf_merge_runtime::CommandSender;

use crate::state::AppState;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, command_tx: &CommandSender) {
    let frame = if state.hovering_files {
        egui::Frame::group(ui.style()).fill(ui.visuals().selection.bg_fill)
    } else {
        egui::Frame::group(ui.style())
    };

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            if ui
                .add_enabled(!state.merging, egui::Button::new("📂 Select PDF Files"))
                .clicked()
            {
                if let Some(paths) = rfd::FileDialog::new()
                    .set_title("Select PDF files")
                    .add_filter("PDF files", &["pdf"])
                    .pick_files()
                {
                    state.request_add(filter_pdfs(paths), command_tx);
                }
            }
            ui.label("or Drag & Drop files here");
            ui.add_space(8.0);
        });
    });
}
