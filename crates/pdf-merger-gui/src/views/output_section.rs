use eframe::egui;
use pdf_merge::DEFAULT_EXTENSION;
use pdf_merge_runtime::CommandSender;

use crate::state::AppState;

pub fn show(ui: &mut egui::Ui, state: &mut AppState, command_tx: &CommandSender) {
    ui.horizontal(|ui| {
        ui.label("Output File:");
        ui.add_enabled(
            !state.merging,
            egui::TextEdit::singleline(&mut state.output_path).desired_width(320.0),
        );
        if ui
            .add_enabled(!state.merging, egui::Button::new("Browse..."))
            .clicked()
        {
            browse_output(state);
        }
    });

    ui.add_space(10.0);

    let label = if state.merging {
        "Merging..."
    } else {
        "Merge PDF"
    };
    let button = egui::Button::new(egui::RichText::new(label).heading());
    if ui.add_enabled(!state.merging, button).clicked() {
        state.request_merge(command_tx);
    }
}

fn browse_output(state: &mut AppState) {
    if let Some(mut path) = rfd::FileDialog::new()
        .set_title("Save merged PDF as")
        .add_filter("PDF files", &["pdf"])
        .set_file_name(&state.output_path)
        .save_file()
    {
        if path.extension().is_none() {
            path.set_extension(DEFAULT_EXTENSION);
        }
        state.output_path = path.display().to_string();
    }
}
