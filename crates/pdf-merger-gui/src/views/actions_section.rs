use eframe::egui;
use std::path::Path;

use crate::shell::{ShellLauncher, containing_folder};
use crate::state::{AppState, Notice};

/// Post-merge actions, shown once a merge has succeeded
pub fn show(ui: &mut egui::Ui, state: &mut AppState, shell: &dyn ShellLauncher) {
    let Some(output) = state.last_merge.as_ref().map(|s| s.output.clone()) else {
        return;
    };

    ui.horizontal(|ui| {
        if ui.button("📄 Open PDF").clicked() {
            open_with(state, shell, &output);
        }
        if ui.button("📁 Open Folder").clicked() {
            open_with(state, shell, &containing_folder(&output));
        }
        if ui.button("🔄 Merge Again").clicked() {
            state.reset();
        }
    });
}

fn open_with(state: &mut AppState, shell: &dyn ShellLauncher, target: &Path) {
    if let Err(e) = shell.open(target) {
        log::error!(
            "{} could not open {}: {}",
            shell.name(),
            target.display(),
            e
        );
        state
            .notices
            .push_back(Notice::error(format!("Could not open {}:\n{e}", target.display())));
    }
}
