mod actions_section;
mod file_table;
mod input_section;
mod log_panel;
mod notices;
mod output_section;
mod preview;

pub use log_panel::show_log_panel;
pub use notices::show_notices;
pub use preview::show_preview;

use eframe::egui;
use pdf_merge_runtime::CommandSender;

use crate::shell::ShellLauncher;
use crate::state::AppState;

/// Main column: input, staged files, output and post-merge actions
pub fn show_merger(
    ui: &mut egui::Ui,
    state: &mut AppState,
    command_tx: &CommandSender,
    shell: &dyn ShellLauncher,
) {
    ui.heading("Merge PDF Files");
    ui.separator();

    input_section::show(ui, state, command_tx);
    ui.add_space(10.0);

    file_table::show(ui, state, command_tx);
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);

    output_section::show(ui, state, command_tx);

    if state.last_merge.is_some() {
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(10.0);
        actions_section::show(ui, state, shell);
    }
}
