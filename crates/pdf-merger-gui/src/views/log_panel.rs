use eframe::egui;
use log::Level;

use crate::logger::AppLogger;

pub fn show_log_panel(ui: &mut egui::Ui, logger: &AppLogger) {
    egui::CollapsingHeader::new("Log")
        .default_open(false)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                if ui.small_button("Clear").clicked() {
                    logger.clear();
                }
            });

            egui::ScrollArea::vertical()
                .max_height(140.0)
                .auto_shrink([false, true])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for entry in logger.entries() {
                        let color = match entry.level {
                            Level::Error => ui.visuals().error_fg_color,
                            Level::Warn => ui.visuals().warn_fg_color,
                            _ => ui.visuals().text_color(),
                        };
                        ui.label(
                            egui::RichText::new(entry.format_line())
                                .monospace()
                                .color(color),
                        )
                        .on_hover_text(&entry.target);
                    }
                });
        });
}
