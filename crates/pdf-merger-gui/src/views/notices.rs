use eframe::egui;

use crate::state::{AppState, NoticeKind};

/// Modal-style window for the oldest unacknowledged notice
pub fn show_notices(ctx: &egui::Context, state: &mut AppState) {
    let Some(notice) = state.notices.front() else {
        return;
    };

    let icon = match notice.kind {
        NoticeKind::Info => "ℹ",
        NoticeKind::Warning => "⚠",
        NoticeKind::Error => "❌",
    };

    let mut acknowledged = false;
    egui::Window::new(&notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(icon);
                ui.label(&notice.message);
            });
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() {
                    acknowledged = true;
                }
            });
        });

    if acknowledged {
        state.notices.pop_front();
    }
}
