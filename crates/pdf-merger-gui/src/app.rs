use eframe::egui;
use pdf_merge::drop::{PathListStyle, filter_pdfs, parse_path_list};
use pdf_merge_runtime::{
    CommandSender, MergeUpdate, UpdateReceiver, command_channel, update_channel,
};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::logger::AppLogger;
use crate::shell::{ShellLauncher, platform_launcher};
use crate::state::{AppState, ProgressState};
use crate::views::{show_log_panel, show_merger, show_notices, show_preview};
use crate::worker::UpdateSender;

pub struct PdfMergerApp {
    state: AppState,
    config: AppConfig,

    // Async infrastructure
    command_tx: CommandSender,
    update_rx: UpdateReceiver,

    logger: AppLogger,
    shell: Box<dyn ShellLauncher>,

    // Keeps the runtime the worker lives on reachable for the app's lifetime
    _tokio_handle: tokio::runtime::Handle,
}

impl PdfMergerApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tokio_handle: tokio::runtime::Handle,
        logger: AppLogger,
        config: AppConfig,
    ) -> Self {
        let (command_tx, command_rx) = command_channel();
        let (update_tx, update_rx) = update_channel();

        // Spawn worker task
        tokio_handle.spawn(crate::worker::worker_task(
            command_rx,
            UpdateSender::new(update_tx, cc.egui_ctx.clone()),
            config.thumbnail,
        ));

        let shell = platform_launcher();
        log::debug!("Using {} to open files", shell.name());

        Self {
            state: AppState::new(config.default_output_name),
            config,
            command_tx,
            update_rx,
            logger,
            shell,
            _tokio_handle: tokio_handle,
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (dropped, hovering, pasted) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect();
            let pasted: Vec<String> = i
                .events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Paste(text) => Some(text.clone()),
                    _ => None,
                })
                .collect();
            (dropped, !i.raw.hovered_files.is_empty(), pasted)
        });

        self.state.hovering_files = hovering;

        if !dropped.is_empty() {
            self.add_candidates(dropped);
        }

        // Pasted text belongs to the focused text field, if any
        if !ctx.wants_keyboard_input() {
            for text in pasted {
                let paths = parse_path_list(&text, PathListStyle::native());
                self.add_candidates(paths);
            }
        }
    }

    fn add_candidates(&mut self, paths: Vec<PathBuf>) {
        if self.state.merging {
            log::info!("Ignoring {} file(s) while a merge is running", paths.len());
            return;
        }

        let candidates = paths.len();
        let pdfs = filter_pdfs(paths);
        if pdfs.len() < candidates {
            log::info!("Skipped {} non-PDF file(s)", candidates - pdfs.len());
        }
        if !pdfs.is_empty() {
            self.state.request_add(pdfs, &self.command_tx);
        }
    }

    fn drain_updates(&mut self, ctx: &egui::Context) {
        // Process all pending updates from worker
        while let Ok(update) = self.update_rx.try_recv() {
            match update {
                MergeUpdate::Progress {
                    operation,
                    current,
                    total,
                } => {
                    self.state.apply_progress(ProgressState {
                        operation,
                        current,
                        total,
                    });
                }
                MergeUpdate::Inspected {
                    inspections,
                    session,
                } => {
                    self.state
                        .apply_inspections(inspections, session, &self.command_tx);
                }
                MergeUpdate::PageCounts { counts } => {
                    self.state.files.apply_page_counts(counts);
                }
                MergeUpdate::ThumbnailReady { path, thumbnail } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [thumbnail.width, thumbnail.height],
                        &thumbnail.rgba,
                    );
                    let texture = ctx.load_texture(
                        format!("thumbnail:{}", path.display()),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.state.store_thumbnail(path, texture);
                }
                MergeUpdate::ThumbnailFailed { path } => {
                    self.state.mark_preview_failed(path);
                }
                MergeUpdate::MergeComplete { summary } => {
                    self.state.apply_merge_complete(summary);
                }
                MergeUpdate::MergeFailed { message } => {
                    self.state.apply_merge_failed(message);
                }
            }
        }
    }
}

impl eframe::App for PdfMergerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.drain_updates(ctx);

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(ref progress) = self.state.progress {
                ui.add(
                    egui::ProgressBar::new(progress.current as f32 / progress.total.max(1) as f32)
                        .text(&progress.operation)
                        .show_percentage(),
                );
            }
            ui.label(&self.state.status);
            show_log_panel(ui, &self.logger);
            ui.add_space(4.0);
        });

        egui::SidePanel::right("preview")
            .resizable(false)
            .exact_width(self.config.preview_panel_width)
            .show(ctx, |ui| {
                show_preview(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_merger(ui, &mut self.state, &self.command_tx, self.shell.as_ref());
            });
        });

        show_notices(ctx, &mut self.state);

        if self.state.merging {
            ctx.set_cursor_icon(egui::CursorIcon::Progress);
        }
    }
}
