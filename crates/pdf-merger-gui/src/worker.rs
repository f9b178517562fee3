use eframe::egui;
use pdf_merge::ThumbnailSpec;
use pdf_merge_runtime::{CommandReceiver, MergeCommand, MergeUpdate};
use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::handlers;

/// Worker-side end of the update channel. Every send wakes the UI so the
/// frame loop drains the update without waiting for input.
#[derive(Clone)]
pub struct UpdateSender {
    tx: mpsc::UnboundedSender<MergeUpdate>,
    ctx: egui::Context,
}

impl UpdateSender {
    pub fn new(tx: mpsc::UnboundedSender<MergeUpdate>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    pub fn send(&self, update: MergeUpdate) {
        if self.tx.send(update).is_err() {
            log::debug!("UI has shut down, dropping update");
            return;
        }
        self.ctx.request_repaint();
    }
}

/// Async worker task that processes merge commands and sends updates
pub async fn worker_task(
    mut command_rx: CommandReceiver,
    updates: UpdateSender,
    thumbnail_spec: ThumbnailSpec,
) {
    let mut backlog = VecDeque::new();

    loop {
        let cmd = match backlog.pop_front() {
            Some(cmd) => cmd,
            None => match command_rx.recv().await {
                Some(cmd) => cmd,
                None => break,
            },
        };

        process_command(
            cmd,
            &mut command_rx,
            &mut backlog,
            &updates,
            thumbnail_spec,
        )
        .await;
    }

    log::debug!("Command channel closed, worker exiting");
}

async fn process_command(
    cmd: MergeCommand,
    command_rx: &mut CommandReceiver,
    backlog: &mut VecDeque<MergeCommand>,
    updates: &UpdateSender,
    thumbnail_spec: ThumbnailSpec,
) {
    match cmd {
        MergeCommand::Inspect { paths, session } => {
            handlers::files::handle_inspect(paths, session, updates).await;
        }
        MergeCommand::CountPages { mut paths } => {
            // Only the newest recount matters; anything else waits its turn
            while let Ok(next_cmd) = command_rx.try_recv() {
                if let MergeCommand::CountPages { paths: newer } = next_cmd {
                    log::debug!("Discarding queued page recount, using newer request");
                    paths = newer;
                } else {
                    backlog.push_back(next_cmd);
                }
            }
            handlers::files::handle_count_pages(paths, updates).await;
        }
        MergeCommand::GenerateThumbnail { path } => {
            tokio::spawn(handlers::thumbnail::handle_generate(
                path,
                thumbnail_spec,
                updates.clone(),
            ));
        }
        MergeCommand::Merge { inputs, output } => {
            tokio::spawn(handlers::merge::handle_merge(inputs, output, updates.clone()));
        }
    }
}
