//! Handing files and folders to the desktop's default application.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Opens a path with whatever the platform considers its default handler
pub trait ShellLauncher {
    fn name(&self) -> &'static str;

    /// The command that opens `target`
    fn command(&self, target: &Path) -> Command;

    fn open(&self, target: &Path) -> io::Result<()> {
        let mut child = self.command(target).spawn()?;
        log::info!("Opening {} via {}", target.display(), self.name());
        // Reap the launcher without holding up the UI
        std::thread::spawn(move || {
            if let Err(e) = child.wait() {
                log::warn!("Shell launcher did not exit cleanly: {e}");
            }
        });
        Ok(())
    }
}

pub struct WindowsShell;

impl ShellLauncher for WindowsShell {
    fn name(&self) -> &'static str {
        "explorer"
    }

    /// The path reaches the default handler as one argument, never via `cmd`
    fn command(&self, target: &Path) -> Command {
        let mut command = Command::new("explorer");
        command.arg(target);
        command
    }
}

pub struct MacShell;

impl ShellLauncher for MacShell {
    fn name(&self) -> &'static str {
        "open"
    }

    fn command(&self, target: &Path) -> Command {
        let mut command = Command::new("open");
        command.arg(target);
        command
    }
}

pub struct XdgShell;

impl ShellLauncher for XdgShell {
    fn name(&self) -> &'static str {
        "xdg-open"
    }

    fn command(&self, target: &Path) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(target);
        command
    }
}

/// The launcher for the platform this binary was built for
pub fn platform_launcher() -> Box<dyn ShellLauncher> {
    if cfg!(target_os = "windows") {
        Box::new(WindowsShell)
    } else if cfg!(target_os = "macos") {
        Box::new(MacShell)
    } else {
        Box::new(XdgShell)
    }
}

/// Directory holding `file`; a bare file name resolves to the working directory
pub fn containing_folder(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_owned(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
