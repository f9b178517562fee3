use pdf_merge::{DEFAULT_OUTPUT_NAME, ThumbnailSpec};

/// Built-in application settings. Nothing here is read from disk or the
/// environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: &'static str,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub default_output_name: &'static str,
    pub thumbnail: ThumbnailSpec,
    pub preview_panel_width: f32,
    /// Number of log lines kept for the in-app log panel
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "PDF Merger Offline",
            window_size: [900.0, 600.0],
            min_window_size: [640.0, 420.0],
            default_output_name: DEFAULT_OUTPUT_NAME,
            thumbnail: ThumbnailSpec::default(),
            preview_panel_width: 180.0,
            log_capacity: 500,
        }
    }
}
