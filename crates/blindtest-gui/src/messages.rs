use std::path::PathBuf;

use blindtest_core::config::SurveyConfig;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode one image per slot. `generation` tags the results so images
    /// from a superseded config can be dropped.
    LoadImages { generation: u64, paths: Vec<PathBuf> },

    /// Read and validate a survey config from disk.
    LoadConfig { path: PathBuf },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ImageLoaded {
        generation: u64,
        slot: usize,
        image: egui::ColorImage,
        /// Size of the file on disk; the texture may be downscaled.
        natural: [u32; 2],
    },
    ConfigLoaded {
        path: PathBuf,
        config: SurveyConfig,
    },
    Error {
        message: String,
    },
}
