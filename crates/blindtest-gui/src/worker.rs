use std::path::{Path, PathBuf};
use std::sync::mpsc;

use anyhow::{Context, Result};
use blindtest_core::config::SurveyConfig;
use tracing::{info, warn};

use crate::convert::to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("blindtest-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImages { generation, paths } => {
                handle_load_images(generation, &paths, &tx, &ctx);
            }
            WorkerCommand::LoadConfig { path } => match load_config(&path) {
                Ok(config) => send(&tx, &ctx, WorkerResult::ConfigLoaded { path, config }),
                Err(e) => send_error(&tx, &ctx, format!("{e:#}")),
            },
        }
    }
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, message: String) {
    warn!("{message}");
    send(tx, ctx, WorkerResult::Error { message });
}

fn handle_load_images(
    generation: u64,
    paths: &[PathBuf],
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    for (slot, path) in paths.iter().enumerate() {
        match image::open(path) {
            Ok(img) => {
                let natural = [img.width(), img.height()];
                info!(slot, path = %path.display(), width = natural[0], height = natural[1], "image decoded");
                send(tx, ctx, WorkerResult::ImageLoaded {
                    generation,
                    slot,
                    image: to_color_image(&img),
                    natural,
                });
            }
            Err(e) => send_error(tx, ctx, format!("Failed to load {}: {e}", path.display())),
        }
    }
}

/// Read a config and resolve its relative image paths against the config's
/// own directory.
fn load_config(path: &Path) -> Result<SurveyConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let mut config: SurveyConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config {}", path.display()))?;

    if let Some(dir) = path.parent() {
        for image in &mut config.images {
            if image.is_relative() {
                *image = dir.join(&*image);
            }
        }
    }
    Ok(config)
}
