use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use blindtest_core::config::SurveyConfig;
use blindtest_core::consts::SLOT_COUNT;
use blindtest_core::survey::SurveyState;
use blindtest_core::viewport::TransformEngine;
use tracing::{info, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{CardLayout, ImagesState, SlotImage, UIState, WindowCapture};
use crate::worker;

pub struct BlindTestApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: SurveyConfig,
    pub survey: SurveyState,
    pub engine: TransformEngine<WindowCapture>,
    pub layout: CardLayout,
    pub images: ImagesState,
    pub ui_state: UIState,
}

impl BlindTestApp {
    pub fn new(ctx: &egui::Context) -> Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone())
            .context("Failed to spawn worker thread")?;

        let config = SurveyConfig::default();
        let survey = SurveyState::new(config.total_groups)?;
        let mut app = Self {
            cmd_tx,
            result_rx,
            config,
            survey,
            engine: TransformEngine::with_capture(WindowCapture::default()),
            layout: CardLayout::default(),
            images: ImagesState::default(),
            ui_state: UIState::default(),
        };
        app.reload_images();
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    generation,
                    slot,
                    image,
                    natural,
                } => {
                    if generation != self.images.generation {
                        continue;
                    }
                    let texture = ctx.load_texture(
                        format!("slot-{slot}"),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    let loaded = SlotImage { texture, natural };
                    self.layout.set_natural(slot, loaded.natural_size());
                    if let Some(entry) = self.images.slots.get_mut(slot) {
                        *entry = Some(loaded);
                    }
                }
                WorkerResult::ConfigLoaded { path, config } => {
                    match SurveyState::new(config.total_groups) {
                        Ok(survey) => {
                            self.ui_state
                                .add_log(format!("Loaded survey: {}", path.display()));
                            self.apply_config(config, survey, path);
                        }
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Replace the survey with `config`, dropping all answers and transforms.
    fn apply_config(&mut self, config: SurveyConfig, survey: SurveyState, path: PathBuf) {
        info!(title = %config.title, groups = config.total_groups, "survey config applied");
        self.survey = survey;
        self.config = config;
        self.ui_state.config_path = Some(path);
        self.close_modal();
        self.reload_images();
    }

    fn reload_images(&mut self) {
        let generation = self.images.clear();
        self.layout.clear_naturals();
        self.send_command(WorkerCommand::LoadImages {
            generation,
            paths: self.config.images.clone(),
        });
    }

    /// Leave whichever modal is open; every transform resets.
    pub fn close_modal(&mut self) {
        self.engine.close_modal();
        self.ui_state.pointer_inside = [false; SLOT_COUNT];
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Log an engine error instead of propagating it into the frame loop.
    pub fn report<T>(&mut self, result: blindtest_core::error::Result<T>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("{e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                None
            }
        }
    }
}

impl eframe::App for BlindTestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        let preset = self.engine.display().preset().size(&self.config.layout);
        self.layout.begin_frame(preset);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::survey::show(ctx, self);
        panels::modal::show(ctx, self);
        panels::viewport::drive_drag(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Blind Test")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Blind Test");
                        ui.label("Side-by-side photo comparison survey");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
