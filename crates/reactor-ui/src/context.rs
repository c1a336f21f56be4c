// crates/reactor-ui/src/context.rs
//
// AppContext owns the runtime handles that are not controller state: the job
// launcher, the GPU textures for the two previews, and the last rejected
// command. ReactorApp holds one of these plus the controller and the panels.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui;
use reactor_core::{ControllerCommand, Effect, JobLauncher, PreviewImage};
use reactor_media::ProcessLauncher;

use crate::config::LauncherConfig;
use crate::reactor_log;

/// What is on screen in one preview box.
pub struct PreviewSlot {
    pub path:    PathBuf,
    /// `None` when the file could not be decoded.
    pub texture: Option<egui::TextureHandle>,
}

#[derive(Default)]
pub struct PreviewTextures {
    pub face:   Option<PreviewSlot>,
    pub target: Option<PreviewSlot>,
}

pub struct AppContext {
    pub launcher:   ProcessLauncher,
    pub textures:   PreviewTextures,
    pub last_error: Option<String>,
}

impl AppContext {
    pub fn new(config: &LauncherConfig) -> Self {
        reactor_log!("[app] processor {} {:?}", config.program.display(), config.args);
        Self {
            launcher:   ProcessLauncher::new(config.launch_spec()),
            textures:   PreviewTextures::default(),
            last_error: None,
        }
    }

    pub fn apply_effects(&mut self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                // A new selection answers whatever the last rejection asked for.
                Effect::ShowFace { path, image } => {
                    self.last_error = None;
                    self.textures.face = Some(upload(ctx, "face", path, image));
                }
                Effect::ShowTarget { path, image } => {
                    self.last_error = None;
                    self.textures.target = Some(upload(ctx, "target", path, image));
                }
                // Layout is read straight from the controller each frame.
                Effect::Relayout(_) => {}
                Effect::LaunchJob(snapshot) => {
                    self.last_error = None;
                    self.launcher.launch(snapshot);
                }
            }
        }
    }

    /// Drain launcher events into commands for the controller.
    pub fn ingest_job_events(&self) -> Vec<ControllerCommand> {
        self.launcher.poll_events()
            .into_iter()
            .map(ControllerCommand::Job)
            .collect()
    }
}

fn upload(ctx: &egui::Context, slot: &str, path: PathBuf, image: Option<Arc<PreviewImage>>) -> PreviewSlot {
    let texture = image.map(|img| {
        let color = egui::ColorImage::from_rgba_unmultiplied(
            [img.width as usize, img.height as usize],
            &img.data,
        );
        ctx.load_texture(format!("{slot}-preview"), color, egui::TextureOptions::LINEAR)
    });
    if texture.is_none() {
        reactor_log!("[app] no {slot} preview for {}", path.display());
    }
    PreviewSlot { path, texture }
}
