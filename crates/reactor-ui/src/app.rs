// crates/reactor-ui/src/app.rs
use eframe::egui;
use reactor_core::{ControllerCommand, PreviewController};
use reactor_media::FfmpegDecoder;

use crate::config::LauncherConfig;
use crate::context::AppContext;
use crate::panels::{job::JobPanel, options::OptionsPanel, preview::PreviewPanel, Panel, PanelView};
use crate::reactor_log;
use crate::theme::{self, configure_style};

pub struct ReactorApp {
    controller:   PreviewController<FfmpegDecoder>,
    context:      AppContext,
    preview:      PreviewPanel,
    options:      OptionsPanel,
    job:          JobPanel,
    /// Window size the current layout was computed for.
    last_size:    Option<egui::Vec2>,
    /// Commands emitted by panels each frame, processed after the UI pass
    pending_cmds: Vec<ControllerCommand>,
}

impl ReactorApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        Self {
            controller:   PreviewController::new(FfmpegDecoder),
            context:      AppContext::new(&LauncherConfig::from_env()),
            preview:      PreviewPanel,
            options:      OptionsPanel,
            job:          JobPanel,
            last_size:    None,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, ctx: &egui::Context, cmd: ControllerCommand) {
        match self.controller.dispatch(cmd) {
            Ok(effects) => self.context.apply_effects(ctx, effects),
            Err(e) => {
                reactor_log!("[app] rejected: {e}");
                self.context.last_error = Some(e.to_string());
            }
        }
    }

    fn drain(&mut self, ctx: &egui::Context) {
        for cmd in std::mem::take(&mut self.pending_cmds) {
            self.process_command(ctx, cmd);
        }
    }
}

impl eframe::App for ReactorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Resize and job progress land before drawing so this frame's layout
        // and progress bar are current.
        let size = ctx.input(|i| i.screen_rect().size());
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            self.pending_cmds.push(ControllerCommand::Resize { width: size.x, height: size.y });
        }
        let events = self.context.ingest_job_events();
        self.pending_cmds.extend(events);
        self.drain(ctx);

        let mut cmds = Vec::new();
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(theme::BG))
            .show(ctx, |ui| {
                let view = PanelView {
                    config:   self.controller.config(),
                    layout:   self.controller.layout(),
                    job:      self.controller.job_status(),
                    textures: &self.context.textures,
                    error:    self.context.last_error.as_deref(),
                    origin:   ui.max_rect().min,
                };
                let panels: [&mut dyn Panel; 3] = [&mut self.preview, &mut self.options, &mut self.job];
                for panel in panels {
                    // Each panel gets its own id scope so hit-test ids never collide.
                    let id = panel.name().to_owned();
                    ui.push_id(id, |ui| panel.ui(ui, &view, &mut cmds));
                }
            });

        self.pending_cmds = cmds;
        self.drain(ctx);

        // The launcher thread cannot wake egui; poll while a job is in flight.
        if matches!(self.controller.job_status(), reactor_core::state::JobStatus::Running { .. }) {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let cache = self.controller.cache();
        reactor_log!("[app] exit, {} cached target frame(s), {} KiB", cache.len(), cache.byte_size() / 1024);
        self.context.launcher.shutdown();
    }
}
