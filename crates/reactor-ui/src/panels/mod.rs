// crates/reactor-ui/src/panels/mod.rs
//
// Panel registry. Every panel places its widgets at the rects in the current
// Layout, reads state through PanelView and emits ControllerCommands. Panels
// never touch the controller directly.

pub mod job;
pub mod options;
pub mod preview;

use egui::{Pos2, Rect, Ui};

use reactor_core::helpers::layout::{Layout, PixelRect};
use reactor_core::state::{JobConfig, JobStatus};
use reactor_core::ControllerCommand;

use crate::context::PreviewTextures;

/// Everything a panel may read in one frame.
pub struct PanelView<'a> {
    pub config:   &'a JobConfig,
    pub layout:   &'a Layout,
    pub job:      &'a JobStatus,
    pub textures: &'a PreviewTextures,
    /// Last rejected command, shown in the status label until the next launch.
    pub error:    Option<&'a str>,
    /// Top-left of the central panel in screen space.
    pub origin:   Pos2,
}

impl PanelView<'_> {
    /// Layout rect → egui screen rect.
    pub fn rect(&self, r: PixelRect) -> Rect {
        to_rect(self.origin, r)
    }
}

pub fn to_rect(origin: Pos2, r: PixelRect) -> Rect {
    Rect::from_min_size(
        origin + egui::vec2(r.x as f32, r.y as f32),
        egui::vec2(r.w as f32, r.h as f32),
    )
}

pub trait Panel {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, view: &PanelView<'_>, cmd: &mut Vec<ControllerCommand>);
}
