// crates/reactor-ui/src/panels/options.rs
//
// Operation radios and the three keep-* checkboxes.

use egui::{RichText, Ui};

use reactor_core::state::Operation;
use reactor_core::ControllerCommand;

use super::{Panel, PanelView};
use crate::theme::pt_to_px;

pub struct OptionsPanel;

impl Panel for OptionsPanel {
    fn name(&self) -> &str { "Options" }

    fn ui(&mut self, ui: &mut Ui, view: &PanelView<'_>, cmd: &mut Vec<ControllerCommand>) {
        let layout = view.layout;
        let config = view.config;

        ui.spacing_mut().icon_width = layout.radio_indicator as f32;
        let radio_font = pt_to_px(layout.fonts.radio);
        for (op, rect) in [
            (Operation::Both,        layout.radio_both),
            (Operation::SwapOnly,    layout.radio_swap),
            (Operation::EnhanceOnly, layout.radio_enhance),
        ] {
            let radio = egui::RadioButton::new(config.operation == op, RichText::new(op.label()).size(radio_font));
            if ui.put(view.rect(rect), radio).clicked() && config.operation != op {
                cmd.push(ControllerCommand::SetOperation(op));
            }
        }

        // Checkbox widgets want `&mut bool`; the controller owns the real
        // value, so toggle a copy and emit the command.
        ui.spacing_mut().icon_width = layout.check_indicator as f32;
        let check_font = pt_to_px(layout.fonts.checkbox);
        for (mut value, label, rect, toggle) in [
            (config.keep_fps,              "Keep FPS",    layout.keep_fps,    ControllerCommand::ToggleKeepFps),
            (config.keep_audio,            "Keep audio",  layout.keep_audio,  ControllerCommand::ToggleKeepAudio),
            (config.keep_extracted_frames, "Keep extracted frames", layout.keep_frames, ControllerCommand::ToggleKeepFrames),
        ] {
            let checkbox = egui::Checkbox::new(&mut value, RichText::new(label).size(check_font));
            if ui.put(view.rect(rect), checkbox).changed() {
                cmd.push(toggle);
            }
        }
    }
}
