// crates/reactor-ui/src/panels/job.rs
//
// Start / Preview buttons, progress bar and status label.

use egui::{RichText, Ui};

use reactor_core::ControllerCommand;

use super::preview::select_button;
use super::{Panel, PanelView};
use crate::theme::{self, pt_to_px};

pub struct JobPanel;

impl Panel for JobPanel {
    fn name(&self) -> &str { "Job" }

    fn ui(&mut self, ui: &mut Ui, view: &PanelView<'_>, cmd: &mut Vec<ControllerCommand>) {
        let layout = view.layout;
        let font   = pt_to_px(layout.fonts.button);

        if select_button(ui, view.rect(layout.start), "Start", font, layout.button_radius) {
            cmd.push(ControllerCommand::Launch);
        }
        if select_button(ui, view.rect(layout.preview), "Preview", font, layout.button_radius) {
            cmd.push(ControllerCommand::Preview);
        }

        let percent = view.job.percent() as f32 / 100.0;
        let bar = egui::ProgressBar::new(percent)
            .fill(theme::ACCENT)
            .text(RichText::new(format!("{}%", view.job.percent())).size(pt_to_px(layout.fonts.progress)));
        ui.put(view.rect(layout.progress_bar), bar);

        let status = status_text(view.error, &view.job.label());
        ui.put(
            view.rect(layout.status_label),
            egui::Label::new(RichText::new(status).size(pt_to_px(layout.fonts.label))).truncate(),
        );
    }
}

/// A rejected command wins over the job label until it is cleared.
pub fn status_text(error: Option<&str>, job_label: &str) -> String {
    match error {
        Some(e) => e.to_string(),
        None    => job_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_overrides_job_label() {
        assert_eq!(status_text(Some("cannot launch: no target selected"), "Done"),
            "cannot launch: no target selected");
        assert_eq!(status_text(None, "Processing..."), "Processing...");
    }
}
