// crates/reactor-ui/src/panels/preview.rs
//
// Face and target previews plus their select buttons. Left click on a preview
// moves forward through the ring, right click moves back.

use egui::{Color32, Rect, RichText, Sense, Ui};

use reactor_core::{ControllerCommand, Direction, SelectionRing};

use super::{Panel, PanelView};
use crate::context::PreviewSlot;
use crate::dialog;
use crate::helpers::format::{fit_label, preview_caption};
use crate::theme::{self, pt_to_px};

pub struct PreviewPanel;

impl Panel for PreviewPanel {
    fn name(&self) -> &str { "Preview" }

    fn ui(&mut self, ui: &mut Ui, view: &PanelView<'_>, cmd: &mut Vec<ControllerCommand>) {
        let layout = view.layout;
        let font   = pt_to_px(layout.fonts.button);

        if select_button(ui, view.rect(layout.select_face), "Select face", font, layout.button_radius) {
            cmd.push(ControllerCommand::SelectFace(dialog::pick_faces()));
        }
        if select_button(ui, view.rect(layout.select_target), "Select target", font, layout.button_radius) {
            cmd.push(ControllerCommand::SelectTarget(dialog::pick_targets()));
        }

        if let Some(dir) = preview_box(ui, view.rect(layout.face_image), "face_preview",
            view.textures.face.as_ref(), &view.config.face_paths, pt_to_px(layout.fonts.label))
        {
            cmd.push(ControllerCommand::NavigateFace(dir));
        }
        if let Some(dir) = preview_box(ui, view.rect(layout.target_image), "target_preview",
            view.textures.target.as_ref(), &view.config.target_paths, pt_to_px(layout.fonts.label))
        {
            cmd.push(ControllerCommand::NavigateTarget(dir));
        }
    }
}

pub(super) fn select_button(ui: &mut Ui, rect: Rect, label: &str, font: f32, radius: i32) -> bool {
    let button = egui::Button::new(RichText::new(label).size(font).color(theme::BUTTON_TEXT))
        .fill(theme::ACCENT)
        .corner_radius(radius.clamp(0, u8::MAX as i32) as u8);
    ui.put(rect, button).clicked()
}

/// Draws one preview and returns the navigation the user asked for, if any.
fn preview_box(
    ui:    &mut Ui,
    rect:  Rect,
    id:    &str,
    slot:  Option<&PreviewSlot>,
    ring:  &SelectionRing,
    font:  f32,
) -> Option<Direction> {
    let response = ui.interact(rect, ui.id().with(id), Sense::click());
    let painter  = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme::PREVIEW_BG);

    match slot {
        Some(PreviewSlot { texture: Some(tex), .. }) => {
            let fitted = fit_inside(rect, tex.size_vec2());
            painter.image(
                tex.id(),
                fitted,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        Some(PreviewSlot { texture: None, .. }) => {
            painter.text(rect.center(), egui::Align2::CENTER_CENTER, "no preview",
                egui::FontId::proportional(font), theme::TEXT_HOVER);
        }
        None => {}
    }

    if let Some(slot) = slot {
        let caption = fit_label(&preview_caption(&slot.path, ring.len()), rect.width(), font * 0.55);
        painter.text(rect.left_bottom() + egui::vec2(2.0, -2.0), egui::Align2::LEFT_BOTTOM,
            caption, egui::FontId::proportional(font), theme::TEXT);
    }

    if ring.is_empty() {
        return None;
    }
    if response.clicked() {
        Some(Direction::Forward)
    } else if response.secondary_clicked() {
        Some(Direction::Backward)
    } else {
        None
    }
}

/// Largest rect with `size`'s aspect ratio centred inside `outer`.
pub fn fit_inside(outer: Rect, size: egui::Vec2) -> Rect {
    if size.x <= 0.0 || size.y <= 0.0 {
        return outer;
    }
    let scale = (outer.width() / size.x).min(outer.height() / size.y);
    Rect::from_center_size(outer.center(), size * scale)
}
