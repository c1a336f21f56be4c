// crates/reactor-ui/src/theme.rs
use egui::{Context, Color32, Stroke, Visuals, Style};

// ── Palette ──────────────────────────────────────────────────────────────────
pub const BG:           Color32 = Color32::from_rgb(  0,  25,  25);
pub const ACCENT:       Color32 = Color32::from_rgb(  0, 173, 124);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(  0, 131,  92);
pub const TEXT:         Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_HOVER:   Color32 = Color32::from_rgb(102, 255, 174);
pub const BUTTON_TEXT:  Color32 = Color32::BLACK;
pub const PREVIEW_BG:   Color32 = Color32::from_rgb(  0,  40,  40);

/// Tk-style point sizes to egui pixels at 96 dpi.
pub fn pt_to_px(pt: f32) -> f32 {
    pt * 96.0 / 72.0
}

pub fn configure_style(ctx: &Context) {
    let mut style = Style::default();

    style.spacing.item_spacing   = egui::vec2(4.0, 4.0);
    style.spacing.button_padding = egui::vec2(6.0, 3.0);

    let mut v = Visuals::dark();
    v.panel_fill       = BG;
    v.window_fill      = BG;
    v.extreme_bg_color = PREVIEW_BG;
    v.override_text_color = Some(TEXT);

    v.selection.bg_fill = ACCENT;
    v.selection.stroke  = Stroke::new(1.0, BUTTON_TEXT);

    v.widgets.inactive.bg_fill      = ACCENT;
    v.widgets.inactive.weak_bg_fill = ACCENT;
    v.widgets.inactive.fg_stroke    = Stroke::new(1.0, TEXT);

    v.widgets.hovered.bg_fill      = ACCENT_HOVER;
    v.widgets.hovered.weak_bg_fill = ACCENT_HOVER;
    v.widgets.hovered.fg_stroke    = Stroke::new(1.5, TEXT_HOVER);

    v.widgets.active.bg_fill      = ACCENT_HOVER;
    v.widgets.active.weak_bg_fill = ACCENT_HOVER;
    v.widgets.active.fg_stroke    = Stroke::new(1.5, TEXT_HOVER);

    style.visuals = v;
    ctx.set_style(style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_convert_at_96_dpi() {
        assert_eq!(pt_to_px(6.0), 8.0);
        assert_eq!(pt_to_px(0.0), 0.0);
    }
}
