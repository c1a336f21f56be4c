// crates/reactor-core/src/helpers/layout.rs
//
// Concrete geometry of the main window.
//
// Each widget has a base rect in the 600×700 design space. Layout::compute
// scales every one of them through the same LayoutContext, so a resize is a
// single call that yields the whole table. The UI crate reads rects and font
// sizes from here and never does its own scaling.

use super::scale::LayoutContext;

/// Axis-aligned rectangle in logical pixels, top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Position and size each go through `scaled_size`, so every field is ≥ 1.
    pub fn scaled(&self, ctx: &LayoutContext) -> Self {
        Self {
            x: ctx.scaled_size(self.x),
            y: ctx.scaled_size(self.y),
            w: ctx.scaled_size(self.w),
            h: ctx.scaled_size(self.h),
        }
    }
}

// ── Design-space geometry ─────────────────────────────────────────────────────
const WINDOW:          PixelRect = PixelRect::new(0,   0,   600, 700);
const SELECT_FACE:     PixelRect = PixelRect::new(90,  280, 141, 41);
const SELECT_TARGET:   PixelRect = PixelRect::new(370, 280, 141, 41);
const START:           PixelRect = PixelRect::new(120, 490, 81,  31);
const PREVIEW:         PixelRect = PixelRect::new(400, 490, 81,  31);
const KEEP_FPS:        PixelRect = PixelRect::new(360, 380, 161, 16);
const KEEP_AUDIO:      PixelRect = PixelRect::new(360, 410, 161, 16);
const KEEP_FRAMES:     PixelRect = PixelRect::new(360, 440, 161, 16);
const RADIO_BOTH:      PixelRect = PixelRect::new(80,  380, 161, 16);
const RADIO_SWAP:      PixelRect = PixelRect::new(80,  410, 161, 16);
const RADIO_ENHANCE:   PixelRect = PixelRect::new(80,  440, 161, 16);
const FACE_IMAGE:      PixelRect = PixelRect::new(60,  50,  201, 201);
const TARGET_IMAGE:    PixelRect = PixelRect::new(340, 50,  201, 201);
const PROGRESS_BAR:    PixelRect = PixelRect::new(40,  630, 521, 23);
const STATUS_LABEL:    PixelRect = PixelRect::new(40,  560, 521, 61);

// Font sizes in points, indicator sizes in pixels.
const RADIO_FONT_PT:     i32 = 6;
const CHECKBOX_FONT_PT:  i32 = 6;
const BUTTON_FONT_PT:    i32 = 7;
const PROGRESS_FONT_PT:  i32 = 7;
const LABEL_FONT_PT:     i32 = 8;
const RADIO_INDICATOR:   i32 = 14;
const CHECK_INDICATOR:   i32 = 25;
const BUTTON_RADIUS:     i32 = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSizes {
    pub radio:    f32,
    pub checkbox: f32,
    pub button:   f32,
    pub progress: f32,
    pub label:    f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub factor:           f64,
    pub window:           PixelRect,
    pub select_face:      PixelRect,
    pub select_target:    PixelRect,
    pub start:            PixelRect,
    pub preview:          PixelRect,
    pub keep_fps:         PixelRect,
    pub keep_audio:       PixelRect,
    pub keep_frames:      PixelRect,
    pub radio_both:       PixelRect,
    pub radio_swap:       PixelRect,
    pub radio_enhance:    PixelRect,
    pub face_image:       PixelRect,
    pub target_image:     PixelRect,
    pub progress_bar:     PixelRect,
    pub status_label:     PixelRect,
    pub fonts:            FontSizes,
    pub radio_indicator:  i32,
    pub check_indicator:  i32,
    pub button_radius:    i32,
}

impl Default for Layout {
    fn default() -> Self {
        Self::compute(&LayoutContext::default())
    }
}

impl Layout {
    pub fn compute(ctx: &LayoutContext) -> Self {
        Self {
            factor:          ctx.factor(),
            window:          PixelRect::new(0, 0, ctx.scaled_size(WINDOW.w), ctx.scaled_size(WINDOW.h)),
            select_face:     SELECT_FACE.scaled(ctx),
            select_target:   SELECT_TARGET.scaled(ctx),
            start:           START.scaled(ctx),
            preview:         PREVIEW.scaled(ctx),
            keep_fps:        KEEP_FPS.scaled(ctx),
            keep_audio:      KEEP_AUDIO.scaled(ctx),
            keep_frames:     KEEP_FRAMES.scaled(ctx),
            radio_both:      RADIO_BOTH.scaled(ctx),
            radio_swap:      RADIO_SWAP.scaled(ctx),
            radio_enhance:   RADIO_ENHANCE.scaled(ctx),
            face_image:      FACE_IMAGE.scaled(ctx),
            target_image:    TARGET_IMAGE.scaled(ctx),
            progress_bar:    PROGRESS_BAR.scaled(ctx),
            status_label:    STATUS_LABEL.scaled(ctx),
            fonts: FontSizes {
                radio:    ctx.scaled_font(RADIO_FONT_PT),
                checkbox: ctx.scaled_font(CHECKBOX_FONT_PT),
                button:   ctx.scaled_font(BUTTON_FONT_PT),
                progress: ctx.scaled_font(PROGRESS_FONT_PT),
                label:    ctx.scaled_font(LABEL_FONT_PT),
            },
            radio_indicator: ctx.scaled_size(RADIO_INDICATOR),
            check_indicator: ctx.scaled_size(CHECK_INDICATOR),
            button_radius:   ctx.scaled_size(BUTTON_RADIUS),
        }
    }

    /// Every widget rect, for hit-testing and invariant checks.
    pub fn rects(&self) -> [PixelRect; 15] {
        [
            self.window, self.select_face, self.select_target, self.start, self.preview,
            self.keep_fps, self.keep_audio, self.keep_frames,
            self.radio_both, self.radio_swap, self.radio_enhance,
            self.face_image, self.target_image, self.progress_bar, self.status_label,
        ]
    }
}
