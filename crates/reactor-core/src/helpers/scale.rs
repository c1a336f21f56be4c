// crates/reactor-core/src/helpers/scale.rs
//
// Scale model for the adaptive layout.
//
// Every widget geometry and font size is authored against a 600×700 design
// window and multiplied by one factor. The factor lives in a LayoutContext
// value that is replaced wholesale on each resize and passed down to every
// geometry computation, so a layout pass never sees a half-updated factor.

/// Width of the design-reference window, in logical pixels.
pub const BASE_WIDTH: f32 = 600.0;
/// Height of the design-reference window, in logical pixels.
pub const BASE_HEIGHT: f32 = 700.0;

/// Smallest factor a LayoutContext will hold. Minimised or zero-sized windows
/// clamp here; the 1 px floor in `scaled_size` does the rest.
const MIN_FACTOR: f64 = 1e-6;

/// Scale `base` by `factor`, rounding half away from zero, never below 1.
///
/// ```
/// use reactor_core::helpers::scale::scaled_size;
/// assert_eq!(scaled_size(141, 1.0), 141);
/// assert_eq!(scaled_size(141, 2.0), 282);
/// assert_eq!(scaled_size(41, 0.5),  21);
/// assert_eq!(scaled_size(6, 0.01),  1);
/// ```
pub fn scaled_size(base: i32, factor: f64) -> i32 {
    let v = (base as f64 * factor).round();
    if v.is_finite() && v >= 1.0 {
        v.min(i32::MAX as f64) as i32
    } else {
        1
    }
}

/// The scale factor for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutContext {
    factor: f64,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self { factor: 1.0 }
    }
}

impl LayoutContext {
    /// Non-finite or non-positive factors clamp to a tiny positive value.
    pub fn new(factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > MIN_FACTOR { factor } else { MIN_FACTOR };
        Self { factor }
    }

    /// Factor for a window of `width × height`: the tighter of the two axis ratios.
    ///
    /// ```
    /// use reactor_core::helpers::scale::LayoutContext;
    /// assert_eq!(LayoutContext::for_window(1200.0, 1400.0).factor(), 2.0);
    /// assert_eq!(LayoutContext::for_window(1200.0, 700.0).factor(), 1.0);
    /// assert_eq!(LayoutContext::for_window(300.0, 1400.0).factor(), 0.5);
    /// ```
    pub fn for_window(width: f32, height: f32) -> Self {
        let w = width as f64 / BASE_WIDTH as f64;
        let h = height as f64 / BASE_HEIGHT as f64;
        Self::new(w.min(h))
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn scaled_size(&self, base: i32) -> i32 {
        scaled_size(base, self.factor)
    }

    /// Font sizes follow the same rule as geometry, in points.
    pub fn scaled_font(&self, base_pt: i32) -> f32 {
        scaled_size(base_pt, self.factor) as f32
    }
}
