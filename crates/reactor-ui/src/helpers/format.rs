// crates/reactor-ui/src/helpers/format.rs
//
// Strings drawn under the previews and in the status label.

use std::path::Path;

/// Truncates `text` to fit within `max_px` using a per-character width
/// heuristic (`avg_char_px` ≈ 0.55 × font size for proportional fonts).
/// Appends "…" when truncated. Avoids egui font measurement, which needs a
/// live `Fonts`.
pub fn fit_label(text: &str, max_px: f32, avg_char_px: f32) -> String {
    const ELLIPSIS: &str = "…";
    if avg_char_px <= 0.0 {
        return String::new();
    }
    let max_chars = (max_px / avg_char_px).max(0.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    // Reserve one slot for the ellipsis itself.
    let keep = max_chars.saturating_sub(1);
    text.chars().take(keep).collect::<String>() + ELLIPSIS
}

/// "name.png" for one file, "name.png  (+2)" when more are queued behind it.
pub fn preview_caption(path: &Path, ring_len: usize) -> String {
    let name = path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy();
    match ring_len {
        0 | 1 => name.into_owned(),
        n     => format!("{name}  (+{})", n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(fit_label("face.png", 200.0, 6.5), "face.png");
    }

    #[test]
    fn zero_budget_returns_empty() {
        assert_eq!(fit_label("face.png", 0.0, 6.5), "");
        assert_eq!(fit_label("face.png", 100.0, 0.0), "");
    }

    #[test]
    fn truncated_text_has_ellipsis() {
        let result = fit_label("a very long target file name.mp4", 40.0, 6.5);
        assert!(result.ends_with('…'));
        assert_eq!(result.chars().count(), 6);
    }

    #[test]
    fn caption_counts_the_rest_of_the_ring() {
        assert_eq!(preview_caption(Path::new("/f/a.png"), 1), "a.png");
        assert_eq!(preview_caption(Path::new("/f/a.png"), 3), "a.png  (+2)");
    }
}
