// crates/reactor-ui/src/paths.rs
// Single source of truth for where Reactor Plus writes job snapshots.

use std::path::PathBuf;

/// `%APPDATA%\ReactorPlus` on Windows, `~/.local/share/reactor-plus` elsewhere.
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(|a| PathBuf::from(a).join("ReactorPlus"))
        .unwrap_or_else(|_| std::env::temp_dir().join("ReactorPlus"));
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share").join("reactor-plus"))
        .unwrap_or_else(|_| std::env::temp_dir().join("reactor-plus"));
    base
}

pub fn jobs_dir() -> PathBuf {
    app_data_dir().join("jobs")
}
