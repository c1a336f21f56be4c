// crates/reactor-ui/src/helpers/log.rs
//
// Unified logging for the UI crate.
//
// Release builds on Windows run without a console (`windows_subsystem`), so
// `eprintln!` output is lost. Log lines go to a file in the OS temp dir
// instead: %TEMP%\reactor-plus.log, append-only.
//
// Usage:
//   reactor_log!("[app] launch rejected: {err}");

use std::io::Write;

/// Append `msg` to the log file. Never panics; a failed write is dropped.
pub fn vlog(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("reactor-plus.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
    #[cfg(debug_assertions)]
    eprintln!("{msg}");
}

/// Formats like `eprintln!` but routes through `vlog`.
#[macro_export]
macro_rules! reactor_log {
    ($($arg:tt)*) => {
        $crate::helpers::log::vlog(&format!($($arg)*))
    };
}
