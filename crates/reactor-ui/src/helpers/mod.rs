// crates/reactor-ui/src/helpers/mod.rs
//
// UI-only helpers. Anything without an egui or display concern belongs in
// reactor-core instead.

pub mod format;
pub mod log;
