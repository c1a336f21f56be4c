// crates/reactor-core/src/commands.rs
//
// Every user action in Reactor Plus is expressed as a ControllerCommand.
// Panels emit these; app.rs feeds them to PreviewController::dispatch after
// the UI pass. Adding a feature = add a variant here + one match arm in
// controller.rs.

use crate::media_types::JobEvent;
use crate::ring::Direction;
use crate::state::{DialogResult, Operation};

#[derive(Debug, Clone)]
pub enum ControllerCommand {
    // ── Selection ────────────────────────────────────────────────────────────
    /// Result of the face dialog. An empty result is a cancel.
    SelectFace(DialogResult),
    /// Result of the target dialog, with the filter that matched.
    SelectTarget(DialogResult),
    NavigateFace(Direction),
    NavigateTarget(Direction),

    // ── Layout ───────────────────────────────────────────────────────────────
    /// New inner size of the window, in logical pixels.
    Resize { width: f32, height: f32 },

    // ── Options ──────────────────────────────────────────────────────────────
    SetOperation(Operation),
    ToggleKeepFps,
    ToggleKeepAudio,
    ToggleKeepFrames,

    // ── Job ──────────────────────────────────────────────────────────────────
    /// Snapshot the config and hand it to the launcher.
    Launch,
    /// Same validation as Launch, but only the current pair is processed.
    Preview,
    /// Progress fed back from the launcher. Never touches selection or options.
    Job(JobEvent),
}
