// crates/reactor-core/src/error.rs
//
// Typed errors for the controller and the decode collaborator.
// None of these are fatal: EmptySelection and DecodeError are absorbed by the
// controller, MissingSelection is surfaced as a rejected launch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// The file dialog was cancelled or returned nothing.
    #[error("selection is empty")]
    EmptySelection,

    /// Launch attempted while at least one ring is empty.
    /// The flags say which side is missing.
    #[error("cannot launch: {}", missing_label(.face, .target))]
    MissingSelection { face: bool, target: bool },
}

fn missing_label(face: &bool, target: &bool) -> &'static str {
    match (*face, *target) {
        (true, true) => "no face and no target selected",
        (true, false) => "no face selected",
        (false, true) => "no target selected",
        (false, false) => "selection complete",
    }
}

/// Failure reported by a `MediaDecoder` for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("cannot open {path}: {msg}")]
    Open { path: PathBuf, msg: String },

    #[error("no video stream in {path}")]
    NoVideoStream { path: PathBuf },

    #[error("no decodable frame in {path}")]
    NoFrame { path: PathBuf },

    #[error("image decode failed for {path}: {msg}")]
    Image { path: PathBuf, msg: String },

    #[error("decode failed for {path}: {msg}")]
    Other { path: PathBuf, msg: String },
}
