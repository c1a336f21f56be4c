// crates/reactor-core/src/lib.rs
//
// Pure controller state for Reactor Plus. No egui, no ffmpeg.
//
// The UI crate turns user input into ControllerCommands, hands them to
// PreviewController::dispatch, and renders the returned Effects. Decoding and
// job launch are collaborators reached through the traits in media_types.rs.

pub mod cache;
pub mod commands;
pub mod controller;
pub mod error;
pub mod helpers;
pub mod media_types;
pub mod ring;
pub mod state;

pub use cache::{CacheEntry, MediaCache, SharedMediaCache, WarmReport};
pub use commands::ControllerCommand;
pub use controller::{Effect, PreviewController};
pub use error::{ControllerError, DecodeError};
pub use media_types::{JobEvent, JobLauncher, MediaDecoder, PreviewImage};
pub use ring::{Direction, SelectionRing};
