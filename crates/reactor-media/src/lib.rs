// crates/reactor-media/src/lib.rs
//
// No egui dependency: the UI reaches this crate through the MediaDecoder and
// JobLauncher traits from reactor-core.
//
// To add a new media capability:
//   1. Create a new module file here
//   2. Add `pub mod mymodule;` below
//   3. Route it through FfmpegDecoder or ProcessLauncher

pub mod decode;
pub mod launcher;
pub mod still;

use std::path::Path;

use reactor_core::{DecodeError, MediaDecoder, PreviewImage};

pub use launcher::{LaunchSpec, ProcessLauncher};

/// Production decoder: ffmpeg for video first frames, `image` for stills.
///
/// `ffmpeg_the_third::init()` must have run before the first video decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegDecoder;

impl MediaDecoder for FfmpegDecoder {
    fn decode_image(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
        still::load_still(path)
    }

    fn decode_first_frame(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
        decode::first_frame(path)
    }
}
