// Shared fixtures for reactor-core integration tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use reactor_core::state::{DialogResult, FileFilter};
use reactor_core::{ControllerCommand, DecodeError, MediaDecoder, PreviewImage};

/// Decoder that paints each file a distinct 2×2 colour and records every call.
/// Paths containing "corrupt" fail.
#[derive(Default)]
pub struct RecordingDecoder {
    frame_calls: Mutex<HashMap<PathBuf, usize>>,
    image_calls: Mutex<HashMap<PathBuf, usize>>,
}

impl RecordingDecoder {
    pub fn frame_decodes(&self) -> usize {
        self.frame_calls.lock().unwrap().values().sum()
    }

    pub fn frame_decodes_of(&self, path: &str) -> usize {
        self.frame_calls.lock().unwrap().get(Path::new(path)).copied().unwrap_or(0)
    }

    pub fn image_decodes(&self) -> usize {
        self.image_calls.lock().unwrap().values().sum()
    }

    fn paint(path: &Path) -> Result<PreviewImage, DecodeError> {
        if path.to_string_lossy().contains("corrupt") {
            return Err(DecodeError::NoFrame { path: path.to_path_buf() });
        }
        let shade = path.to_string_lossy().bytes().fold(0u8, |a, b| a.wrapping_add(b));
        Ok(PreviewImage::from_rgba(2, 2, [shade, shade, shade, 255].repeat(4)).unwrap())
    }
}

impl MediaDecoder for RecordingDecoder {
    fn decode_image(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
        *self.image_calls.lock().unwrap().entry(path.to_path_buf()).or_default() += 1;
        Self::paint(path)
    }

    fn decode_first_frame(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
        *self.frame_calls.lock().unwrap().entry(path.to_path_buf()).or_default() += 1;
        Self::paint(path)
    }
}

pub fn select_faces(names: &[&str]) -> ControllerCommand {
    ControllerCommand::SelectFace(DialogResult::new(
        names.iter().map(PathBuf::from).collect(),
        Some(FileFilter::Images),
    ))
}

pub fn select_targets(names: &[&str], filter: FileFilter) -> ControllerCommand {
    ControllerCommand::SelectTarget(DialogResult::new(
        names.iter().map(PathBuf::from).collect(),
        Some(filter),
    ))
}

pub fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}
