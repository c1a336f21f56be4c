// crates/reactor-core/src/media_types.rs
//
// Types that cross the boundary between reactor-core and its collaborators
// (reactor-media decoders, the job launcher, the UI).
// No egui, no ffmpeg. Plain data and the traits they implement.

use std::path::Path;
use uuid::Uuid;

use crate::error::DecodeError;
use crate::state::JobSnapshot;

/// A decoded still, ready for upload: tightly packed RGBA8, row stride = width * 4.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width:  u32,
    pub height: u32,
    pub data:   Vec<u8>,
}

impl PreviewImage {
    /// Returns `None` when `data` does not hold exactly `width * height` RGBA pixels.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = width as usize * height as usize * 4;
        (data.len() == expected && width > 0 && height > 0)
            .then_some(Self { width, height, data })
    }

    /// Expand packed RGB24 to RGBA with an opaque alpha channel.
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Option<Self> {
        if rgb.len() != width as usize * height as usize * 3 {
            return None;
        }
        let data = rgb.chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Self::from_rgba(width, height, data)
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// Decode collaborator. Implementations must be shareable across the rayon
/// pool that `MediaCache::warm` decodes on.
pub trait MediaDecoder: Send + Sync {
    /// Decode a still image file (face previews, image targets).
    fn decode_image(&self, path: &Path) -> Result<PreviewImage, DecodeError>;
    /// Decode the first decodable frame of a video container.
    fn decode_first_frame(&self, path: &Path) -> Result<PreviewImage, DecodeError>;
}

/// Progress reported by the processing job collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum JobEvent {
    Started  { id: Uuid },
    Progress { id: Uuid, percent: u8 },
    Finished { id: Uuid },
    Failed   { id: Uuid, msg: String },
}

impl JobEvent {
    pub fn id(&self) -> Uuid {
        match self {
            JobEvent::Started { id }
            | JobEvent::Progress { id, .. }
            | JobEvent::Finished { id }
            | JobEvent::Failed { id, .. } => *id,
        }
    }
}

/// Processing job collaborator. `launch` never blocks on the job itself;
/// outcomes come back through `poll_events`.
pub trait JobLauncher {
    fn launch(&self, snapshot: JobSnapshot);
    fn poll_events(&self) -> Vec<JobEvent>;
}
