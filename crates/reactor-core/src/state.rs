// crates/reactor-core/src/state.rs
// Pure job data: no egui, no ffmpeg, no runtime handles.
// JobSnapshot is what the processing program receives, so it is serializable.
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::media_types::JobEvent;
use crate::ring::SelectionRing;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Swap the face, then enhance it.
    #[default]
    Both,
    SwapOnly,
    EnhanceOnly,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Both, Operation::SwapOnly, Operation::EnhanceOnly];

    pub fn label(&self) -> &'static str {
        match self {
            Operation::Both        => "Swap and Enhance face",
            Operation::SwapOnly    => "only Swap face",
            Operation::EnhanceOnly => "only Enhance face",
        }
    }
}

/// The two filters the target dialog offers. Face selection only offers Images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileFilter {
    Images,
    Videos,
}

impl FileFilter {
    pub fn label(&self) -> &'static str {
        match self {
            FileFilter::Images => "Image files",
            FileFilter::Videos => "Video files",
        }
    }

    /// Lower-case extensions without the dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileFilter::Images => &["png", "jpg", "jpeg", "bmp"],
            FileFilter::Videos => &["mp4", "mkv", "avi", "mov", "wmv"],
        }
    }

    /// Does `path` match this filter's pattern list? Compares the extension
    /// only; file contents are never inspected.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions().contains(&ext.as_str()))
    }

    /// The filter, among `offered`, whose patterns cover a dialog result.
    ///
    /// Prefers a filter that matches every path; otherwise the one matching the
    /// first path any filter recognises; `None` when nothing matches.
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use reactor_core::state::FileFilter;
    /// let offered = [FileFilter::Images, FileFilter::Videos];
    /// let paths = vec![PathBuf::from("a.MP4"), PathBuf::from("b.mov")];
    /// assert_eq!(FileFilter::matching(&offered, &paths), Some(FileFilter::Videos));
    /// ```
    pub fn matching(offered: &[FileFilter], paths: &[PathBuf]) -> Option<FileFilter> {
        offered.iter()
            .copied()
            .find(|f| !paths.is_empty() && paths.iter().all(|p| f.matches(p)))
            .or_else(|| {
                paths.iter().find_map(|p| offered.iter().copied().find(|f| f.matches(p)))
            })
    }
}

/// What the file-selection collaborator hands back.
/// A cancelled dialog is an empty `paths` list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DialogResult {
    pub paths:  Vec<PathBuf>,
    pub filter: Option<FileFilter>,
}

impl DialogResult {
    pub fn new(paths: Vec<PathBuf>, filter: Option<FileFilter>) -> Self {
        Self { paths, filter }
    }

    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// The pending job, edited field by field from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobConfig {
    pub face_paths:            SelectionRing,
    pub target_paths:          SelectionRing,
    /// Set at target selection from the matched filter.
    pub is_target_video:       bool,
    pub operation:             Operation,
    pub keep_fps:              bool,
    pub keep_audio:            bool,
    pub keep_extracted_frames: bool,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            face_paths:            SelectionRing::new(),
            target_paths:          SelectionRing::new(),
            is_target_video:       false,
            operation:             Operation::Both,
            keep_fps:              true,
            keep_audio:            true,
            keep_extracted_frames: false,
        }
    }
}

impl JobConfig {
    pub fn is_launchable(&self) -> bool {
        !self.face_paths.is_empty() && !self.target_paths.is_empty()
    }

    pub fn snapshot(&self, mode: RunMode) -> JobSnapshot {
        JobSnapshot {
            id:                    Uuid::new_v4(),
            mode,
            face_paths:            self.face_paths.to_vec(),
            target_paths:          self.target_paths.to_vec(),
            is_target_video:       self.is_target_video,
            operation:             self.operation,
            keep_fps:              self.keep_fps,
            keep_audio:            self.keep_audio,
            keep_extracted_frames: self.keep_extracted_frames,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Process every target.
    Full,
    /// Process only the current face/target pair.
    Preview,
}

/// Immutable copy of JobConfig taken at launch. Path lists are current-first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub id:                    Uuid,
    pub mode:                  RunMode,
    pub face_paths:            Vec<PathBuf>,
    pub target_paths:          Vec<PathBuf>,
    pub is_target_video:       bool,
    pub operation:             Operation,
    pub keep_fps:              bool,
    pub keep_audio:            bool,
    pub keep_extracted_frames: bool,
}

impl JobSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Where the controller is in the select → configure → launch flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    FaceSelected,
    TargetSelected,
    Configuring,
    /// A job was handed to the launcher. Not terminal: any option change
    /// returns to Configuring, and a relaunch is allowed directly.
    Launched,
}

/// Last known state of the most recently launched job.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JobStatus {
    #[default]
    None,
    Running  { id: Uuid, percent: u8 },
    Finished { id: Uuid },
    Failed   { id: Uuid, msg: String },
}

impl JobStatus {
    pub fn job_id(&self) -> Option<Uuid> {
        match self {
            JobStatus::None => None,
            JobStatus::Running { id, .. }
            | JobStatus::Finished { id }
            | JobStatus::Failed { id, .. } => Some(*id),
        }
    }

    /// Apply an event from the launcher. Events for other jobs are ignored.
    pub fn apply(&mut self, event: &JobEvent) {
        if self.job_id() != Some(event.id()) {
            return;
        }
        *self = match event {
            JobEvent::Started { id }             => JobStatus::Running { id: *id, percent: 0 },
            JobEvent::Progress { id, percent }   => JobStatus::Running { id: *id, percent: (*percent).min(100) },
            JobEvent::Finished { id }            => JobStatus::Finished { id: *id },
            JobEvent::Failed { id, msg }         => JobStatus::Failed { id: *id, msg: msg.clone() },
        };
    }

    /// Progress bar value in 0..=100.
    pub fn percent(&self) -> u8 {
        match self {
            JobStatus::None                  => 0,
            JobStatus::Running { percent, .. } => *percent,
            JobStatus::Finished { .. }       => 100,
            JobStatus::Failed { .. }         => 0,
        }
    }

    pub fn label(&self) -> String {
        match self {
            JobStatus::None              => String::new(),
            JobStatus::Running { .. }    => "Processing...".to_string(),
            JobStatus::Finished { .. }   => "Done".to_string(),
            JobStatus::Failed { msg, .. } => format!("Failed: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_fps_and_audio() {
        let c = JobConfig::default();
        assert_eq!(c.operation, Operation::Both);
        assert!(c.keep_fps && c.keep_audio);
        assert!(!c.keep_extracted_frames);
        assert!(!c.is_target_video);
        assert!(!c.is_launchable());
    }

    #[test]
    fn filter_matching_uses_extensions_only() {
        let offered = [FileFilter::Images, FileFilter::Videos];
        let imgs = vec![PathBuf::from("/f/a.PNG"), PathBuf::from("/f/b.jpeg")];
        assert_eq!(FileFilter::matching(&offered, &imgs), Some(FileFilter::Images));

        let mixed = vec![PathBuf::from("/f/a.mkv"), PathBuf::from("/f/b.png")];
        assert_eq!(FileFilter::matching(&offered, &mixed), Some(FileFilter::Videos));

        let unknown = vec![PathBuf::from("/f/notes.txt")];
        assert_eq!(FileFilter::matching(&offered, &unknown), None);
        assert_eq!(FileFilter::matching(&offered, &[]), None);

        // Only offered filters count.
        let vids = vec![PathBuf::from("clip.avi")];
        assert_eq!(FileFilter::matching(&[FileFilter::Images], &vids), None);
    }

    #[test]
    fn unrecognised_first_path_falls_through_to_later_ones() {
        let offered = [FileFilter::Images, FileFilter::Videos];
        let paths = vec![PathBuf::from("/f/notes.txt"), PathBuf::from("/f/a.mp4")];
        assert_eq!(FileFilter::matching(&offered, &paths), Some(FileFilter::Videos));
    }

    #[test]
    fn snapshot_is_current_first_and_serializable() {
        let mut c = JobConfig::default();
        c.face_paths.set_all([PathBuf::from("a.png"), PathBuf::from("b.png")]).unwrap();
        c.target_paths.set_all([PathBuf::from("t.mp4")]).unwrap();
        c.face_paths.advance();
        c.operation = Operation::SwapOnly;

        let snap = c.snapshot(RunMode::Full);
        assert_eq!(snap.face_paths, vec![PathBuf::from("b.png"), PathBuf::from("a.png")]);
        let json = snap.to_json().unwrap();
        assert!(json.contains("\"swap_only\""));
        let back: JobSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn job_status_ignores_foreign_events() {
        let id    = Uuid::new_v4();
        let other = Uuid::new_v4();
        let mut s = JobStatus::Running { id, percent: 0 };
        s.apply(&JobEvent::Progress { id: other, percent: 90 });
        assert_eq!(s.percent(), 0);
        s.apply(&JobEvent::Progress { id, percent: 150 });
        assert_eq!(s.percent(), 100);
        s.apply(&JobEvent::Failed { id, msg: "exit 2".into() });
        assert_eq!(s.label(), "Failed: exit 2");
    }
}
