// crates/reactor-core/src/controller.rs
//
// PreviewController: the state machine behind the main window.
//
// dispatch() is the single entry point. It takes one ControllerCommand,
// mutates JobConfig / MediaCache / LayoutContext, and returns the Effects the
// presentation layer must apply (new preview image, new layout, job to
// launch). Nothing in here touches egui or spawns anything, so the whole flow
// is testable with a fake decoder.
//
// Phases: Idle → FaceSelected → TargetSelected → Configuring → Launched.
// Launched is a checkpoint, not an end state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cache::MediaCache;
use crate::commands::ControllerCommand;
use crate::error::ControllerError;
use crate::helpers::layout::Layout;
use crate::helpers::scale::LayoutContext;
use crate::media_types::{MediaDecoder, PreviewImage};
use crate::ring::Direction;
use crate::state::{DialogResult, FileFilter, JobConfig, JobSnapshot, JobStatus, Phase, RunMode};

/// Instruction for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show the current face. `image` is `None` when it could not be decoded.
    ShowFace { path: PathBuf, image: Option<Arc<PreviewImage>> },
    /// Show the current target (cached first frame for videos).
    ShowTarget { path: PathBuf, image: Option<Arc<PreviewImage>> },
    /// Every geometry and font size was recomputed.
    Relayout(Layout),
    /// Hand this snapshot to the job launcher.
    LaunchJob(JobSnapshot),
}

pub struct PreviewController<D: MediaDecoder> {
    config:     JobConfig,
    cache:      MediaCache,
    layout_ctx: LayoutContext,
    layout:     Layout,
    phase:      Phase,
    job:        JobStatus,
    decoder:    D,
}

impl<D: MediaDecoder> PreviewController<D> {
    pub fn new(decoder: D) -> Self {
        let layout_ctx = LayoutContext::default();
        Self {
            config:  JobConfig::default(),
            cache:   MediaCache::new(),
            layout:  Layout::compute(&layout_ctx),
            layout_ctx,
            phase:   Phase::Idle,
            job:     JobStatus::None,
            decoder,
        }
    }

    pub fn config(&self) -> &JobConfig { &self.config }
    pub fn cache(&self) -> &MediaCache { &self.cache }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn layout_context(&self) -> LayoutContext { self.layout_ctx }
    pub fn phase(&self) -> Phase { self.phase }
    pub fn job_status(&self) -> &JobStatus { &self.job }
    pub fn decoder(&self) -> &D { &self.decoder }

    /// Apply one command.
    ///
    /// Cancelled dialogs and per-file decode failures are absorbed: they
    /// return `Ok` with no effects (or an effect carrying no image). The only
    /// rejected transition is a launch without both selections.
    pub fn dispatch(&mut self, cmd: ControllerCommand) -> Result<Vec<Effect>, ControllerError> {
        match cmd {
            // ── Selection ────────────────────────────────────────────────────
            ControllerCommand::SelectFace(result) => self.select_face(result),
            ControllerCommand::SelectTarget(result) => self.select_target(result),
            ControllerCommand::NavigateFace(dir) => Ok(self.navigate_face(dir)),
            ControllerCommand::NavigateTarget(dir) => Ok(self.navigate_target(dir)),

            // ── Layout ───────────────────────────────────────────────────────
            ControllerCommand::Resize { width, height } => {
                self.layout_ctx = LayoutContext::for_window(width, height);
                self.layout     = Layout::compute(&self.layout_ctx);
                Ok(vec![Effect::Relayout(self.layout)])
            }

            // ── Options ──────────────────────────────────────────────────────
            ControllerCommand::SetOperation(op) => {
                self.config.operation = op;
                self.mark_configuring();
                Ok(Vec::new())
            }
            ControllerCommand::ToggleKeepFps => {
                self.config.keep_fps = !self.config.keep_fps;
                self.mark_configuring();
                Ok(Vec::new())
            }
            ControllerCommand::ToggleKeepAudio => {
                self.config.keep_audio = !self.config.keep_audio;
                self.mark_configuring();
                Ok(Vec::new())
            }
            ControllerCommand::ToggleKeepFrames => {
                self.config.keep_extracted_frames = !self.config.keep_extracted_frames;
                self.mark_configuring();
                Ok(Vec::new())
            }

            // ── Job ──────────────────────────────────────────────────────────
            ControllerCommand::Launch => {
                let snapshot = self.take_snapshot(RunMode::Full)?;
                self.phase = Phase::Launched;
                Ok(vec![Effect::LaunchJob(snapshot)])
            }
            ControllerCommand::Preview => {
                let snapshot = self.take_snapshot(RunMode::Preview)?;
                Ok(vec![Effect::LaunchJob(snapshot)])
            }
            ControllerCommand::Job(event) => {
                self.job.apply(&event);
                Ok(Vec::new())
            }
        }
    }

    fn select_face(&mut self, result: DialogResult) -> Result<Vec<Effect>, ControllerError> {
        if let Err(ControllerError::EmptySelection) = self.config.face_paths.set_all(result.paths) {
            eprintln!("[controller] face selection cancelled, keeping {} face(s)",
                self.config.face_paths.len());
            return Ok(Vec::new());
        }
        self.phase = match self.phase {
            Phase::Idle | Phase::FaceSelected => Phase::FaceSelected,
            _ => Phase::Configuring,
        };
        Ok(self.face_effect().into_iter().collect())
    }

    fn select_target(&mut self, result: DialogResult) -> Result<Vec<Effect>, ControllerError> {
        let DialogResult { paths, filter } = result;
        if paths.is_empty() {
            eprintln!("[controller] target selection cancelled, keeping {} target(s)",
                self.config.target_paths.len());
            return Ok(Vec::new());
        }

        let is_video = filter == Some(FileFilter::Videos);
        if is_video {
            let report = self.cache.warm_fresh(&paths, &self.decoder);
            eprintln!("[controller] warmed {} video(s): {} decoded, {} failed, {} cached",
                paths.len(), report.decoded, report.failed, report.skipped);
        }
        self.config.target_paths.set_all(paths)?;
        self.config.is_target_video = is_video;
        self.phase = Phase::TargetSelected;
        Ok(self.target_effect().into_iter().collect())
    }

    fn navigate_face(&mut self, dir: Direction) -> Vec<Effect> {
        if self.config.face_paths.is_empty() {
            return Vec::new();
        }
        self.config.face_paths.rotate(dir);
        self.face_effect().into_iter().collect()
    }

    fn navigate_target(&mut self, dir: Direction) -> Vec<Effect> {
        if self.config.target_paths.is_empty() {
            return Vec::new();
        }
        self.config.target_paths.rotate(dir);
        self.target_effect().into_iter().collect()
    }

    /// Faces are always stills and cheap to decode, so they are not cached.
    fn face_effect(&self) -> Option<Effect> {
        let path  = self.config.face_paths.current()?.clone();
        let image = self.decode_still(&path);
        Some(Effect::ShowFace { path, image })
    }

    /// Videos resolve through the cache only; images decode directly.
    fn target_effect(&self) -> Option<Effect> {
        let path = self.config.target_paths.current()?.clone();
        let image = if self.config.is_target_video {
            self.cache.get(&path)
        } else {
            self.decode_still(&path)
        };
        Some(Effect::ShowTarget { path, image })
    }

    fn decode_still(&self, path: &Path) -> Option<Arc<PreviewImage>> {
        match self.decoder.decode_image(path) {
            Ok(img) => Some(Arc::new(img)),
            Err(e) => {
                eprintln!("[controller] {e}");
                None
            }
        }
    }

    fn mark_configuring(&mut self) {
        if matches!(self.phase, Phase::TargetSelected | Phase::Launched) {
            self.phase = Phase::Configuring;
        }
    }

    fn take_snapshot(&mut self, mode: RunMode) -> Result<JobSnapshot, ControllerError> {
        if !self.config.is_launchable() {
            return Err(ControllerError::MissingSelection {
                face:   self.config.face_paths.is_empty(),
                target: self.config.target_paths.is_empty(),
            });
        }
        let snapshot = self.config.snapshot(mode);
        self.job = JobStatus::Running { id: snapshot.id, percent: 0 };
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::media_types::JobEvent;
    use crate::state::Operation;

    struct StubDecoder;

    impl MediaDecoder for StubDecoder {
        fn decode_image(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
            if path.to_string_lossy().contains("broken") {
                return Err(DecodeError::Image { path: path.into(), msg: "truncated".into() });
            }
            Ok(PreviewImage::from_rgba(1, 1, vec![9, 9, 9, 255]).unwrap())
        }

        fn decode_first_frame(&self, path: &Path) -> Result<PreviewImage, DecodeError> {
            self.decode_image(path)
        }
    }

    fn faces(names: &[&str]) -> ControllerCommand {
        ControllerCommand::SelectFace(DialogResult::new(
            names.iter().map(PathBuf::from).collect(),
            Some(FileFilter::Images),
        ))
    }

    fn targets(names: &[&str], filter: FileFilter) -> ControllerCommand {
        ControllerCommand::SelectTarget(DialogResult::new(
            names.iter().map(PathBuf::from).collect(),
            Some(filter),
        ))
    }

    #[test]
    fn phases_follow_the_selection_flow() {
        let mut c = PreviewController::new(StubDecoder);
        assert_eq!(c.phase(), Phase::Idle);
        c.dispatch(faces(&["a.png"])).unwrap();
        assert_eq!(c.phase(), Phase::FaceSelected);
        c.dispatch(targets(&["t.jpg"], FileFilter::Images)).unwrap();
        assert_eq!(c.phase(), Phase::TargetSelected);
        c.dispatch(ControllerCommand::ToggleKeepAudio).unwrap();
        assert_eq!(c.phase(), Phase::Configuring);
        c.dispatch(ControllerCommand::Launch).unwrap();
        assert_eq!(c.phase(), Phase::Launched);
        c.dispatch(ControllerCommand::SetOperation(Operation::EnhanceOnly)).unwrap();
        assert_eq!(c.phase(), Phase::Configuring);
    }

    #[test]
    fn reselecting_faces_after_target_goes_to_configuring() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(targets(&["t.jpg"], FileFilter::Images)).unwrap();
        c.dispatch(faces(&["a.png"])).unwrap();
        assert_eq!(c.phase(), Phase::Configuring);
    }

    #[test]
    fn cancelled_face_dialog_is_absorbed() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(faces(&["a.png", "b.png"])).unwrap();
        let fx = c.dispatch(ControllerCommand::SelectFace(DialogResult::cancelled())).unwrap();
        assert!(fx.is_empty());
        assert_eq!(c.config().face_paths.len(), 2);
    }

    #[test]
    fn undecodable_face_still_shows_its_path() {
        let mut c = PreviewController::new(StubDecoder);
        let fx = c.dispatch(faces(&["broken.png"])).unwrap();
        assert_eq!(fx, vec![Effect::ShowFace { path: "broken.png".into(), image: None }]);
    }

    #[test]
    fn navigation_on_empty_ring_does_nothing() {
        let mut c = PreviewController::new(StubDecoder);
        assert!(c.dispatch(ControllerCommand::NavigateFace(Direction::Forward)).unwrap().is_empty());
        assert!(c.dispatch(ControllerCommand::NavigateTarget(Direction::Backward)).unwrap().is_empty());
    }

    #[test]
    fn resize_replaces_layout_without_touching_selection() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(faces(&["a.png", "b.png"])).unwrap();
        let before = c.config().clone();
        let fx = c.dispatch(ControllerCommand::Resize { width: 1200.0, height: 1400.0 }).unwrap();
        assert_eq!(c.layout_context().factor(), 2.0);
        assert_eq!(fx, vec![Effect::Relayout(*c.layout())]);
        assert_eq!(c.layout().face_image.w, 402);
        assert_eq!(c.config(), &before);
        assert_eq!(c.phase(), Phase::FaceSelected);
    }

    #[test]
    fn missing_face_rejects_launch_and_preview() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(targets(&["t.jpg"], FileFilter::Images)).unwrap();
        let err = c.dispatch(ControllerCommand::Preview).unwrap_err();
        assert_eq!(err, ControllerError::MissingSelection { face: true, target: false });
        assert_eq!(c.job_status(), &JobStatus::None);
    }

    #[test]
    fn preview_keeps_phase_and_marks_snapshot() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(faces(&["a.png"])).unwrap();
        c.dispatch(targets(&["t.jpg"], FileFilter::Images)).unwrap();
        let fx = c.dispatch(ControllerCommand::Preview).unwrap();
        match &fx[..] {
            [Effect::LaunchJob(snap)] => assert_eq!(snap.mode, RunMode::Preview),
            other => panic!("unexpected effects {other:?}"),
        }
        assert_eq!(c.phase(), Phase::TargetSelected);
    }

    #[test]
    fn job_events_track_the_launched_snapshot() {
        let mut c = PreviewController::new(StubDecoder);
        c.dispatch(faces(&["a.png"])).unwrap();
        c.dispatch(targets(&["t.jpg"], FileFilter::Images)).unwrap();
        let id = match c.dispatch(ControllerCommand::Launch).unwrap().remove(0) {
            Effect::LaunchJob(snap) => snap.id,
            other => panic!("unexpected effect {other:?}"),
        };
        let before = c.config().clone();
        c.dispatch(ControllerCommand::Job(JobEvent::Progress { id, percent: 40 })).unwrap();
        assert_eq!(c.job_status().percent(), 40);
        c.dispatch(ControllerCommand::Job(JobEvent::Finished { id })).unwrap();
        assert_eq!(c.job_status(), &JobStatus::Finished { id });
        assert_eq!(c.config(), &before);
    }
}
