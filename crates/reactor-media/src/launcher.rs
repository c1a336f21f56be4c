// crates/reactor-media/src/launcher.rs
//
// ProcessLauncher: hands JobSnapshots to the external processing program.
//
// One worker thread owns the job queue. For each snapshot it writes the JSON
// to a temp file in the jobs dir, runs `program [args..] <snapshot.json>`,
// and turns what happens into JobEvents on a bounded channel the UI drains
// every frame. Stdout lines of the form `progress <n>` become Progress
// events; anything else is logged. Jobs run one at a time in launch order.

use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use anyhow::{Context as _, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use reactor_core::state::JobSnapshot;
use reactor_core::{JobEvent, JobLauncher};

/// How to run the processing program.
#[derive(Clone, Debug)]
pub struct LaunchSpec {
    pub program:  PathBuf,
    /// Passed before the snapshot path.
    pub args:     Vec<String>,
    /// Where snapshot files are written.
    pub jobs_dir: PathBuf,
}

enum LaunchCmd {
    Run(JobSnapshot),
    Shutdown,
}

pub struct ProcessLauncher {
    cmd_tx: Sender<LaunchCmd>,
    /// Job events for the UI.
    pub rx: Receiver<JobEvent>,
}

impl ProcessLauncher {
    pub fn new(spec: LaunchSpec) -> Self {
        let (cmd_tx, cmd_rx) = unbounded::<LaunchCmd>();
        let (tx, rx)         = bounded::<JobEvent>(256);

        thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let snapshot = match cmd {
                    LaunchCmd::Run(s) => s,
                    LaunchCmd::Shutdown => return,
                };
                let id = snapshot.id;
                let _ = tx.send(JobEvent::Started { id });
                let event = match run_job(&spec, &snapshot, &tx) {
                    Ok(())  => JobEvent::Finished { id },
                    Err(e)  => {
                        eprintln!("[job] {id}: {e:#}");
                        JobEvent::Failed { id, msg: format!("{e:#}") }
                    }
                };
                let _ = tx.send(event);
            }
        });

        Self { cmd_tx, rx }
    }

    /// Stop the worker after the job in flight (if any) completes.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(LaunchCmd::Shutdown);
    }
}

impl JobLauncher for ProcessLauncher {
    fn launch(&self, snapshot: JobSnapshot) {
        eprintln!("[job] queue {} ({:?}, {} face(s), {} target(s))",
            snapshot.id, snapshot.mode, snapshot.face_paths.len(), snapshot.target_paths.len());
        if self.cmd_tx.send(LaunchCmd::Run(snapshot)).is_err() {
            eprintln!("[job] worker gone, launch dropped");
        }
    }

    fn poll_events(&self) -> Vec<JobEvent> {
        self.rx.try_iter().collect()
    }
}

fn run_job(spec: &LaunchSpec, snapshot: &JobSnapshot, tx: &Sender<JobEvent>) -> Result<()> {
    std::fs::create_dir_all(&spec.jobs_dir)
        .with_context(|| format!("creating {}", spec.jobs_dir.display()))?;

    let json = snapshot.to_json().context("serializing job snapshot")?;
    let mut file = tempfile::Builder::new()
        .prefix(&format!("reactor_job_{}_", snapshot.id.simple()))
        .suffix(".json")
        .tempfile_in(&spec.jobs_dir)
        .context("creating snapshot file")?;
    file.write_all(json.as_bytes()).context("writing snapshot file")?;
    file.flush().context("writing snapshot file")?;

    eprintln!("[job] run {} {:?} {}", spec.program.display(), spec.args, file.path().display());
    let mut child = Command::new(&spec.program)
        .args(&spec.args)
        .arg(file.path())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .with_context(|| format!("starting {}", spec.program.display()))?;

    if let Some(stdout) = child.stdout.take() {
        for line in BufReader::new(stdout).lines().map_while(|l| l.ok()) {
            match parse_progress(&line) {
                Some(percent) => { let _ = tx.send(JobEvent::Progress { id: snapshot.id, percent }); }
                None          => eprintln!("[job] {line}"),
            }
        }
    }

    let status = child.wait().context("waiting for processing program")?;
    // `file` drops here and removes the snapshot; the program has exited.
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("processing program exited with {status}")
    }
}

/// `progress 42` → `Some(42)`. Values over 100 clamp.
pub fn parse_progress(line: &str) -> Option<u8> {
    let rest = line.trim().strip_prefix("progress")?;
    let n: f32 = rest.trim().trim_end_matches('%').parse().ok()?;
    (n.is_finite() && n >= 0.0).then(|| n.min(100.0) as u8)
}
