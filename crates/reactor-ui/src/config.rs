// crates/reactor-ui/src/config.rs
//
// Launcher configuration, read once at startup.
//
//   REACTOR_PROCESSOR       program to run (default: `reactor-process` on PATH)
//   REACTOR_PROCESSOR_ARGS  whitespace-separated args placed before the snapshot path

use std::path::PathBuf;

use reactor_media::LaunchSpec;

use crate::paths::jobs_dir;

pub const DEFAULT_PROGRAM: &str = "reactor-process";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LauncherConfig {
    pub program: PathBuf,
    pub args:    Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { program: PathBuf::from(DEFAULT_PROGRAM), args: Vec::new() }
    }
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("REACTOR_PROCESSOR").ok(),
            std::env::var("REACTOR_PROCESSOR_ARGS").ok(),
        )
    }

    fn from_vars(program: Option<String>, args: Option<String>) -> Self {
        let program = program
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM));
        let args = args
            .map(|a| a.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
        Self { program, args }
    }

    pub fn launch_spec(&self) -> LaunchSpec {
        LaunchSpec {
            program:  self.program.clone(),
            args:     self.args.clone(),
            jobs_dir: jobs_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_vars_fall_back_to_default_program() {
        assert_eq!(LauncherConfig::from_vars(None, None), LauncherConfig::default());
        assert_eq!(
            LauncherConfig::from_vars(Some("   ".into()), None).program,
            PathBuf::from(DEFAULT_PROGRAM),
        );
    }

    #[test]
    fn args_split_on_whitespace() {
        let cfg = LauncherConfig::from_vars(
            Some("/opt/reactor/run.py".into()),
            Some("  --gpu   --quiet ".into()),
        );
        assert_eq!(cfg.program, PathBuf::from("/opt/reactor/run.py"));
        assert_eq!(cfg.args, vec!["--gpu".to_string(), "--quiet".to_string()]);
    }

    #[test]
    fn spec_writes_into_jobs_dir() {
        let spec = LauncherConfig::default().launch_spec();
        assert!(spec.jobs_dir.ends_with("jobs"));
    }
}
