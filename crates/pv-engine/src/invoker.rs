//! One-shot execution of the external engine.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, trace};

use crate::error::{EngineError, EngineResult};

/// Something that turns the input file in `working_dir` into an output file there.
///
/// Implementations must block until the output file is complete.
pub trait Engine {
    /// Human readable name for logs and manifests.
    fn program(&self) -> String;

    fn run(&self, working_dir: &Path) -> EngineResult<()>;
}

/// Runs an executable with no arguments, inheriting stdio, and waits for it.
#[derive(Debug, Clone)]
pub struct ProcessEngine {
    program: PathBuf,
}

impl ProcessEngine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Prefer an executable sitting in `working_dir`, otherwise defer to `PATH`.
    ///
    /// Relative programs combined with `current_dir` resolve differently per
    /// platform, so a local executable is pinned to an absolute path here.
    pub fn locate(executable: &Path, working_dir: &Path) -> Self {
        if executable.is_absolute() {
            return Self::new(executable);
        }
        let local = working_dir.join(executable);
        if local.is_file() {
            let program = std::path::absolute(&local).unwrap_or(local);
            return Self::new(program);
        }
        Self::new(executable)
    }
}

impl Engine for ProcessEngine {
    fn program(&self) -> String {
        self.program.display().to_string()
    }

    fn run(&self, working_dir: &Path) -> EngineResult<()> {
        trace!(program = %self.program.display(), dir = %working_dir.display(), "spawning engine");

        let status = Command::new(&self.program)
            .current_dir(working_dir)
            .status()
            .map_err(|source| EngineError::Spawn {
                program: self.program(),
                source,
            })?;

        if !status.success() {
            return Err(EngineError::ExitStatus {
                program: self.program(),
                status,
            });
        }

        debug!(program = %self.program.display(), "engine finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let engine = ProcessEngine::new("definitely-not-an-engine-binary-7f3a");
        let err = engine.run(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::Spawn { .. }));
    }

    #[test]
    fn locate_prefers_working_dir_copy() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("engine.bin"), b"").unwrap();

        let engine = ProcessEngine::locate(Path::new("engine.bin"), dir.path());
        assert!(Path::new(&engine.program()).is_absolute());

        let fallback = ProcessEngine::locate(Path::new("not-here.bin"), dir.path());
        assert_eq!(fallback.program(), "not-here.bin");
    }
}
