//! `sips` adapter.
//!
//! Each resize is one blocking child process:
//!
//! ```text
//! sips -z <height> <width> <source> --out <dest>
//! ```
//!
//! The child is spawned directly (no shell), so paths containing spaces or
//! quotes need no escaping.  Its stdout and stderr are captured and only
//! surfaced through `tracing` at debug level.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::application::apply_design::{ImageResizer, ResizeError, ResizeStatus};

/// Program name used when the config does not override it.
pub const DEFAULT_PROGRAM: &str = "sips";

/// Runs `sips` (or a compatible program) once per resize.
#[derive(Debug, Clone)]
pub struct SipsResizer {
    program: String,
}

impl SipsResizer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument vector for one square resize.
    fn args(source: &Path, size: u32, dest: &Path) -> Vec<OsString> {
        let size = size.to_string();
        vec![
            "-z".into(),
            size.clone().into(),
            size.into(),
            source.as_os_str().to_owned(),
            "--out".into(),
            dest.as_os_str().to_owned(),
        ]
    }
}

impl Default for SipsResizer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl ImageResizer for SipsResizer {
    fn resize(&self, source: &Path, size: u32, dest: &Path) -> Result<ResizeStatus, ResizeError> {
        let args = Self::args(source, size, dest);
        debug!(program = %self.program, ?args, "running resizer");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| ResizeError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            status = %output.status,
            stdout = %stdout.trim(),
            stderr = %stderr.trim(),
            "resizer finished"
        );

        if output.status.success() {
            Ok(ResizeStatus::succeeded())
        } else {
            Ok(ResizeStatus::failed(output.status.code()))
        }
    }
}
