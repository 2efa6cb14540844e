//! Mock resizer for tests.
//!
//! # Why a mock resizer?
//!
//! `sips` only exists on macOS, and running it in tests would need real PNG
//! input.  `MockResizer` instead copies the source bytes verbatim to the
//! destination, which is enough to observe *which* files the apply flow
//! writes.  If the destination directory does not exist the copy fails and
//! the call is reported as a non-zero exit, the same way `sips` behaves.
//!
//! # Injecting failures
//!
//! - `failing_sizes`: the tool "runs" but exits with status 1.
//! - `unlaunchable_sizes`: the call returns [`ResizeError::Launch`] as if
//!   the program were missing.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::apply_design::{ImageResizer, ResizeError, ResizeStatus};

/// One recorded call to [`MockResizer::resize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeCall {
    pub source: PathBuf,
    pub size: u32,
    pub dest: PathBuf,
}

/// A resizer that copies files and records every call.
#[derive(Debug, Default)]
pub struct MockResizer {
    /// Every call, in order, including failed ones.
    pub calls: Mutex<Vec<ResizeCall>>,
    /// Sizes that exit unsuccessfully without writing anything.
    pub failing_sizes: Vec<u32>,
    /// Sizes that fail to launch.
    pub unlaunchable_sizes: Vec<u32>,
}

impl MockResizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded calls.
    pub fn calls(&self) -> Vec<ResizeCall> {
        self.calls.lock().expect("lock poisoned").clone()
    }
}

impl ImageResizer for MockResizer {
    fn resize(&self, source: &Path, size: u32, dest: &Path) -> Result<ResizeStatus, ResizeError> {
        self.calls.lock().expect("lock poisoned").push(ResizeCall {
            source: source.to_path_buf(),
            size,
            dest: dest.to_path_buf(),
        });

        if self.unlaunchable_sizes.contains(&size) {
            return Err(ResizeError::Launch {
                program: "mock-resizer".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "mock launch failure"),
            });
        }
        if self.failing_sizes.contains(&size) {
            return Ok(ResizeStatus::failed(Some(1)));
        }

        match std::fs::copy(source, dest) {
            Ok(_) => Ok(ResizeStatus::succeeded()),
            Err(_) => Ok(ResizeStatus::failed(Some(1))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("logo_mock_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_mock_resizer_copies_source_and_records_call() {
        // Arrange
        let dir = temp_dir();
        let src = dir.join("in.png");
        let dst = dir.join("out.png");
        std::fs::write(&src, b"png-bytes").unwrap();
        let resizer = MockResizer::new();

        // Act
        let status = resizer.resize(&src, 40, &dst).unwrap();

        // Assert
        assert!(status.success);
        assert_eq!(std::fs::read(&dst).unwrap(), b"png-bytes");
        assert_eq!(
            resizer.calls(),
            vec![ResizeCall { source: src, size: 40, dest: dst }]
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_mock_resizer_missing_destination_dir_is_failed_status() {
        let dir = temp_dir();
        let src = dir.join("in.png");
        std::fs::write(&src, b"x").unwrap();
        let resizer = MockResizer::new();

        let status = resizer.resize(&src, 20, &dir.join("missing").join("out.png")).unwrap();

        assert!(!status.success);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_mock_resizer_injected_failures() {
        // Arrange
        let resizer = MockResizer {
            failing_sizes: vec![29],
            unlaunchable_sizes: vec![58],
            ..MockResizer::default()
        };

        // Act
        let failed = resizer.resize(Path::new("a"), 29, Path::new("b")).unwrap();
        let launch = resizer.resize(Path::new("a"), 58, Path::new("b"));

        // Assert
        assert_eq!(failed, ResizeStatus::failed(Some(1)));
        assert!(matches!(launch, Err(ResizeError::Launch { .. })));
        assert_eq!(resizer.calls().len(), 2);
    }
}
