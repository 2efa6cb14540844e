//! Working-directory abstraction shared by the use cases.
//!
//! All paths handed to an [`AssetStore`] are relative to the directory the
//! tool was started in.  The production implementation
//! ([`crate::infrastructure::storage::local::LocalAssetStore`]) joins them onto
//! that directory; tests point it at a throwaway temp directory instead.

use std::io;
use std::path::{Path, PathBuf};

use logo_core::{DEFAULT_ICON_DIR, DEFAULT_LOGO_DIR};

/// File-system operations needed by the use cases.
pub trait AssetStore {
    /// Turns a working-directory-relative path into one usable by other processes.
    fn resolve(&self, relative: &Path) -> PathBuf;

    /// Returns `true` if anything (file or directory) exists at `relative`.
    fn exists(&self, relative: &Path) -> bool;

    /// Renames `from` to `to`, replacing `to` if it already exists.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copies the contents of `from` over `to`.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// The two asset-catalog directories written by the apply flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDirs {
    /// Receives `Icon-<size>.png`.
    pub icon_dir: PathBuf,
    /// Receives `AppLogo.png`, `AppLogo@2x.png`, `AppLogo@3x.png`.
    pub logo_dir: PathBuf,
}

impl Default for AssetDirs {
    fn default() -> Self {
        Self {
            icon_dir: PathBuf::from(DEFAULT_ICON_DIR),
            logo_dir: PathBuf::from(DEFAULT_LOGO_DIR),
        }
    }
}
