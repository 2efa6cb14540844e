//! ApplyDesignUseCase: turns one design file into every icon and logo the app uses.
//!
//! # The four steps
//!
//! ```text
//! logo_design_<N>.png
//!   ├─ A. 13 × resize ──► <icon dir>/Icon-<size>.png     (per-size failures tolerated)
//!   ├─ B.  3 × resize ──► <logo dir>/AppLogo[@2x|@3x].png (launch failure aborts)
//!   ├─ C. rename logo_no_bg.png ──► logo_backup_<N>.png   (only if present)
//!   └─ D. copy design ──► logo_no_bg.png                  (failure reported, not raised)
//! ```
//!
//! Nothing is touched unless the design file exists.  There is no rollback:
//! if step B aborts, the icons written by step A stay on disk, and if step D
//! fails, the backup made by step C stays in place.
//!
//! The resizing itself is delegated to an [`ImageResizer`]; in production that
//! is the macOS `sips` tool (see `infrastructure::resizer::sips`).

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use logo_core::{
    backup_file_name, design_file_name, icon_file_name, DesignNumber, LogoScale,
    DEFAULT_LOGO_FILE, ICON_SIZES,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::assets::{AssetDirs, AssetStore};

// ── Resizer seam ──────────────────────────────────────────────────────────────

/// Exit status of one resize invocation that did launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeStatus {
    pub success: bool,
    /// Process exit code, if the process exited normally.
    pub code: Option<i32>,
}

impl ResizeStatus {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failed(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// The resize utility could not be run at all.
#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Produces a `size`×`size` copy of `source` at `dest`.
///
/// `Ok` means the tool ran, whatever its exit status; `Err` means it never ran.
#[cfg_attr(test, mockall::automock)]
pub trait ImageResizer {
    fn resize(&self, source: &Path, size: u32, dest: &Path) -> Result<ResizeStatus, ResizeError>;
}

// ── Outcome types ─────────────────────────────────────────────────────────────

/// What happened to a single icon size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconStatus {
    Written,
    /// The tool ran but exited unsuccessfully.
    ToolFailed { code: Option<i32> },
    /// The tool could not be launched.
    LaunchFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconOutcome {
    pub size: u32,
    pub file_name: String,
    pub status: IconStatus,
}

/// Everything a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub design: DesignNumber,
    pub icons: Vec<IconOutcome>,
    /// Backup written in step C, if a default logo existed.
    pub backup: Option<PathBuf>,
    /// The default logo written in step D.
    pub promoted: PathBuf,
}

impl ApplyReport {
    /// Number of icon sizes that were not regenerated.
    pub fn failed_icon_count(&self) -> usize {
        self.icons
            .iter()
            .filter(|i| i.status != IconStatus::Written)
            .count()
    }
}

#[derive(Debug)]
pub enum ApplyOutcome {
    Applied(ApplyReport),
    /// The design file is absent; nothing was modified.
    DesignFileMissing { design_file: PathBuf },
    /// Step B could not launch the resizer; steps C and D were skipped.
    LogoUpdateFailed {
        design: DesignNumber,
        icons: Vec<IconOutcome>,
        error: ResizeError,
    },
    /// Step D could not copy the design over the default logo.
    PromotionFailed {
        design: DesignNumber,
        icons: Vec<IconOutcome>,
        backup: Option<PathBuf>,
        error: ApplyError,
    },
}

impl ApplyOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ApplyOutcome::Applied(_))
    }
}

/// File-system failure while moving the default logo around (steps C and D).
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("failed to back up {from} as {to}: {source}")]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {from} to {to}: {source}")]
    Promote {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ── Use case ──────────────────────────────────────────────────────────────────

/// The Apply Design use case.
pub struct ApplyDesignUseCase {
    resizer: Arc<dyn ImageResizer>,
    store: Arc<dyn AssetStore>,
    dirs: AssetDirs,
}

impl ApplyDesignUseCase {
    pub fn new(resizer: Arc<dyn ImageResizer>, store: Arc<dyn AssetStore>, dirs: AssetDirs) -> Self {
        Self {
            resizer,
            store,
            dirs,
        }
    }

    /// Runs steps A–D for `design`.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Backup`] when renaming the default logo fails.
    /// Resize and copy failures are reported through [`ApplyOutcome`].
    pub fn apply(&self, design: DesignNumber) -> Result<ApplyOutcome, ApplyError> {
        let design_file = PathBuf::from(design_file_name(design));
        if !self.store.exists(&design_file) {
            warn!(file = %design_file.display(), "design file not found");
            return Ok(ApplyOutcome::DesignFileMissing { design_file });
        }

        info!(%design, "applying design");
        let source = self.store.resolve(&design_file);

        let icons = self.regenerate_icons(&source);

        if let Err(error) = self.regenerate_logos(&source) {
            warn!("in-app logo update aborted: {error}");
            return Ok(ApplyOutcome::LogoUpdateFailed {
                design,
                icons,
                error,
            });
        }

        let backup = self.backup_default_logo(design)?;
        let promoted = match self.promote(&design_file) {
            Ok(promoted) => promoted,
            Err(error) => {
                warn!("default logo not replaced: {error}");
                return Ok(ApplyOutcome::PromotionFailed {
                    design,
                    icons,
                    backup,
                    error,
                });
            }
        };

        info!(%design, "design applied");
        Ok(ApplyOutcome::Applied(ApplyReport {
            design,
            icons,
            backup,
            promoted,
        }))
    }

    /// Step A.  Never aborts early.
    fn regenerate_icons(&self, source: &Path) -> Vec<IconOutcome> {
        ICON_SIZES
            .iter()
            .map(|&size| {
                let file_name = icon_file_name(size);
                let dest = self.store.resolve(&self.dirs.icon_dir.join(&file_name));
                let status = match self.resizer.resize(source, size, &dest) {
                    Ok(s) if s.success => IconStatus::Written,
                    Ok(s) => {
                        warn!(size, code = ?s.code, "icon resize exited unsuccessfully");
                        IconStatus::ToolFailed { code: s.code }
                    }
                    Err(e) => {
                        warn!(size, "icon resize could not run: {e}");
                        IconStatus::LaunchFailed {
                            reason: e.to_string(),
                        }
                    }
                };
                IconOutcome {
                    size,
                    file_name,
                    status,
                }
            })
            .collect()
    }

    /// Step B.  Exit statuses are not checked; only a launch failure counts.
    fn regenerate_logos(&self, source: &Path) -> Result<(), ResizeError> {
        for scale in LogoScale::ALL {
            let dest = self.store.resolve(&self.dirs.logo_dir.join(scale.file_name()));
            let status = self.resizer.resize(source, scale.pixels(), &dest)?;
            debug!(scale = scale.factor(), ?status, "in-app logo resized");
        }
        Ok(())
    }

    /// Step C.  Keyed by the design being applied; an older backup with the
    /// same number is replaced.
    fn backup_default_logo(&self, design: DesignNumber) -> Result<Option<PathBuf>, ApplyError> {
        let current = PathBuf::from(DEFAULT_LOGO_FILE);
        if !self.store.exists(&current) {
            debug!("no default logo to back up");
            return Ok(None);
        }

        let backup = PathBuf::from(backup_file_name(design));
        self.store
            .rename(&current, &backup)
            .map_err(|source| ApplyError::Backup {
                from: current.clone(),
                to: backup.clone(),
                source,
            })?;
        info!(backup = %backup.display(), "backed up default logo");
        Ok(Some(backup))
    }

    /// Step D.
    fn promote(&self, design_file: &Path) -> Result<PathBuf, ApplyError> {
        let target = PathBuf::from(DEFAULT_LOGO_FILE);
        self.store
            .copy(design_file, &target)
            .map_err(|source| ApplyError::Promote {
                from: design_file.to_path_buf(),
                to: target.clone(),
                source,
            })?;
        Ok(target)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
