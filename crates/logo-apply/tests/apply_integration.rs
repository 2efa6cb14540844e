//! Integration tests for the apply flow.
//!
//! These tests exercise the application layer end-to-end against a real
//! temporary working directory: `ApplyDesignUseCase` + `LocalAssetStore` +
//! `MockResizer` (which copies the design file instead of resizing it).

use std::path::{Path, PathBuf};
use std::sync::Arc;

use logo_apply::application::apply_design::{ApplyDesignUseCase, ApplyOutcome, IconStatus};
use logo_apply::application::assets::AssetDirs;
use logo_apply::application::list_designs::list_designs;
use logo_apply::infrastructure::resizer::mock::MockResizer;
use logo_apply::infrastructure::storage::local::LocalAssetStore;
use logo_core::{DesignCatalog, DesignNumber, ICON_SIZES};
use uuid::Uuid;

// ── Fixture ───────────────────────────────────────────────────────────────────

/// A throwaway working directory with the two asset directories in place.
struct Workspace {
    root: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let root = std::env::temp_dir().join(format!("logo_apply_it_{}", Uuid::new_v4()));
        let dirs = AssetDirs::default();
        std::fs::create_dir_all(root.join(&dirs.icon_dir)).unwrap();
        std::fs::create_dir_all(root.join(&dirs.logo_dir)).unwrap();
        Self { root }
    }

    fn write(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.root.join(name), bytes).unwrap();
    }

    fn read(&self, name: impl AsRef<Path>) -> Option<Vec<u8>> {
        std::fs::read(self.root.join(name)).ok()
    }

    fn icon_path(&self, size: u32) -> PathBuf {
        AssetDirs::default().icon_dir.join(format!("Icon-{size}.png"))
    }

    fn logo_path(&self, name: &str) -> PathBuf {
        AssetDirs::default().logo_dir.join(name)
    }

    fn use_case(&self, resizer: Arc<MockResizer>) -> ApplyDesignUseCase {
        ApplyDesignUseCase::new(
            resizer,
            Arc::new(LocalAssetStore::new(&self.root)),
            AssetDirs::default(),
        )
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        std::fs::remove_dir_all(&self.root).ok();
    }
}

fn design(n: u8) -> DesignNumber {
    n.to_string().parse().unwrap()
}

// ── Listing ───────────────────────────────────────────────────────────────────

#[test]
fn test_listing_reports_exists_exactly_for_present_design_files() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_1.png", b"1");
    ws.write("logo_design_7.png", b"7");
    ws.write("logo_design_9.png", b"not in catalog");

    // Act
    let rows = list_designs(&DesignCatalog::standard(), &LocalAssetStore::new(&ws.root));

    // Assert
    assert_eq!(rows.len(), 7);
    for row in rows {
        let n = row.design.number.get();
        assert_eq!(row.file_present, n == 1 || n == 7, "design {n}");
    }
}

// ── Apply ─────────────────────────────────────────────────────────────────────

#[test]
fn test_apply_writes_all_icons_and_logos_and_backs_up_default() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_5.png", b"design-five");
    ws.write("logo_no_bg.png", b"previous-logo");
    let resizer = Arc::new(MockResizer::new());

    // Act
    let outcome = ws.use_case(Arc::clone(&resizer)).apply(design(5)).unwrap();

    // Assert
    assert!(outcome.is_success());
    for size in ICON_SIZES {
        assert_eq!(ws.read(ws.icon_path(size)), Some(b"design-five".to_vec()), "Icon-{size}");
    }
    for name in ["AppLogo.png", "AppLogo@2x.png", "AppLogo@3x.png"] {
        assert_eq!(ws.read(ws.logo_path(name)), Some(b"design-five".to_vec()), "{name}");
    }
    assert_eq!(resizer.calls().len(), 16);
    assert_eq!(ws.read("logo_backup_5.png"), Some(b"previous-logo".to_vec()));
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"design-five".to_vec()));
    assert!(ws.read("logo_design_5.png").is_some(), "design file must be kept");
}

#[test]
fn test_apply_without_default_logo_creates_no_backup() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_2.png", b"design-two");

    // Act
    let outcome = ws.use_case(Arc::new(MockResizer::new())).apply(design(2)).unwrap();

    // Assert
    let ApplyOutcome::Applied(report) = outcome else {
        panic!("expected success");
    };
    assert_eq!(report.backup, None);
    assert!(ws.read("logo_backup_2.png").is_none());
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"design-two".to_vec()));
}

#[test]
fn test_apply_missing_design_file_modifies_nothing() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_no_bg.png", b"previous-logo");
    let resizer = Arc::new(MockResizer::new());

    // Act
    let outcome = ws.use_case(Arc::clone(&resizer)).apply(design(3)).unwrap();

    // Assert
    assert!(matches!(outcome, ApplyOutcome::DesignFileMissing { .. }));
    assert!(resizer.calls().is_empty());
    assert!(ws.read(ws.icon_path(20)).is_none());
    assert!(ws.read("logo_backup_3.png").is_none());
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"previous-logo".to_vec()));
}

#[test]
fn test_reapplying_same_design_overwrites_backup_silently() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_4.png", b"design-four");
    ws.write("logo_no_bg.png", b"original");
    let uc = ws.use_case(Arc::new(MockResizer::new()));

    // Act
    assert!(uc.apply(design(4)).unwrap().is_success());
    assert_eq!(ws.read("logo_backup_4.png"), Some(b"original".to_vec()));
    assert!(uc.apply(design(4)).unwrap().is_success());

    // Assert: the second run replaced the backup with the first run's logo
    assert_eq!(ws.read("logo_backup_4.png"), Some(b"design-four".to_vec()));
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"design-four".to_vec()));
}

#[test]
fn test_backup_is_keyed_by_applied_design_not_replaced_one() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_3.png", b"design-three");
    ws.write("logo_design_6.png", b"design-six");
    let uc = ws.use_case(Arc::new(MockResizer::new()));

    // Act
    uc.apply(design(3)).unwrap();
    uc.apply(design(6)).unwrap();

    // Assert: design 3's logo ends up in logo_backup_6.png
    assert!(ws.read("logo_backup_3.png").is_none());
    assert_eq!(ws.read("logo_backup_6.png"), Some(b"design-three".to_vec()));
}

#[test]
fn test_icon_failures_do_not_stop_other_sizes_or_fail_run() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_1.png", b"design-one");
    let resizer = Arc::new(MockResizer {
        failing_sizes: vec![40],
        unlaunchable_sizes: vec![152],
        ..MockResizer::default()
    });

    // Act
    let outcome = ws.use_case(Arc::clone(&resizer)).apply(design(1)).unwrap();

    // Assert
    let ApplyOutcome::Applied(report) = outcome else {
        panic!("icon failures must not fail the run");
    };
    assert_eq!(report.failed_icon_count(), 2);
    assert!(ws.read(ws.icon_path(40)).is_none());
    assert!(ws.read(ws.icon_path(152)).is_none());
    assert!(ws.read(ws.icon_path(1024)).is_some(), "sizes after a failure still run");
    assert_eq!(resizer.calls().len(), 16);
}

#[test]
fn test_missing_icon_directory_is_per_size_failure_only() {
    // Arrange: remove the icon set directory
    let ws = Workspace::new();
    std::fs::remove_dir_all(ws.root.join(AssetDirs::default().icon_dir)).unwrap();
    ws.write("logo_design_2.png", b"design-two");

    // Act
    let outcome = ws.use_case(Arc::new(MockResizer::new())).apply(design(2)).unwrap();

    // Assert
    let ApplyOutcome::Applied(report) = outcome else {
        panic!("expected success");
    };
    assert!(report
        .icons
        .iter()
        .all(|i| matches!(i.status, IconStatus::ToolFailed { .. })));
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"design-two".to_vec()));
}

#[test]
fn test_logo_launch_failure_keeps_icons_and_default_logo() {
    // Arrange
    let ws = Workspace::new();
    ws.write("logo_design_7.png", b"design-seven");
    ws.write("logo_no_bg.png", b"previous-logo");
    let resizer = Arc::new(MockResizer {
        unlaunchable_sizes: vec![100],
        ..MockResizer::default()
    });

    // Act
    let outcome = ws.use_case(Arc::clone(&resizer)).apply(design(7)).unwrap();

    // Assert: no rollback of step A, steps C and D skipped
    assert!(!outcome.is_success());
    assert!(matches!(outcome, ApplyOutcome::LogoUpdateFailed { .. }));
    assert_eq!(ws.read(ws.icon_path(20)), Some(b"design-seven".to_vec()));
    assert!(ws.read(ws.logo_path("AppLogo@2x.png")).is_none());
    assert_eq!(resizer.calls().len(), 14);
    assert_eq!(ws.read("logo_no_bg.png"), Some(b"previous-logo".to_vec()));
    assert!(ws.read("logo_backup_7.png").is_none());
}
