//! Directory-backed asset store.

use std::io;
use std::path::{Path, PathBuf};

use crate::application::assets::AssetStore;

/// Resolves every relative path against `root`.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
}

impl LocalAssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetStore for LocalAssetStore {
    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }

    fn exists(&self, relative: &Path) -> bool {
        self.resolve(relative).exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(self.resolve(from), self.resolve(to))
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(self.resolve(from), self.resolve(to)).map(|_| ())
    }
}
