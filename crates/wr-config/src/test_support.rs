//! Scratch directory trees for discovery tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A temporary directory tree, removed on drop.
pub struct Tree {
    /// Backing directory.
    root: TempDir,
}

impl Tree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the top of the tree.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates `rel` (and its parents) inside the tree.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let dir = self.root.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes a `.wr.toml` with `toml` into `rel`, an empty string meaning the top.
    pub fn config(&self, rel: &str, toml: &str) -> PathBuf {
        let path = self.dir(rel).join(CONFIG_FILENAME);
        fs::write(&path, toml).unwrap();
        path
    }
}
