//! Temp-directory fixtures for share-root scenarios.

use std::path::{Path, PathBuf};

use handoff_host::RootedShareBroker;
use tempfile::TempDir;

/// A temporary directory registered as the only shareable root.
pub struct ShareRootFixture {
    dir: TempDir,
}

impl ShareRootFixture {
    /// Create the fixture directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = tempfile::Builder::new()
            .prefix("handoff-share-")
            .tempdir()
            .expect("create share root fixture");
        Self { dir }
    }

    /// The fixture root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A broker whose only registered root is the fixture directory.
    #[must_use]
    pub fn broker(&self) -> RootedShareBroker {
        RootedShareBroker::new(vec![self.dir.path().to_path_buf()])
    }

    /// Create a file under the root and return its absolute path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn create_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }
}

impl Default for ShareRootFixture {
    fn default() -> Self {
        Self::new()
    }
}
