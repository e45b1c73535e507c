//! Filesystem existence probe backed by `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;
use handoff_core::FileProbe;

/// Probe that consults the real filesystem without blocking the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileProbe;

#[async_trait]
impl FileProbe for StdFileProbe {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::try_exists(path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_existing_and_missing_paths() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("report.pdf");
        tokio::fs::write(&file, b"pdf").await.expect("write file");

        let probe = StdFileProbe;
        assert!(probe.exists(&file).await);
        assert!(!probe.exists(&dir.path().join("missing.pdf")).await);
    }
}
