use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A rendered PDF living in a transient file. The file is removed when the value is
/// dropped, whichever way the request that produced it ends.
#[derive(Debug)]
pub struct RenderedDocument {
    path: PathBuf,
}

impl RenderedDocument {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> anyhow::Result<Vec<u8>> {
        tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read rendered document {}", self.path.display()))
    }
}

impl Drop for RenderedDocument {
    fn drop(&mut self) {
        // Blocking removal of one small file, so the file is gone by the time `drop` returns.
        match std::fs::remove_file(&self.path) {
            Ok(()) => tracing::info!(path = %self.path.display(), "Rendered document deleted"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(
                path = %self.path.display(),
                "Failed to delete rendered document: {err}"
            ),
        }
    }
}
