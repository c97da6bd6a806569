use async_trait::async_trait;
use std::io;
use std::path::PathBuf;

/// Trait for named-file access with an existence check and a suspending read.
///
/// The read yields the worker back to the runtime for the duration of the
/// I/O wait; nothing here blocks the calling thread.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Whether the named file exists
    async fn exists(&self, name: &str) -> bool;

    /// Read the whole file as UTF-8 text
    async fn read_to_string(&self, name: &str) -> io::Result<String>;
}

/// File store resolving names under a root directory via `tokio::fs`
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn exists(&self, name: &str) -> bool {
        tokio::fs::try_exists(self.resolve(name))
            .await
            .unwrap_or(false)
    }

    async fn read_to_string(&self, name: &str) -> io::Result<String> {
        tokio::fs::read_to_string(self.resolve(name)).await
    }
}
