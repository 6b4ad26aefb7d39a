use crate::bean_graph::domain::Bean;
use crate::instance_registry::domain::Application;
use crate::shared::Result;
use async_trait::async_trait;

/// SnapshotReader port for acquiring monitoring snapshots
///
/// Abstracts where a snapshot comes from (a saved JSON file, a live
/// monitoring server) and its document format. Each call returns a fresh
/// snapshot; implementations keep no state between calls.
///
/// # Async Support
/// Implementations must be `Send + Sync` so use cases can run on a
/// multi-threaded runtime.
#[async_trait]
pub trait SnapshotReader: Send + Sync {
    /// Reads the beans of one application context hierarchy
    ///
    /// # Returns
    /// The beans in document order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The snapshot cannot be read or fetched
    /// - The document is neither a bean list nor an actuator beans document
    async fn read_beans(&self) -> Result<Vec<Bean>>;

    /// Reads the registered applications and their instances
    ///
    /// # Errors
    /// Returns an error if the snapshot cannot be read or parsed
    async fn read_applications(&self) -> Result<Vec<Application>>;

    /// Human readable origin of the snapshot for progress messages
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: SnapshotReader + ?Sized> SnapshotReader for Box<T> {
    async fn read_beans(&self) -> Result<Vec<Bean>> {
        (**self).read_beans().await
    }

    async fn read_applications(&self) -> Result<Vec<Application>> {
        (**self).read_applications().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
