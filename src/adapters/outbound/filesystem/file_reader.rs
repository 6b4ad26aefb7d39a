use crate::adapters::outbound::parsers::{parse_applications, parse_beans};
use crate::bean_graph::domain::Bean;
use crate::instance_registry::domain::Application;
use crate::ports::outbound::SnapshotReader;
use crate::shared::error::ViewError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// FileSystemReader adapter for reading saved snapshots
///
/// This adapter implements the SnapshotReader port for JSON documents
/// saved from the actuator or the monitoring server.
pub struct FileSystemReader {
    snapshot_path: PathBuf,
}

impl FileSystemReader {
    pub fn new(snapshot_path: PathBuf) -> Self {
        Self { snapshot_path }
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot_path
    }

    /// Safely read the snapshot with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    fn safe_read_snapshot(&self) -> Result<String> {
        if !self.snapshot_path.exists() && fs::symlink_metadata(&self.snapshot_path).is_err() {
            return Err(ViewError::SnapshotNotFound {
                path: self.snapshot_path.clone(),
                suggestion: "Save the actuator or server response to a file and pass its path with --file".to_string(),
            }
            .into());
        }

        validate_regular_file(&self.snapshot_path, "snapshot file")?;

        fs::read_to_string(&self.snapshot_path).map_err(|e| {
            ViewError::FileReadError {
                path: self.snapshot_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl SnapshotReader for FileSystemReader {
    async fn read_beans(&self) -> Result<Vec<Bean>> {
        let content = self.safe_read_snapshot()?;
        parse_beans(&content, &self.describe())
    }

    async fn read_applications(&self) -> Result<Vec<Application>> {
        let content = self.safe_read_snapshot()?;
        parse_applications(&content, &self.describe())
    }

    fn describe(&self) -> String {
        self.snapshot_path.display().to_string()
    }
}
