use async_trait::async_trait;
use sba_view::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock SnapshotReader serving in-memory beans and applications
pub struct MockSnapshotReader {
    beans: Vec<Bean>,
    applications: Vec<Application>,
    should_fail: bool,
    reads: AtomicUsize,
}

impl MockSnapshotReader {
    pub fn with_beans(beans: Vec<Bean>) -> Self {
        Self {
            beans,
            applications: Vec::new(),
            should_fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_applications(applications: Vec<Application>) -> Self {
        Self {
            beans: Vec::new(),
            applications,
            should_fail: false,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            beans: Vec::new(),
            applications: Vec::new(),
            should_fail: true,
            reads: AtomicUsize::new(0),
        }
    }

    /// How often a snapshot was requested
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SnapshotReader for MockSnapshotReader {
    async fn read_beans(&self) -> Result<Vec<Bean>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock snapshot reader failure");
        }
        Ok(self.beans.clone())
    }

    async fn read_applications(&self) -> Result<Vec<Application>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            anyhow::bail!("Mock snapshot reader failure");
        }
        Ok(self.applications.clone())
    }

    fn describe(&self) -> String {
        "mock snapshot".to_string()
    }
}
