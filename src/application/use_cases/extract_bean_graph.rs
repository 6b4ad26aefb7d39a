use crate::application::dto::{BeanGraphRequest, BeanGraphResponse};
use crate::application::read_models::{ReadModelBuilder, ViewMetadata};
use crate::bean_graph::services::{BeanSelector, GraphExtractor};
use crate::ports::outbound::{ProgressReporter, SnapshotReader};
use crate::shared::error::ViewError;
use crate::shared::Result;
use std::cell::Cell;

/// ExtractBeanGraphUseCase - Builds the bean dependency view of a snapshot
///
/// # Type Parameters
/// * `SR` - SnapshotReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExtractBeanGraphUseCase<SR, PR> {
    snapshot_reader: SR,
    progress_reporter: PR,
}

impl<SR, PR> ExtractBeanGraphUseCase<SR, PR>
where
    SR: SnapshotReader,
    PR: ProgressReporter,
{
    pub fn new(snapshot_reader: SR, progress_reporter: PR) -> Self {
        Self {
            snapshot_reader,
            progress_reporter,
        }
    }

    /// Executes the bean graph use case
    ///
    /// Patterns are validated before the snapshot is read. Patterns that
    /// select nothing are reported as warnings and returned in the response.
    pub async fn execute(&self, request: BeanGraphRequest) -> Result<BeanGraphResponse> {
        let selector = BeanSelector::new(request.bean_patterns.clone()).map_err(|e| {
            ViewError::Validation {
                message: e.to_string(),
            }
        })?;

        self.progress_reporter.report(&format!(
            "🔍 Reading beans from {}...",
            self.snapshot_reader.describe()
        ));
        let beans = self.snapshot_reader.read_beans().await?;
        self.progress_reporter
            .report(&format!("✅ Snapshot contains {} beans", beans.len()));

        let matched = Cell::new(0usize);
        let graph = GraphExtractor::extract(&beans, |bean| {
            let selected = selector.matches(bean);
            if selected {
                matched.set(matched.get() + 1);
            }
            selected
        });

        let unmatched_patterns = selector.unmatched_patterns();
        for pattern in &unmatched_patterns {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: bean pattern '{}' did not match any bean",
                pattern
            ));
        }

        let read_model = ReadModelBuilder::build_bean_graph(
            graph,
            request.bean_patterns,
            beans.len(),
            matched.get(),
            ViewMetadata::generate(),
        );
        self.progress_reporter.report(&format!(
            "📊 Graph view: {} beans, {} edges",
            read_model.summary.included_beans, read_model.summary.edges
        ));

        Ok(BeanGraphResponse::new(read_model, unmatched_patterns))
    }
}
