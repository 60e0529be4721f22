//! Pipeline-level error type (§7).

use thiserror::Error;
use vista_core::CoreError;

/// A named pipeline stage, used both to report which stage emptied the
/// pipeline (§7's `EmptyPipeline`) and in observer callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Candidates,
    Visibility,
    Cluster,
    Drivability,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Candidates => "candidates",
            Stage::Visibility => "visibility",
            Stage::Cluster => "cluster",
            Stage::Drivability => "drivability",
        };
        write!(f, "{name}")
    }
}

/// Top-level error returned by [`crate::run_pipeline`] and
/// [`crate::run_pipeline_cancellable`].
///
/// `EmptyPipeline` is deliberately *not* a variant here. Per §7 it "is not
/// an error state but a distinct success variant carrying which stage
/// emptied the pipeline" — so it is carried on
/// [`crate::PipelineOutput::empty_stage`] inside the `Ok` value instead of
/// forcing every caller to match on `Err` for what is really a success
/// outcome with an empty result list.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CoreError),

    #[error("pipeline cancelled")]
    Cancelled,

    #[error("internal pipeline invariant violated: {0}")]
    Internal(String),
}

/// Shorthand result type for `vista-pipeline`.
pub type PipelineResult<T> = Result<T, PipelineError>;
