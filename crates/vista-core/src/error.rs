//! Shared validation error type.
//!
//! Sub-crates may wrap `CoreError` as one variant of their own error enum
//! (via `#[from]`), or keep it separate. Both patterns are used downstream;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

/// Input validation failures shared by every pipeline stage.
///
/// These correspond to the `InvalidInput` error kind described for the
/// overall pipeline: malformed grids, roads, or request configuration
/// caught before any stage runs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid terrain grid: {0}")]
    InvalidGrid(String),

    #[error("invalid road segment: {0}")]
    InvalidRoad(String),

    #[error("invalid visibility request: {0}")]
    InvalidRequest(String),
}

/// Shorthand result type for `vista-core` and callers validating its types.
pub type CoreResult<T> = Result<T, CoreError>;
