//! Pipeline progress callbacks.
//!
//! The `rust_dt` framework this port follows expresses ambient run-time
//! visibility through a callback trait rather than a logging crate (see
//! `dt_sim::SimObserver`); this mirrors that shape instead of pulling in
//! `tracing`/`log`, which the corpus never reaches for.

use crate::error::Stage;
use crate::pipeline::PipelineOutput;

/// Callbacks invoked by [`crate::run_pipeline_cancellable`] at stage
/// boundaries.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
pub trait PipelineObserver {
    /// Called immediately before a stage begins work.
    fn on_stage_start(&mut self, _stage: Stage) {}

    /// Called after a stage completes, with the number of candidates that
    /// survived it.
    fn on_stage_complete(&mut self, _stage: Stage, _survivor_count: usize) {}

    /// Called once after the Composite Ranker produces its final output.
    /// Not called if an earlier stage emptied the pipeline or an error was
    /// returned.
    fn on_pipeline_end(&mut self, _output: &PipelineOutput) {}
}

/// A [`PipelineObserver`] that does nothing. Use when you need to call
/// [`crate::run_pipeline_cancellable`] but don't want progress callbacks.
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}
