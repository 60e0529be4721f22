//! `vista-pipeline` — the Pipeline Orchestrator (PO, §4.6).
//!
//! Sequences Candidate Detection -> Visibility Tracing -> Cluster
//! Reduction -> Drivability Scoring -> Composite Ranking, short-circuiting
//! the moment a stage yields zero survivors. This is the crate a caller
//! depends on directly; every other `vista-*` crate is an implementation
//! detail reachable through it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use vista_pipeline::run_pipeline;
//!
//! let output = run_pipeline(&grid, &roads, &request)?;
//! match output.empty_stage {
//!     Some(stage) => println!("no viewpoints survived past the {stage} stage"),
//!     None => {
//!         for scored in &output.results {
//!             println!("score {:.3} at {}", scored.score, scored.candidate.position());
//!         }
//!     }
//! }
//! ```
//!
//! # Cargo features
//!
//! | Flag       | Effect                                                          |
//! |------------|-------------------------------------------------------------------|
//! | `parallel` | Forwards to `vista-visibility/parallel` (Rayon ray casting).       |
//! | `fx-hash`  | Forwards to `vista-cluster/fx-hash` (FxHash bin map).               |

mod cancel;
mod error;
mod observer;
mod pipeline;

#[cfg(test)]
mod scenarios;

pub use cancel::CancellationToken;
pub use error::{PipelineError, PipelineResult, Stage};
pub use observer::{NoopObserver, PipelineObserver};
pub use pipeline::{run_pipeline, run_pipeline_cancellable, PipelineOutput, StageCounts};
