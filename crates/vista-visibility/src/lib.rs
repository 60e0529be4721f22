//! `vista-visibility` — the Visibility Tracer (VT).
//!
//! Casts a fan of `rays_full_circle` rays from each candidate, applies the
//! synthetic near-field obstruction model, and aggregates the result into a
//! [`VisibilityMetrics`] record. Dominant cost and dominant complexity of
//! the pipeline.
//!
//! Enable the `parallel` feature to cast candidates' ray fans across
//! Rayon's thread pool; [`trace_all`] re-establishes a deterministic
//! candidate order regardless.

mod ray;
mod trace;


pub use ray::{cast_ray, RayResult};
pub use trace::{trace_all, trace_candidate, VisibilityMetrics};
