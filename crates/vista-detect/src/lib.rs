//! `vista-detect` — the Candidate Detector (CD).
//!
//! Scans a (optionally resampled and smoothed) terrain grid for strict
//! local maxima and emits one [`TerrainCandidate`][vista_core::TerrainCandidate]
//! per surviving cell. See [`detect_candidates`] for the algorithm.

mod detect;


pub use detect::detect_candidates;
