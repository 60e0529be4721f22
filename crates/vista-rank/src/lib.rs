//! `vista-rank` — the Composite Ranker (RK).
//!
//! Computes the 0-1 composite score for every surviving candidate, sorts
//! descending with the §4.5 tie-break chain, and truncates to the
//! requested `results_limit`.

mod score;


pub use score::{rank_candidates, ScoredCandidate};
