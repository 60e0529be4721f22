//! `vista-cluster` — the Cluster Reducer (CR).
//!
//! Bins candidates (with their traced metrics) into a configurable square
//! grid and keeps the highest-elevation survivor per occupied bin. See
//! [`reduce_clusters`] for the tie-break rule.

mod reduce;

#[cfg(test)]
mod tests;

pub use reduce::reduce_clusters;
