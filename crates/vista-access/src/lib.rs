//! `vista-access` — the Drivability Scorer (DS).
//!
//! Finds each candidate's nearest point on the road network via an R-tree
//! spatial index over road legs, derives walking and driving time
//! estimates, and rejects candidates past the configured thresholds.

mod access;
mod network;


pub use access::{score_access, AccessPoint};
pub use network::RoadNetwork;
