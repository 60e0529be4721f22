//! The candidate record threaded through every downstream pipeline stage.

use crate::geo::ProjectedPoint;

/// A DEM cell identified as a local maximum, and thus a potential viewpoint.
///
/// Produced once by the Candidate Detector and moved (never copied-and
/// mutated-in-place) through Visibility Tracing, Cluster Reduction,
/// Drivability Scoring, and Composite Ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainCandidate {
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
    pub elevation_m: f64,
    /// Elevation minus the minimum elevation within the detection
    /// neighborhood. Tiebreak / informational only — not consumed by the
    /// composite scoring function (§4.5, §9).
    pub prominence_m: f64,
}

impl TerrainCandidate {
    #[inline]
    pub fn position(&self) -> ProjectedPoint {
        ProjectedPoint::new(self.x, self.y)
    }
}
