//! Drivable road geometry.

use crate::error::{CoreError, CoreResult};
use crate::geo::ProjectedPoint;

/// An ordered polyline of projected points; each consecutive pair is a
/// straight drivable segment.
///
/// Surface/class tagging usable for upstream drivability filtering is not
/// represented here — by the time a `RoadSegment` reaches this crate it has
/// already been filtered to drivable surfaces by the road loader (§6).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSegment {
    points: Vec<ProjectedPoint>,
}

impl RoadSegment {
    /// # Errors
    /// Returns [`CoreError::InvalidRoad`] if fewer than two points are given.
    pub fn new(points: Vec<ProjectedPoint>) -> CoreResult<Self> {
        if points.len() < 2 {
            return Err(CoreError::InvalidRoad(format!(
                "a road segment needs at least 2 points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    #[inline]
    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    /// Iterate over the straight sub-segments `(a, b)` between consecutive
    /// points.
    #[inline]
    pub fn legs(&self) -> impl Iterator<Item = (ProjectedPoint, ProjectedPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}
