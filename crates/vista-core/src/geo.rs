//! Projected-plane coordinate type and distance helpers.
//!
//! `ProjectedPoint` holds coordinates in a single caller-chosen projected
//! CRS (UTM-like, meters) — never latitude/longitude. Reprojection from
//! geographic coordinates happens upstream of this crate and is out of
//! scope here.

/// A 2-D point in a projected CRS, in meters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in meters — exact in a projected CRS, unlike
    /// geographic-coordinate distance which requires a great-circle formula.
    #[inline]
    pub fn distance_m(self, other: ProjectedPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn distance_sq_m(self, other: ProjectedPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl std::fmt::Display for ProjectedPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
