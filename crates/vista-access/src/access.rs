//! Walking/driving time estimation and the reachability filter (§4.4).

use vista_core::{ProjectedPoint, TerrainCandidate, VisibilityRequest};
use vista_visibility::VisibilityMetrics;

use crate::network::RoadNetwork;

/// Fixed detour factor applied to straight-line distance to approximate
/// road sinuosity when estimating driving time.
const DRIVE_DETOUR_FACTOR: f64 = 1.35;

/// The nearest road access point for a candidate, and the derived travel
/// times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessPoint {
    pub x: f64,
    pub y: f64,
    pub distance_m: f64,
    pub walk_minutes: f64,
    pub drive_minutes_estimate: f64,
}

impl AccessPoint {
    fn new(point: ProjectedPoint, distance_m: f64, request: &VisibilityRequest) -> Self {
        let walk_minutes = (distance_m / 1000.0) / request.walking_speed_kmh * 60.0;
        let drive_minutes_estimate = (distance_m * DRIVE_DETOUR_FACTOR / 1000.0) / request.driving_speed_kmh * 60.0;
        AccessPoint {
            x: point.x,
            y: point.y,
            distance_m,
            walk_minutes,
            drive_minutes_estimate,
        }
    }

    fn within_thresholds(&self, request: &VisibilityRequest) -> bool {
        if self.walk_minutes > request.max_walk_minutes {
            return false;
        }
        if let Some(max_drive) = request.max_drive_minutes {
            if self.drive_minutes_estimate > max_drive {
                return false;
            }
        }
        true
    }
}

/// Score drivability for every candidate: find its nearest road access
/// point, derive travel times, and drop candidates that fail the walk/drive
/// thresholds. A candidate with no reachable road (empty `network`) is
/// dropped.
pub fn score_access(
    network: &RoadNetwork,
    candidates: Vec<(TerrainCandidate, VisibilityMetrics)>,
    request: &VisibilityRequest,
) -> Vec<(TerrainCandidate, VisibilityMetrics, AccessPoint)> {
    candidates
        .into_iter()
        .filter_map(|(candidate, metrics)| {
            let (point, distance_m) = network.nearest_point(candidate.position())?;
            let access = AccessPoint::new(point, distance_m, request);
            access.within_thresholds(request).then_some((candidate, metrics, access))
        })
        .collect()
}
