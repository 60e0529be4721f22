//! Per-ray geometry and the horizon-angle visibility walk (§4.2).

use vista_core::{ProjectedPoint, TerrainCandidate, TerrainGrid, VisibilityRequest};

/// One ray's result: direction, how far it sees, and whether it cleared
/// the synthetic moat around the candidate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayResult {
    pub azimuth_deg: f64,
    pub max_distance_m: f64,
    pub cleared_moat: bool,
}

/// Cast a single ray from `candidate` at `azimuth_deg` (clockwise from
/// north) and apply the synthetic obstruction model.
///
/// This is the authoritative rule from §4.2:
///
/// 1. **Clearance pre-check** over moat samples (`d <= obstruction_start_m`,
///    including `d = 0`): the ray clears the moat iff some moat sample's
///    bare-terrain drop from the candidate is at least `obstruction_height_m
///    - observer_eye_height_m`. If none clears, the ray is blocked at the
///    tree wall (`max_distance_m = 0`).
/// 2. Otherwise, walk outward tracking the highest elevation angle seen so
///    far (`alpha_max`, canopy-augmented beyond the moat). A sample at
///    distance `d` is visible iff its elevation angle is `>= alpha_max`
///    (the angle seen by all closer samples); `max_distance_m` is the
///    farthest such visible sample.
///
/// No-data terrain terminates the ray at the previous valid step.
pub fn cast_ray(grid: &TerrainGrid, candidate: &TerrainCandidate, azimuth_deg: f64, request: &VisibilityRequest) -> RayResult {
    let delta = grid.cell_size_m();
    let theta = azimuth_deg.to_radians();
    let (dx, dy) = (theta.sin(), theta.cos());
    let origin = candidate.position();

    let sample_point = |step: i64| -> ProjectedPoint {
        let d = step as f64 * delta;
        ProjectedPoint::new(origin.x + d * dx, origin.y + d * dy)
    };

    if !clears_moat(grid, candidate, request, delta, sample_point) {
        return RayResult {
            azimuth_deg,
            max_distance_m: 0.0,
            cleared_moat: false,
        };
    }

    let e_obs = candidate.elevation_m + request.observer_eye_height_m;
    let max_steps = (request.max_visibility_m / delta).floor() as i64;

    let mut alpha_max = f64::NEG_INFINITY;
    let mut max_distance_m = 0.0;

    for s in 1..=max_steps {
        let d = s as f64 * delta;
        let Some(terrain_elev) = grid.sample_bilinear(sample_point(s)) else {
            break; // no-data: ray terminates at previous valid step
        };
        let canopy_elev = if d <= request.obstruction_start_m {
            terrain_elev
        } else {
            terrain_elev + request.obstruction_height_m
        };

        let alpha_s = (canopy_elev - e_obs) / d;
        if alpha_s >= alpha_max {
            max_distance_m = d;
        }
        alpha_max = alpha_max.max(alpha_s);
    }

    RayResult {
        azimuth_deg,
        max_distance_m,
        cleared_moat: true,
    }
}

fn clears_moat(
    grid: &TerrainGrid,
    candidate: &TerrainCandidate,
    request: &VisibilityRequest,
    delta: f64,
    sample_point: impl Fn(i64) -> ProjectedPoint,
) -> bool {
    let required_drop = request.obstruction_height_m - request.observer_eye_height_m;
    let max_moat_step = (request.obstruction_start_m / delta).floor() as i64;

    for s in 0..=max_moat_step {
        let Some(terrain_elev) = grid.sample_bilinear(sample_point(s)) else {
            continue;
        };
        let drop = candidate.elevation_m - terrain_elev;
        if drop >= required_drop {
            return true;
        }
    }
    false
}
