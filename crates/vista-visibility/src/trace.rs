//! Per-candidate ray-fan tracing and metric aggregation (§4.2).

use vista_core::{TerrainCandidate, TerrainGrid, VisibilityRequest};

use crate::ray::{cast_ray, RayResult};

/// The aggregated visibility record for one candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityMetrics {
    /// Ordered by azimuth, 0 degrees first.
    pub rays: Vec<RayResult>,
    pub max_distance_m: f64,
    pub mean_distance_m: f64,
    pub median_distance_m: f64,
    pub cleared_ray_count: u32,
    pub fov_deg: f64,
}

/// Cast the full ray fan for one candidate and aggregate it into
/// [`VisibilityMetrics`].
pub fn trace_candidate(grid: &TerrainGrid, candidate: &TerrainCandidate, request: &VisibilityRequest) -> VisibilityMetrics {
    let n = request.rays_full_circle;
    let step_width_deg = 360.0 / n as f64;

    let rays: Vec<RayResult> = (0..n)
        .map(|i| {
            let azimuth_deg = i as f64 * step_width_deg;
            cast_ray(grid, candidate, azimuth_deg, request)
        })
        .collect();

    let max_distance_m = rays.iter().map(|r| r.max_distance_m).fold(0.0, f64::max);
    let cleared_ray_count = rays.iter().filter(|r| r.cleared_moat).count() as u32;

    let in_sector_distances: Vec<f64> = rays
        .iter()
        .filter(|r| in_sector(r.azimuth_deg, request.azimuth_deg, request.azimuth_tolerance_deg))
        .map(|r| r.max_distance_m)
        .collect();

    let (mean_distance_m, median_distance_m) = if in_sector_distances.is_empty() {
        (0.0, 0.0)
    } else {
        (mean(&in_sector_distances), median(&in_sector_distances))
    };

    let fov_count = rays
        .iter()
        .filter(|r| {
            in_sector(r.azimuth_deg, request.azimuth_deg, request.azimuth_tolerance_deg)
                && r.max_distance_m >= request.min_visibility_m
        })
        .count();
    let fov_deg = step_width_deg * fov_count as f64;

    VisibilityMetrics {
        rays,
        max_distance_m,
        mean_distance_m,
        median_distance_m,
        cleared_ray_count,
        fov_deg,
    }
}

/// Trace every candidate, dropping any whose `cleared_ray_count` is zero
/// (§4.2 candidate rejection). Checked for cancellation once before work
/// begins; callers wanting per-candidate cancellation should chunk their
/// own candidate slices.
pub fn trace_all(
    grid: &TerrainGrid,
    candidates: &[TerrainCandidate],
    request: &VisibilityRequest,
) -> Vec<(TerrainCandidate, VisibilityMetrics)> {
    #[cfg(feature = "parallel")]
    let iter = {
        use rayon::prelude::*;
        candidates.par_iter()
    };
    #[cfg(not(feature = "parallel"))]
    let iter = candidates.iter();

    let mut traced: Vec<(TerrainCandidate, VisibilityMetrics)> = iter
        .map(|c| {
            let metrics = trace_candidate(grid, c, request);
            (*c, metrics)
        })
        .filter(|(_, metrics)| metrics.cleared_ray_count > 0)
        .collect();

    // Parallel iteration may reorder results; re-establish input order so
    // downstream stages see a deterministic sequence regardless of the
    // `parallel` feature.
    traced.sort_by(|(a, _), (b, _)| (a.row, a.col).cmp(&(b.row, b.col)));
    traced
}

fn in_sector(azimuth_deg: f64, center_deg: f64, tolerance_deg: f64) -> bool {
    let raw = (azimuth_deg - center_deg).abs();
    let angular_distance = raw.min(360.0 - raw);
    angular_distance <= tolerance_deg
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
