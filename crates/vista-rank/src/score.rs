//! Composite scoring and final ranking (§4.5).

use vista_access::AccessPoint;
use vista_core::{TerrainCandidate, VisibilityRequest};
use vista_visibility::VisibilityMetrics;

/// A fully-scored candidate: the bundled record the pipeline returns.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredCandidate {
    pub candidate: TerrainCandidate,
    pub metrics: VisibilityMetrics,
    pub access: AccessPoint,
    pub score: f64,
}

/// Score every candidate per §4.5's formula, sort descending with the
/// specified tie-break chain, and truncate to `request.results_limit`.
///
/// ```text
/// dist_score   = min(1, max_distance_m / (min_visibility_m * 1.5))
/// fov_score    = min(1, fov_deg / max(1, min_fov_deg))
/// walk_penalty = max(0, 1 - walk_minutes / max_walk_minutes)
/// elev_bonus   = tanh(elevation_m / 500)
/// score        = 0.40*dist_score + 0.30*fov_score + 0.20*walk_penalty + 0.10*elev_bonus
/// ```
pub fn rank_candidates(
    candidates: Vec<(TerrainCandidate, VisibilityMetrics, AccessPoint)>,
    request: &VisibilityRequest,
) -> Vec<ScoredCandidate> {
    let mut scored: Vec<ScoredCandidate> = candidates
        .into_iter()
        .map(|(candidate, metrics, access)| {
            let score = composite_score(&candidate, &metrics, &access, request);
            ScoredCandidate {
                candidate,
                metrics,
                access,
                score,
            }
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap()
            .then_with(|| b.metrics.max_distance_m.partial_cmp(&a.metrics.max_distance_m).unwrap())
            .then_with(|| b.candidate.elevation_m.partial_cmp(&a.candidate.elevation_m).unwrap())
            .then_with(|| (a.candidate.row, a.candidate.col).cmp(&(b.candidate.row, b.candidate.col)))
    });

    scored.truncate(request.results_limit);
    scored
}

fn composite_score(
    candidate: &TerrainCandidate,
    metrics: &VisibilityMetrics,
    access: &AccessPoint,
    request: &VisibilityRequest,
) -> f64 {
    let dist_score = (metrics.max_distance_m / (request.min_visibility_m * 1.5)).min(1.0);
    let fov_score = (metrics.fov_deg / request.min_fov_deg.max(1.0)).min(1.0);
    let walk_penalty = (1.0 - access.walk_minutes / request.max_walk_minutes).max(0.0);
    let elev_bonus = (candidate.elevation_m / 500.0).tanh();

    0.40 * dist_score + 0.30 * fov_score + 0.20 * walk_penalty + 0.10 * elev_bonus
}
