//! Grid-bin redundancy reduction (§4.3).

use vista_core::TerrainCandidate;
use vista_visibility::VisibilityMetrics;

#[cfg(feature = "fx-hash")]
type BinMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type BinMap<K, V> = std::collections::HashMap<K, V>;

/// Bin `candidates` into a `cluster_grid_m`-spaced square grid and keep one
/// survivor per occupied bin.
///
/// Survivor rule: greatest `elevation_m`; ties broken by greater
/// `max_distance_m`, then lower `(row, col)`. Output order is unspecified.
pub fn reduce_clusters(
    candidates: Vec<(TerrainCandidate, VisibilityMetrics)>,
    cluster_grid_m: f64,
) -> Vec<(TerrainCandidate, VisibilityMetrics)> {
    let mut bins: BinMap<(i64, i64), (TerrainCandidate, VisibilityMetrics)> = BinMap::default();

    for (candidate, metrics) in candidates {
        let key = bin_key(candidate.x, candidate.y, cluster_grid_m);
        match bins.get(&key) {
            None => {
                bins.insert(key, (candidate, metrics));
            }
            Some((incumbent, incumbent_metrics)) => {
                if beats(&candidate, &metrics, incumbent, incumbent_metrics) {
                    bins.insert(key, (candidate, metrics));
                }
            }
        }
    }

    bins.into_values().collect()
}

fn bin_key(x: f64, y: f64, cluster_grid_m: f64) -> (i64, i64) {
    ((x / cluster_grid_m).floor() as i64, (y / cluster_grid_m).floor() as i64)
}

fn beats(
    candidate: &TerrainCandidate,
    metrics: &VisibilityMetrics,
    incumbent: &TerrainCandidate,
    incumbent_metrics: &VisibilityMetrics,
) -> bool {
    if candidate.elevation_m != incumbent.elevation_m {
        return candidate.elevation_m > incumbent.elevation_m;
    }
    if metrics.max_distance_m != incumbent_metrics.max_distance_m {
        return metrics.max_distance_m > incumbent_metrics.max_distance_m;
    }
    (candidate.row, candidate.col) < (incumbent.row, incumbent.col)
}
