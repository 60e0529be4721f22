use vista_core::TerrainCandidate;
use vista_visibility::VisibilityMetrics;

use crate::reduce_clusters;

fn candidate(row: usize, col: usize, x: f64, y: f64, elevation_m: f64) -> TerrainCandidate {
    TerrainCandidate {
        row,
        col,
        x,
        y,
        elevation_m,
        prominence_m: 0.0,
    }
}

fn metrics(max_distance_m: f64) -> VisibilityMetrics {
    VisibilityMetrics {
        rays: Vec::new(),
        max_distance_m,
        mean_distance_m: 0.0,
        median_distance_m: 0.0,
        cleared_ray_count: 1,
        fov_deg: 0.0,
    }
}

#[test]
fn single_candidate_survives_alone() {
    let input = vec![(candidate(0, 0, 10.0, 10.0, 100.0), metrics(500.0))];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 1);
}

#[test]
fn two_candidates_in_same_bin_keep_the_taller() {
    let input = vec![
        (candidate(0, 0, 10.0, 10.0, 100.0), metrics(500.0)),
        (candidate(0, 1, 20.0, 20.0, 150.0), metrics(400.0)),
    ];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0.elevation_m, 150.0);
}

#[test]
fn candidates_in_different_bins_both_survive() {
    let input = vec![
        (candidate(0, 0, 10.0, 10.0, 100.0), metrics(500.0)),
        (candidate(10, 10, 1010.0, 1010.0, 150.0), metrics(400.0)),
    ];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 2);
}

#[test]
fn elevation_tie_breaks_on_max_distance() {
    let input = vec![
        (candidate(0, 0, 10.0, 10.0, 100.0), metrics(500.0)),
        (candidate(0, 1, 20.0, 20.0, 100.0), metrics(900.0)),
    ];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].1.max_distance_m, 900.0);
}

#[test]
fn elevation_and_distance_tie_breaks_on_lowest_row_col() {
    let input = vec![
        (candidate(5, 5, 10.0, 10.0, 100.0), metrics(500.0)),
        (candidate(1, 1, 20.0, 20.0, 100.0), metrics(500.0)),
    ];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 1);
    assert_eq!((out[0].0.row, out[0].0.col), (1, 1));
}

#[test]
fn negative_coordinates_bin_correctly() {
    // floor(-1.0 / 250.0) should place these in the same bin as
    // coordinates just below zero, not silently truncate toward zero.
    let input = vec![
        (candidate(0, 0, -10.0, -10.0, 100.0), metrics(500.0)),
        (candidate(0, 1, -20.0, -20.0, 120.0), metrics(500.0)),
    ];
    let out = reduce_clusters(input, 250.0);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].0.elevation_m, 120.0);
}
