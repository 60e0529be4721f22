//! Integration tests over the full [`crate::run_pipeline`] entry point,
//! covering the seed scenarios S1-S6. Each builds its own synthetic 2 km x
//! 2 km, 10 m-cell terrain grid — these builders are test-only fixtures,
//! not production API.

use vista_core::{ProjectedPoint, RoadSegment, TerrainGrid, VisibilityRequest};

use crate::{run_pipeline, Stage};

const ROWS: usize = 201;
const COLS: usize = 201;
const CELL_SIZE_M: f64 = 10.0;
const BASE_ELEV_M: f64 = 100.0;

struct Hill {
    cx: f64,
    cy: f64,
    peak_elev_m: f64,
    slope_per_m: f64,
    /// `(distance from this hill's center at which a one-time cliff drop
    /// applies, drop magnitude in meters)`.
    cliff: Option<(f64, f64)>,
}

fn synthetic_grid(hills: &[Hill]) -> TerrainGrid {
    let mut elevations = vec![BASE_ELEV_M; ROWS * COLS];
    for r in 0..ROWS {
        for c in 0..COLS {
            let x = c as f64 * CELL_SIZE_M;
            let y = r as f64 * CELL_SIZE_M;
            let mut best = BASE_ELEV_M;
            for hill in hills {
                let d = ((x - hill.cx).powi(2) + (y - hill.cy).powi(2)).sqrt();
                let mut e = hill.peak_elev_m - hill.slope_per_m * d;
                if let Some((start, drop)) = hill.cliff {
                    if d >= start {
                        e -= drop;
                    }
                }
                if e > best {
                    best = e;
                }
            }
            elevations[r * COLS + c] = best;
        }
    }
    TerrainGrid::new(elevations, ROWS, COLS, 0.0, 0.0, CELL_SIZE_M, -9999.0).unwrap()
}

fn flat_grid() -> TerrainGrid {
    TerrainGrid::new(vec![BASE_ELEV_M; ROWS * COLS], ROWS, COLS, 0.0, 0.0, CELL_SIZE_M, -9999.0).unwrap()
}

fn center_point() -> (f64, f64) {
    ((COLS / 2) as f64 * CELL_SIZE_M, (ROWS / 2) as f64 * CELL_SIZE_M)
}

fn road_near(x: f64, y: f64) -> Vec<RoadSegment> {
    vec![RoadSegment::new(vec![ProjectedPoint::new(x - 20.0, y), ProjectedPoint::new(x + 20.0, y)]).unwrap()]
}

fn road_at_distance(from_x: f64, from_y: f64, distance_m: f64) -> Vec<RoadSegment> {
    let rx = from_x + distance_m;
    vec![RoadSegment::new(vec![ProjectedPoint::new(rx, from_y - 500.0), ProjectedPoint::new(rx, from_y + 500.0)]).unwrap()]
}

fn base_request() -> VisibilityRequest {
    VisibilityRequest {
        observer_eye_height_m: 1.8,
        obstruction_start_m: 10.0,
        obstruction_height_m: 0.0,
        min_visibility_m: 1609.34, // 1 mile, per spec
        min_fov_deg: 30.0,
        azimuth_deg: 0.0,
        azimuth_tolerance_deg: 180.0, // full circle in-sector, unless overridden
        rays_full_circle: 72,
        max_visibility_m: 2_000.0,
        cluster_grid_m: 250.0,
        resolution_scale: 1.0,
        walking_speed_kmh: 4.8,
        driving_speed_kmh: 50.0,
        max_walk_minutes: 60.0,
        max_drive_minutes: None,
        results_limit: 50,
    }
}

/// S1 — flat plain: no strict local maxima exist, so candidate detection
/// itself yields nothing.
#[test]
fn s1_flat_plain_yields_empty_pipeline_at_candidates() {
    let grid = flat_grid();
    let request = base_request();

    let output = run_pipeline(&grid, &[], &request).unwrap();
    assert_eq!(output.empty_stage, Some(Stage::Candidates));
    assert!(output.results.is_empty());
}

/// S2 — single conical hill, obstruction off: the summit is the sole
/// candidate, every ray clears the moat trivially (no canopy to clear),
/// and with a full-circle sector every ray counts toward `fov_deg`.
#[test]
fn s2_single_conical_hill_is_fully_visible() {
    let (cx, cy) = center_point();
    let grid = synthetic_grid(&[Hill {
        cx,
        cy,
        peak_elev_m: 300.0,
        slope_per_m: 0.05, // 50 m/km
        cliff: None,
    }]);
    let mut request = base_request();
    request.min_visibility_m = 500.0; // comfortably below the achieved distance
    request.obstruction_height_m = 0.0;
    let roads = road_near(cx, cy - 50.0);

    let output = run_pipeline(&grid, &roads, &request).unwrap();
    assert!(output.empty_stage.is_none(), "expected a surviving candidate, got {:?}", output.empty_stage);
    assert_eq!(output.results.len(), 1);
    let metrics = &output.results[0].metrics;
    assert_eq!(metrics.cleared_ray_count, request.rays_full_circle);
    assert_eq!(metrics.fov_deg, 360.0);
}

/// S3 — same hill, with a tree belt too close to the moat's clear zone: the
/// terrain drop inside `obstruction_start_m` never reaches the required
/// `obstruction_height_m - observer_eye_height_m`, so the moat never
/// clears and the candidate is rejected at the Visibility Tracer.
#[test]
fn s3_hill_with_tree_belt_fails_the_moat_clearance() {
    let (cx, cy) = center_point();
    let grid = synthetic_grid(&[Hill {
        cx,
        cy,
        peak_elev_m: 300.0,
        slope_per_m: 0.05,
        cliff: None,
    }]);
    let mut request = base_request();
    request.obstruction_start_m = 10.0;
    request.obstruction_height_m = 15.0;
    request.observer_eye_height_m = 1.8;
    let roads = road_near(cx, cy - 50.0);

    // Required drop is 15.0 - 1.8 = 13.2 m; the shallow 50 m/km slope only
    // drops ~0.5 m across the 10 m moat, well short.
    let output = run_pipeline(&grid, &roads, &request).unwrap();
    assert_eq!(output.empty_stage, Some(Stage::Visibility));
    assert!(output.results.is_empty());
}

/// S4 — same tree belt, but a steep cliff inside the moat gives one sample
/// a drop far exceeding the requirement, clearing every ray.
#[test]
fn s4_hill_with_cliff_clears_the_moat() {
    let (cx, cy) = center_point();
    let grid = synthetic_grid(&[Hill {
        cx,
        cy,
        peak_elev_m: 300.0,
        slope_per_m: 0.05,
        cliff: Some((5.0, 30.0)), // cliff is encountered at the d=10m moat sample
    }]);
    let mut request = base_request();
    request.obstruction_start_m = 10.0;
    request.obstruction_height_m = 15.0;
    request.observer_eye_height_m = 1.8;
    let roads = road_near(cx, cy - 50.0);

    let output = run_pipeline(&grid, &roads, &request).unwrap();
    assert!(output.empty_stage.is_none(), "expected the cliff to clear the moat, got {:?}", output.empty_stage);
    assert_eq!(output.results.len(), 1);
    assert!(output.results[0].metrics.cleared_ray_count > 0);
    let score = output.results[0].score;
    assert!((0.0..=1.0).contains(&score));
}

/// S5 — two hills close together: after grid-bin clustering, only the
/// higher of the two survives.
#[test]
fn s5_two_close_hills_reduce_to_one_survivor() {
    let (cx, cy) = center_point();
    let grid = synthetic_grid(&[
        Hill {
            cx,
            cy,
            peak_elev_m: 320.0,
            slope_per_m: 1.0, // steep, so the two footprints don't swallow each other
            cliff: None,
        },
        Hill {
            cx: cx + 100.0,
            cy,
            peak_elev_m: 300.0,
            slope_per_m: 1.0,
            cliff: None,
        },
    ]);
    let mut request = base_request();
    request.cluster_grid_m = 250.0;
    request.obstruction_height_m = 0.0;
    let roads = road_near(cx, cy - 50.0);

    let output = run_pipeline(&grid, &roads, &request).unwrap();
    assert!(output.stage_counts.candidates_detected >= 2);
    assert_eq!(output.stage_counts.cluster_survivors, 1);
    assert!(output.empty_stage.is_none());
    assert_eq!(output.results.len(), 1);
    // The higher peak (320 m) must be the survivor.
    assert!((output.results[0].candidate.elevation_m - 320.0).abs() < 1e-6);
}

/// S6 — a candidate far from any road: walking time exceeds
/// `max_walk_minutes`, so the Drivability Scorer rejects it.
#[test]
fn s6_road_far_candidate_fails_drivability() {
    let (cx, cy) = center_point();
    let grid = synthetic_grid(&[Hill {
        cx,
        cy,
        peak_elev_m: 300.0,
        slope_per_m: 0.05,
        cliff: None,
    }]);
    let mut request = base_request();
    request.obstruction_height_m = 0.0;
    request.walking_speed_kmh = 4.8;
    request.max_walk_minutes = 15.0;
    let roads = road_at_distance(cx, cy, 2000.0);

    // walk_minutes = (2000 / 1000) / 4.8 * 60 = 25 min > 15 min.
    let output = run_pipeline(&grid, &roads, &request).unwrap();
    assert_eq!(output.empty_stage, Some(Stage::Drivability));
    assert!(output.results.is_empty());
    assert_eq!(output.stage_counts.cluster_survivors, 1);
    assert_eq!(output.stage_counts.drivability_survivors, 0);
}
