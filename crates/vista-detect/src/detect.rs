//! Local-maxima candidate detection (§4.1).

use vista_core::{CoreResult, TerrainCandidate, TerrainGrid, VisibilityRequest, VisibilityRequestDefaults};

/// 3x3 discrete approximation of a sigma ~= 1 cell Gaussian kernel.
const GAUSSIAN_3X3: [[f64; 3]; 3] = [
    [1.0, 2.0, 1.0],
    [2.0, 4.0, 2.0],
    [1.0, 2.0, 1.0],
];

/// Detect candidate viewpoints on `grid` per the request's resample factor.
///
/// Algorithm (§4.1):
/// 1. Optionally resample the grid by `request.resolution_scale`.
/// 2. Apply a lightweight Gaussian smoothing pass to suppress single-pixel
///    spikes (peak *selection* only — recorded elevations are unsmoothed).
/// 3. For each interior cell, keep it if its smoothed elevation equals the
///    max over its `(2k+1)^2` window and strictly exceeds at least one
///    neighbor in that window.
/// 4. Break plateau ties by lowest `(row, col)`; emit only the winner.
pub fn detect_candidates(grid: &TerrainGrid, request: &VisibilityRequest) -> CoreResult<Vec<TerrainCandidate>> {
    let working = grid.resampled(request.resolution_scale)?;
    let k = neighborhood_radius_cells(grid.cell_size_m(), working.cell_size_m());

    let rows = working.rows();
    let cols = working.cols();
    if rows <= 2 * k || cols <= 2 * k {
        return Ok(Vec::new());
    }

    let smoothed = gaussian_smooth(&working);

    // Pass 1: cells satisfying the strict-local-max criterion.
    let mut is_peak = vec![false; rows * cols];
    for r in k..(rows - k) {
        for c in k..(cols - k) {
            if working.elevation(r, c).is_none() {
                continue; // candidate cell itself is no-data: skip (§4.1 failure policy)
            }
            let Some(center) = smoothed[r * cols + c] else {
                continue;
            };

            let mut window_max = f64::NEG_INFINITY;
            let mut strictly_exceeds_one = false;
            for dr in 0..=(2 * k) {
                for dc in 0..=(2 * k) {
                    let rr = r + dr - k;
                    let cc = c + dc - k;
                    let neighbor = smoothed[rr * cols + cc].unwrap_or(f64::NEG_INFINITY);
                    if neighbor > window_max {
                        window_max = neighbor;
                    }
                    if (rr, cc) != (r, c) && neighbor < center {
                        strictly_exceeds_one = true;
                    }
                }
            }

            if center == window_max && strictly_exceeds_one {
                is_peak[r * cols + c] = true;
            }
        }
    }

    // Pass 2: break plateau ties — a peak cell is suppressed if a lower
    // (row, col) peak with an identical smoothed value lies in its window.
    let mut candidates = Vec::new();
    for r in k..(rows - k) {
        for c in k..(cols - k) {
            if !is_peak[r * cols + c] {
                continue;
            }
            let center = smoothed[r * cols + c].unwrap();

            let mut suppressed = false;
            'window: for dr in 0..=(2 * k) {
                for dc in 0..=(2 * k) {
                    let rr = r + dr - k;
                    let cc = c + dc - k;
                    if (rr, cc) == (r, c) || !is_peak[rr * cols + cc] {
                        continue;
                    }
                    if (rr, cc) < (r, c) && smoothed[rr * cols + cc] == Some(center) {
                        suppressed = true;
                        break 'window;
                    }
                }
            }
            if suppressed {
                continue;
            }

            let elevation_m = working.elevation(r, c).unwrap();
            let mut window_min = f64::INFINITY;
            for dr in 0..=(2 * k) {
                for dc in 0..=(2 * k) {
                    let rr = r + dr - k;
                    let cc = c + dc - k;
                    if let Some(v) = working.elevation(rr, cc) {
                        if v < window_min {
                            window_min = v;
                        }
                    }
                }
            }
            let prominence_m = elevation_m - window_min;

            let pos = working.cell_center(r, c);
            candidates.push(TerrainCandidate {
                row: r,
                col: c,
                x: pos.x,
                y: pos.y,
                elevation_m,
                prominence_m,
            });
        }
    }

    Ok(candidates)
}

/// Scale the default neighborhood radius so it covers roughly the same
/// physical footprint after resampling.
fn neighborhood_radius_cells(base_cell_size_m: f64, resampled_cell_size_m: f64) -> usize {
    let base_radius = VisibilityRequestDefaults::NEIGHBORHOOD_RADIUS_CELLS as f64;
    let physical_m = base_radius * base_cell_size_m;
    ((physical_m / resampled_cell_size_m).round() as i64).max(1) as usize
}

/// Apply the 3x3 Gaussian kernel, skipping (and renormalizing around)
/// no-data neighbors. A cell with no valid neighbors (including itself) is
/// `None` in the output.
fn gaussian_smooth(grid: &TerrainGrid) -> Vec<Option<f64>> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut out = vec![None; rows * cols];

    for r in 0..rows {
        for c in 0..cols {
            let mut weighted_sum = 0.0;
            let mut weight_total = 0.0;
            for (dr, row_weights) in GAUSSIAN_3X3.iter().enumerate() {
                let rr = r as isize + dr as isize - 1;
                if rr < 0 || rr as usize >= rows {
                    continue;
                }
                for (dc, &weight) in row_weights.iter().enumerate() {
                    let cc = c as isize + dc as isize - 1;
                    if cc < 0 || cc as usize >= cols {
                        continue;
                    }
                    if let Some(v) = grid.elevation(rr as usize, cc as usize) {
                        weighted_sum += v * weight;
                        weight_total += weight;
                    }
                }
            }
            if weight_total > 0.0 {
                out[r * cols + c] = Some(weighted_sum / weight_total);
            }
        }
    }
    out
}
