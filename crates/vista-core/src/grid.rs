//! The terrain grid: an immutable, projected elevation raster.
//!
//! # Data layout
//!
//! `elevations` is stored as a single flat `Vec<f64>` in row-major order
//! (`elevations[row * cols + col]`), not `Vec<Vec<f64>>` — one contiguous
//! allocation keeps ray casting (§4.2) and local-maxima scanning (§4.1)
//! cache-friendly instead of chasing a pointer per row.
//!
//! Cell `(row, col)`'s center is at projected coordinates
//! `(origin_x + col * cell_size_m, origin_y + row * cell_size_m)`. The grid
//! has no rotation term — callers needing a rotated or skewed raster must
//! resample into this layout upstream.

use crate::error::{CoreError, CoreResult};
use crate::geo::ProjectedPoint;

/// An immutable, projected elevation raster.
///
/// Constructed once per run via [`TerrainGrid::new`] and never mutated
/// afterward — every pipeline stage only reads through `&TerrainGrid`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    elevations: Vec<f64>,
    rows: usize,
    cols: usize,
    origin_x: f64,
    origin_y: f64,
    cell_size_m: f64,
    /// Elevation value marking a no-data cell. Cells carrying this exact
    /// value are excluded from candidate detection and terminate ray
    /// interpolation at the previous valid step (§4.1, §4.2).
    nodata: f64,
}

impl TerrainGrid {
    /// Build a grid from a row-major flat elevation buffer.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGrid`] if `cell_size_m` is not positive
    /// and finite, if `rows` or `cols` is zero, or if `elevations.len() !=
    /// rows * cols`.
    pub fn new(
        elevations: Vec<f64>,
        rows: usize,
        cols: usize,
        origin_x: f64,
        origin_y: f64,
        cell_size_m: f64,
        nodata: f64,
    ) -> CoreResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidGrid(
                "grid must have at least one row and one column".into(),
            ));
        }
        if elevations.len() != rows * cols {
            return Err(CoreError::InvalidGrid(format!(
                "elevation buffer length {} does not match rows*cols = {}",
                elevations.len(),
                rows * cols
            )));
        }
        if !(cell_size_m.is_finite() && cell_size_m > 0.0) {
            return Err(CoreError::InvalidGrid(format!(
                "cell_size_m must be positive and finite, got {cell_size_m}"
            )));
        }
        if !(origin_x.is_finite() && origin_y.is_finite()) {
            return Err(CoreError::InvalidGrid(
                "origin_x/origin_y must be finite".into(),
            ));
        }

        Ok(Self {
            elevations,
            rows,
            cols,
            origin_x,
            origin_y,
            cell_size_m,
            nodata,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn cell_size_m(&self) -> f64 {
        self.cell_size_m
    }

    #[inline]
    pub fn nodata(&self) -> f64 {
        self.nodata
    }

    #[inline]
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Raw elevation at `(row, col)`, or `None` if out of bounds.
    ///
    /// Returns `Some(nodata)` for no-data cells; callers that need to
    /// exclude no-data must check [`TerrainGrid::is_nodata`] themselves or
    /// use [`TerrainGrid::elevation`] instead.
    #[inline]
    fn raw(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.elevations[row * self.cols + col])
    }

    #[inline]
    pub fn is_nodata(&self, value: f64) -> bool {
        value == self.nodata
    }

    /// Elevation at `(row, col)`, or `None` if out of bounds or no-data.
    #[inline]
    pub fn elevation(&self, row: usize, col: usize) -> Option<f64> {
        match self.raw(row, col) {
            Some(v) if !self.is_nodata(v) => Some(v),
            _ => None,
        }
    }

    /// Projected coordinates of the center of cell `(row, col)`.
    #[inline]
    pub fn cell_center(&self, row: usize, col: usize) -> ProjectedPoint {
        ProjectedPoint::new(
            self.origin_x + col as f64 * self.cell_size_m,
            self.origin_y + row as f64 * self.cell_size_m,
        )
    }

    /// Convert projected coordinates to continuous (row, col) grid space,
    /// without clamping or rounding.
    #[inline]
    fn world_to_grid(&self, p: ProjectedPoint) -> (f64, f64) {
        let col_f = (p.x - self.origin_x) / self.cell_size_m;
        let row_f = (p.y - self.origin_y) / self.cell_size_m;
        (row_f, col_f)
    }

    /// Bilinearly interpolated elevation at projected point `p`.
    ///
    /// Per §3's invariant, the sample point is clamped into the valid
    /// interior `[0, rows-1] x [0, cols-1]` before interpolating — queries
    /// outside the grid footprint read the edge value rather than
    /// panicking or extrapolating. Returns `None` if any of the four
    /// surrounding cells is no-data (the caller, typically the ray tracer,
    /// treats this as "interpolation failed here").
    pub fn sample_bilinear(&self, p: ProjectedPoint) -> Option<f64> {
        let (row_f, col_f) = self.world_to_grid(p);

        let row_f = row_f.clamp(0.0, (self.rows - 1) as f64);
        let col_f = col_f.clamp(0.0, (self.cols - 1) as f64);

        let r0 = (row_f.floor() as usize).min(self.rows - 1);
        let c0 = (col_f.floor() as usize).min(self.cols - 1);
        let r1 = (r0 + 1).min(self.rows - 1);
        let c1 = (c0 + 1).min(self.cols - 1);

        let ty = row_f - r0 as f64;
        let tx = col_f - c0 as f64;

        let e00 = self.elevation(r0, c0)?;
        let e10 = self.elevation(r0, c1)?;
        let e01 = self.elevation(r1, c0)?;
        let e11 = self.elevation(r1, c1)?;

        let top = e00 * (1.0 - tx) + e10 * tx;
        let bottom = e01 * (1.0 - tx) + e11 * tx;
        Some(top * (1.0 - ty) + bottom * ty)
    }

    /// Resample this grid by `scale` using bilinear sampling, per §4.1.
    ///
    /// `scale < 1.0` sharpens (more cells), `scale > 1.0` coarsens (fewer
    /// cells). A cell in the resampled grid falls at the same projected
    /// location its continuous coordinate maps to in the source grid.
    pub fn resampled(&self, scale: f64) -> CoreResult<TerrainGrid> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CoreError::InvalidGrid(format!(
                "resolution_scale must be positive and finite, got {scale}"
            )));
        }
        if (scale - 1.0).abs() < f64::EPSILON {
            return Ok(self.clone());
        }

        let new_cell_size = self.cell_size_m * scale;
        let new_rows = ((self.rows as f64 * self.cell_size_m) / new_cell_size)
            .floor()
            .max(1.0) as usize;
        let new_cols = ((self.cols as f64 * self.cell_size_m) / new_cell_size)
            .floor()
            .max(1.0) as usize;

        let mut out = vec![0.0; new_rows * new_cols];
        for r in 0..new_rows {
            for c in 0..new_cols {
                let world = ProjectedPoint::new(
                    self.origin_x + c as f64 * new_cell_size,
                    self.origin_y + r as f64 * new_cell_size,
                );
                out[r * new_cols + c] = self.sample_bilinear(world).unwrap_or(self.nodata);
            }
        }

        TerrainGrid::new(
            out,
            new_rows,
            new_cols,
            self.origin_x,
            self.origin_y,
            new_cell_size,
            self.nodata,
        )
    }
}
