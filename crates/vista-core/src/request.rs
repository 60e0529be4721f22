//! The frozen per-run visibility request configuration.

use crate::error::{CoreError, CoreResult};

/// A validated, frozen snapshot of run configuration.
///
/// Constructed once per run by an upstream config loader (out of scope
/// here) and never mutated. Every pipeline stage reads from `&self`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityRequest {
    pub observer_eye_height_m: f64,
    pub obstruction_start_m: f64,
    pub obstruction_height_m: f64,

    /// Already converted from miles upstream.
    pub min_visibility_m: f64,
    pub min_fov_deg: f64,
    pub azimuth_deg: f64,
    pub azimuth_tolerance_deg: f64,

    pub rays_full_circle: u32,
    pub max_visibility_m: f64,

    pub cluster_grid_m: f64,
    /// DEM resample factor: `<1.0` sharpens, `>1.0` coarsens, `1.0` is a
    /// no-op.
    pub resolution_scale: f64,

    pub walking_speed_kmh: f64,
    pub driving_speed_kmh: f64,
    pub max_walk_minutes: f64,
    pub max_drive_minutes: Option<f64>,

    pub results_limit: usize,
}

impl VisibilityRequest {
    /// Defaults per §3: `rays_full_circle = 72`, `max_visibility_m =
    /// 100_000`, `cluster_grid_m = 250`, `resolution_scale = 1.0`.
    pub fn builder_defaults() -> VisibilityRequestDefaults {
        VisibilityRequestDefaults
    }

    /// Validate the request per §7's `InvalidInput` rules.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidRequest`] if `rays_full_circle < 4`,
    /// `min_fov_deg < 0`, any numeric field is non-finite, or a speed /
    /// distance field that the scoring and walking-time formulas divide by
    /// is non-positive.
    pub fn validate(&self) -> CoreResult<()> {
        let finite_fields: [(&str, f64); 12] = [
            ("observer_eye_height_m", self.observer_eye_height_m),
            ("obstruction_start_m", self.obstruction_start_m),
            ("obstruction_height_m", self.obstruction_height_m),
            ("min_visibility_m", self.min_visibility_m),
            ("min_fov_deg", self.min_fov_deg),
            ("azimuth_deg", self.azimuth_deg),
            ("azimuth_tolerance_deg", self.azimuth_tolerance_deg),
            ("max_visibility_m", self.max_visibility_m),
            ("cluster_grid_m", self.cluster_grid_m),
            ("resolution_scale", self.resolution_scale),
            ("walking_speed_kmh", self.walking_speed_kmh),
            ("max_walk_minutes", self.max_walk_minutes),
        ];
        for (name, value) in finite_fields {
            if !value.is_finite() {
                return Err(CoreError::InvalidRequest(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if !self.driving_speed_kmh.is_finite() {
            return Err(CoreError::InvalidRequest(
                "driving_speed_kmh must be finite".into(),
            ));
        }
        if let Some(m) = self.max_drive_minutes {
            if !m.is_finite() {
                return Err(CoreError::InvalidRequest(
                    "max_drive_minutes must be finite".into(),
                ));
            }
        }

        if self.rays_full_circle < 4 {
            return Err(CoreError::InvalidRequest(format!(
                "rays_full_circle must be >= 4, got {}",
                self.rays_full_circle
            )));
        }
        if self.min_fov_deg < 0.0 {
            return Err(CoreError::InvalidRequest(format!(
                "min_fov_deg must be >= 0, got {}",
                self.min_fov_deg
            )));
        }
        if self.max_visibility_m <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "max_visibility_m must be positive".into(),
            ));
        }
        if self.cluster_grid_m <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "cluster_grid_m must be positive".into(),
            ));
        }
        if self.resolution_scale <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "resolution_scale must be positive".into(),
            ));
        }
        if self.walking_speed_kmh <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "walking_speed_kmh must be positive".into(),
            ));
        }
        if self.driving_speed_kmh <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "driving_speed_kmh must be positive".into(),
            ));
        }
        if self.max_walk_minutes <= 0.0 {
            return Err(CoreError::InvalidRequest(
                "max_walk_minutes must be positive".into(),
            ));
        }

        Ok(())
    }
}

/// Marker type exposing the §3 defaults as associated constants, without
/// requiring callers to build a throwaway instance just to read them.
pub struct VisibilityRequestDefaults;

impl VisibilityRequestDefaults {
    pub const RAYS_FULL_CIRCLE: u32 = 72;
    pub const MAX_VISIBILITY_M: f64 = 100_000.0;
    pub const CLUSTER_GRID_M: f64 = 250.0;
    pub const RESOLUTION_SCALE: f64 = 1.0;
    pub const NEIGHBORHOOD_RADIUS_CELLS: usize = 3;
}
