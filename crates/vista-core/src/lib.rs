//! `vista-core` — foundational types for the scenic-viewpoint visibility
//! engine.
//!
//! This crate is a dependency of every other `vista-*` crate. It
//! intentionally has no `vista-*` dependencies and a minimal external one
//! (`thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|---------------------------------------------------------|
//! | [`geo`]       | `ProjectedPoint`, Euclidean distance                     |
//! | [`grid`]      | `TerrainGrid` — the immutable elevation raster           |
//! | [`roads`]     | `RoadSegment`                                            |
//! | [`candidate`] | `TerrainCandidate`                                       |
//! | [`request`]   | `VisibilityRequest`, its defaults and validation          |
//! | [`error`]     | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod candidate;
pub mod error;
pub mod geo;
pub mod grid;
pub mod request;
pub mod roads;


pub use candidate::TerrainCandidate;
pub use error::{CoreError, CoreResult};
pub use geo::ProjectedPoint;
pub use grid::TerrainGrid;
pub use request::{VisibilityRequest, VisibilityRequestDefaults};
pub use roads::RoadSegment;
