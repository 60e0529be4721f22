//! Spatial index over road legs for nearest-point-on-polyline queries.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use vista_core::{ProjectedPoint, RoadSegment};

/// One segment ("leg") of a road polyline, tagged with its position in
/// input order for tie-breaking.
#[derive(Clone, Copy, Debug)]
struct LegEntry {
    a: ProjectedPoint,
    b: ProjectedPoint,
    order: usize,
}

impl LegEntry {
    fn closest_point(&self, query: [f64; 2]) -> ProjectedPoint {
        closest_point_on_segment(self.a, self.b, query)
    }
}

impl RTreeObject for LegEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.a.x, self.a.y], [self.b.x, self.b.y])
    }
}

impl PointDistance for LegEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let closest = self.closest_point(*point);
        let dx = closest.x - point[0];
        let dy = closest.y - point[1];
        dx * dx + dy * dy
    }
}

fn closest_point_on_segment(a: ProjectedPoint, b: ProjectedPoint, query: [f64; 2]) -> ProjectedPoint {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        (((query[0] - a.x) * abx + (query[1] - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    ProjectedPoint::new(a.x + t * abx, a.y + t * aby)
}

/// A spatially indexed drivable road network: the flattened collection of
/// road legs, queryable for the nearest point on any leg to a given
/// candidate.
pub struct RoadNetwork {
    index: RTree<LegEntry>,
}

impl RoadNetwork {
    /// Build the index from road segments in input order. Each segment's
    /// consecutive point pairs become one leg; legs are numbered
    /// sequentially across all segments, in the order encountered, so
    /// `nearest_point`'s tie-break matches "first in input order wins".
    pub fn build(roads: &[RoadSegment]) -> Self {
        let mut entries = Vec::new();
        let mut order = 0usize;
        for road in roads {
            for (a, b) in road.legs() {
                entries.push(LegEntry { a, b, order });
                order += 1;
            }
        }
        RoadNetwork {
            index: RTree::bulk_load(entries),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.index.size() == 0
    }

    /// Nearest point on any road leg to `p`, with the Euclidean distance in
    /// projected meters. `None` if the network has no legs.
    ///
    /// Exact distance ties are broken by lowest `order` (first segment leg
    /// encountered while building the network).
    pub fn nearest_point(&self, p: ProjectedPoint) -> Option<(ProjectedPoint, f64)> {
        let query = [p.x, p.y];
        let mut best: Option<(f64, usize, ProjectedPoint)> = None;

        for entry in self.index.nearest_neighbor_iter(&query) {
            let d2 = entry.distance_2(&query);
            match best {
                Some((best_d2, _, _)) if d2 > best_d2 => break,
                Some((best_d2, best_order, _)) if d2 == best_d2 => {
                    if entry.order < best_order {
                        best = Some((d2, entry.order, entry.closest_point(query)));
                    }
                }
                _ => best = Some((d2, entry.order, entry.closest_point(query))),
            }
        }

        best.map(|(d2, _, pt)| (pt, d2.sqrt()))
    }
}
