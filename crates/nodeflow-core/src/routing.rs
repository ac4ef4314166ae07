//! Edge path computation between anchor points.
//!
//! [`route`] is a pure function: given two resolved anchor positions and a
//! style family it produces the drawable path, with no memory between
//! calls. Hosts recompute every visible edge whenever node geometry moves.

use kurbo::{BezPath, CubicBez, Line, ParamCurveNearest, PathEl, Point};
use serde::{Deserialize, Serialize};

/// Fraction of the endpoint distance used for control and elbow placement.
const CONTROL_FRACTION: f64 = 0.3;

/// Cap on the perpendicular bias applied to curved edges.
const MAX_PERPENDICULAR_OFFSET: f64 = 60.0;

/// Accuracy for nearest-point queries during hit testing.
const NEAREST_ACCURACY: f64 = 1e-6;

/// Width of the invisible interaction region drawn along an edge.
pub const HIT_REGION_WIDTH: f64 = 20.0;

/// Requested edge style family.
///
/// `SmoothStep` and `Dashed` reuse the `Default` curved geometry; `Dashed`
/// additionally carries a dash pattern through the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EdgeStyleKind {
    /// Curved cubic path.
    #[default]
    Default,
    /// Single line segment.
    Straight,
    /// Two-segment polyline with one elbow on the dominant axis.
    Step,
    /// Alias for the curved path.
    SmoothStep,
    /// Curved path rendered with a dashed stroke.
    Dashed,
}

impl EdgeStyleKind {
    /// Whether this kind shares the curved cubic geometry.
    pub fn is_curved(self) -> bool {
        matches!(self, Self::Default | Self::SmoothStep | Self::Dashed)
    }
}

/// A routed edge: the drawable path plus its interaction width.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgePath {
    /// Drawing commands for the visible stroke.
    pub path: BezPath,
    /// Width of the enlarged hit region following the same path.
    pub hit_width: f64,
}

impl EdgePath {
    /// Distance from a point to the nearest point on the path.
    pub fn distance_to(&self, point: Point) -> f64 {
        let mut best = f64::INFINITY;
        let mut subpath_start = Point::ZERO;
        let mut current = Point::ZERO;
        for el in self.path.elements() {
            match *el {
                PathEl::MoveTo(p) => {
                    subpath_start = p;
                    current = p;
                    best = best.min(current.distance(point));
                }
                PathEl::LineTo(p) => {
                    let nearest = Line::new(current, p).nearest(point, NEAREST_ACCURACY);
                    best = best.min(nearest.distance_sq.sqrt());
                    current = p;
                }
                PathEl::CurveTo(c1, c2, p) => {
                    let nearest =
                        CubicBez::new(current, c1, c2, p).nearest(point, NEAREST_ACCURACY);
                    best = best.min(nearest.distance_sq.sqrt());
                    current = p;
                }
                PathEl::QuadTo(_, p) => {
                    current = p;
                }
                PathEl::ClosePath => {
                    let nearest = Line::new(current, subpath_start).nearest(point, NEAREST_ACCURACY);
                    best = best.min(nearest.distance_sq.sqrt());
                    current = subpath_start;
                }
            }
        }
        best
    }

    /// Whether a point falls inside the interaction region.
    pub fn hit_test(&self, point: Point) -> bool {
        self.distance_to(point) <= self.hit_width / 2.0
    }
}

/// Route an edge between two resolved anchor positions.
///
/// Identical inputs always produce identical paths. Coincident endpoints
/// yield a degenerate zero-length path with finite coordinates.
pub fn route(source: Point, target: Point, kind: EdgeStyleKind) -> EdgePath {
    let dx = target.x - source.x;
    let dy = target.y - source.y;
    let dist = dx.hypot(dy);
    // Guard the normalized direction when the endpoints coincide.
    let (ux, uy) = if dist > 0.0 {
        (dx / dist, dy / dist)
    } else {
        (0.0, 0.0)
    };
    let dr = dist * CONTROL_FRACTION;

    let mut path = BezPath::new();
    path.move_to(source);
    match kind {
        EdgeStyleKind::Straight => {
            path.line_to(target);
        }
        EdgeStyleKind::Step => {
            // Dominant axis decides orientation; ties go horizontal-first.
            // The elbow sits 30% of the distance from the source along the
            // dominant axis.
            let elbow = if dx.abs() >= dy.abs() {
                Point::new(source.x + ux * dr, target.y - uy * dr)
            } else {
                Point::new(target.x - ux * dr, source.y + uy * dr)
            };
            path.line_to(elbow);
            path.line_to(target);
        }
        EdgeStyleKind::Default | EdgeStyleKind::SmoothStep | EdgeStyleKind::Dashed => {
            // The perpendicular bias along the left normal keeps the two
            // opposite-direction curves between a shared pair of anchors
            // visually distinct.
            let offset = MAX_PERPENDICULAR_OFFSET.min(dist * 0.25);
            let c1 = Point::new(
                source.x + ux * dr - uy * offset,
                source.y + uy * dr + ux * offset,
            );
            let c2 = Point::new(target.x - ux * dr, target.y - uy * dr);
            path.curve_to(c1, c2, target);
        }
    }

    EdgePath {
        path,
        hit_width: HIT_REGION_WIDTH,
    }
}
