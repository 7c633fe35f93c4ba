// SPDX-License-Identifier: MIT OR Apache-2.0
//! Closed boundary paths produced by the shape generator.

use crate::geometry::{Angle, Point};
use serde::{Deserialize, Serialize};

/// Boundary of the region covered by an incoming color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RevealPath {
    /// Closed polygon. The last point connects back to the first.
    Polygon(Vec<Point>),
    /// Circular arc closed through its center (a full circle for a 360 degree sweep)
    Arc {
        /// Center of the circle
        center: Point,
        /// Radius
        radius: f32,
        /// Start angle, clockwise from the positive x axis
        start: Angle,
        /// Angular span
        sweep: Angle,
    },
}

impl RevealPath {
    /// Axis-aligned rectangle between two corners
    pub fn rectangle(min: Point, max: Point) -> Self {
        Self::Polygon(vec![
            min,
            Point::new(max.x, min.y),
            max,
            Point::new(min.x, max.y),
        ])
    }

    /// Full circle
    pub fn circle(center: Point, radius: f32) -> Self {
        Self::Arc {
            center,
            radius,
            start: Angle::ZERO,
            sweep: Angle::FULL_TURN,
        }
    }

    /// Enclosed area
    pub fn area(&self) -> f32 {
        match self {
            Self::Polygon(points) => shoelace_area(points),
            Self::Arc { radius, sweep, .. } => {
                let span = sweep.as_radians().abs().min(std::f32::consts::TAU);
                0.5 * radius * radius * span
            }
        }
    }

    /// Bounding box as `(min, max)` corners
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Self::Polygon(points) => {
                let Some(first) = points.first() else {
                    return (Point::default(), Point::default());
                };
                points.iter().skip(1).fold((*first, *first), |(min, max), p| {
                    (
                        Point::new(min.x.min(p.x), min.y.min(p.y)),
                        Point::new(max.x.max(p.x), max.y.max(p.y)),
                    )
                })
            }
            // Conservative: the whole circle
            Self::Arc { center, radius, .. } => (
                Point::new(center.x - radius, center.y - radius),
                Point::new(center.x + radius, center.y + radius),
            ),
        }
    }

    /// Flatten into polygon points.
    ///
    /// Arcs are approximated with `segments` chords (at least 3). Partial
    /// arcs include the center so the polygon stays closed as a pie slice.
    pub fn to_polygon(&self, segments: usize) -> Vec<Point> {
        match self {
            Self::Polygon(points) => points.clone(),
            Self::Arc { center, radius, start, sweep } => {
                let segments = segments.max(3);
                let full = sweep.as_degrees().abs() >= 360.0;
                let start = start.as_radians();
                let span = sweep.as_radians();

                let mut points = Vec::with_capacity(segments + 2);
                if !full {
                    points.push(*center);
                }
                // A full circle repeats its first point at the end; skip it
                let steps = if full { segments } else { segments + 1 };
                for i in 0..steps {
                    let theta = start + span * (i as f32 / segments as f32);
                    points.push(Point::new(
                        center.x + radius * theta.cos(),
                        center.y + radius * theta.sin(),
                    ));
                }
                points
            }
        }
    }
}

fn shoelace_area(points: &[Point]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    (twice_area / 2.0).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_area_and_bounds() {
        let path = RevealPath::rectangle(Point::new(10.0, 0.0), Point::new(30.0, 5.0));
        assert_eq!(path.area(), 100.0);
        assert_eq!(path.bounds(), (Point::new(10.0, 0.0), Point::new(30.0, 5.0)));
    }

    #[test]
    fn test_degenerate_polygon() {
        assert_eq!(RevealPath::Polygon(Vec::new()).area(), 0.0);
        assert_eq!(RevealPath::Polygon(vec![Point::new(1.0, 1.0)]).area(), 0.0);
        assert_eq!(
            RevealPath::Polygon(Vec::new()).bounds(),
            (Point::default(), Point::default())
        );
    }

    #[test]
    fn test_circle_area() {
        let path = RevealPath::circle(Point::new(0.0, 0.0), 2.0);
        assert!((path.area() - std::f32::consts::PI * 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_flatten_circle() {
        let path = RevealPath::circle(Point::new(5.0, 5.0), 1.0);
        let points = path.to_polygon(8);
        assert_eq!(points.len(), 8);
        assert!((points[0].x - 6.0).abs() < 1e-5);
        assert!((points[0].y - 5.0).abs() < 1e-5);
        // Octagon area is 2 * sqrt(2) for a unit circumradius
        let area = RevealPath::Polygon(points).area();
        assert!((area - 2.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn test_flatten_quarter_arc() {
        let path = RevealPath::Arc {
            center: Point::new(0.0, 0.0),
            radius: 1.0,
            start: Angle::ZERO,
            sweep: Angle(90.0),
        };
        let points = path.to_polygon(4);
        // center + 5 rim points
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point::new(0.0, 0.0));
        let last = points[5];
        assert!(last.x.abs() < 1e-5);
        assert!((last.y - 1.0).abs() < 1e-5);
    }
}
