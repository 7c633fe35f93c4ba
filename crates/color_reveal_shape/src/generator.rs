// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reveal path generation.

use crate::geometry::{Angle, Point, Rect};
use crate::kind::AnimationKind;
use crate::path::RevealPath;

/// Compute the region of `rect` covered by the incoming color at `progress`.
///
/// Pure and total: zero-sized rects give zero-area paths, and progress
/// outside `[0, 1]` gives geometry that under- or overshoots the rect.
/// Callers that care should clamp.
pub fn compute_path(rect: Rect, progress: f32, kind: AnimationKind) -> RevealPath {
    let w = rect.width;
    let h = rect.height;

    match kind {
        AnimationKind::LeftToRight => {
            RevealPath::rectangle(Point::new(0.0, 0.0), Point::new(w * progress, h))
        }
        AnimationKind::RightToLeft => {
            RevealPath::rectangle(Point::new(w - w * progress, 0.0), Point::new(w, h))
        }
        AnimationKind::TopToBottom => {
            RevealPath::rectangle(Point::new(0.0, 0.0), Point::new(w, h * progress))
        }
        AnimationKind::BottomToTop => {
            RevealPath::rectangle(Point::new(0.0, h - h * progress), Point::new(w, h))
        }
        AnimationKind::Circle => RevealPath::circle(rect.center(), progress * rect.half_diagonal()),
        AnimationKind::AngleSweep(angle) => match kind.cardinal_equivalent() {
            Some(cardinal) => compute_path(rect, progress, cardinal),
            None => corner_wedge(rect, progress, angle.normalized()),
        },
    }
}

/// Right-triangle wedge grown from a corner.
///
/// `angle` must be normalized and not a multiple of 90 degrees, which keeps
/// the reduced angle strictly inside (0, 90). Angles so close to a multiple
/// of 90 that the legs cannot be represented fall back to the nearest wipe.
fn corner_wedge(rect: Rect, progress: f32, angle: Angle) -> RevealPath {
    let w = rect.width;
    let h = rect.height;
    let degrees = angle.as_degrees();
    let reduced = degrees.rem_euclid(90.0);
    debug_assert!(reduced > 0.0 && reduced < 90.0);

    let quarter = if degrees > 270.0 {
        3
    } else if degrees > 180.0 {
        2
    } else if degrees > 90.0 {
        1
    } else {
        0
    };

    // The hypotenuse at full progress has the inverse slope and passes
    // through the corner opposite the anchor.
    let slope = reduced.to_radians().tan();
    let inverse_slope = -1.0 / slope;
    let intercept = h - inverse_slope * w;
    let full_x = intercept * slope;
    let full_y = intercept;

    // tan underflows near 0 and rounds past the pole near 90
    if !(slope > 0.0 && full_x.is_finite() && full_y.is_finite()) {
        let nearest = if reduced < 45.0 { quarter } else { quarter + 1 };
        return compute_path(rect, progress, AnimationKind::quarter_turn(nearest));
    }

    let leg_x = full_x * progress;
    let leg_y = full_y * progress;

    let (anchor, leg_x, leg_y) = match quarter {
        3 => (Point::new(0.0, h), leg_x, -leg_y),
        2 => (Point::new(w, h), -leg_x, -leg_y),
        1 => (Point::new(w, 0.0), -leg_x, leg_y),
        _ => (Point::new(0.0, 0.0), leg_x, leg_y),
    };

    RevealPath::Polygon(vec![
        anchor,
        Point::new(anchor.x + leg_x, anchor.y),
        Point::new(anchor.x, anchor.y + leg_y),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= EPSILON * b.abs().max(1.0)
    }

    fn assert_point(actual: Point, x: f32, y: f32) {
        assert!(
            approx(actual.x, x) && approx(actual.y, y),
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    fn polygon(path: &RevealPath) -> &[Point] {
        match path {
            RevealPath::Polygon(points) => points,
            RevealPath::Arc { .. } => panic!("expected a polygon, got {path:?}"),
        }
    }

    fn rects() -> Vec<Rect> {
        vec![
            Rect::new(100.0, 100.0),
            Rect::new(200.0, 100.0),
            Rect::new(37.5, 410.0),
            Rect::new(0.0, 50.0),
        ]
    }

    #[test]
    fn test_left_to_right_half() {
        let path = compute_path(Rect::new(200.0, 100.0), 0.5, AnimationKind::LeftToRight);
        assert_eq!(
            path,
            RevealPath::rectangle(Point::new(0.0, 0.0), Point::new(100.0, 100.0))
        );
    }

    #[test]
    fn test_cardinal_edges() {
        let rect = Rect::new(200.0, 100.0);

        let path = compute_path(rect, 0.25, AnimationKind::RightToLeft);
        assert_eq!(path.bounds(), (Point::new(150.0, 0.0), Point::new(200.0, 100.0)));

        let path = compute_path(rect, 0.25, AnimationKind::TopToBottom);
        assert_eq!(path.bounds(), (Point::new(0.0, 0.0), Point::new(200.0, 25.0)));

        let path = compute_path(rect, 0.25, AnimationKind::BottomToTop);
        assert_eq!(path.bounds(), (Point::new(0.0, 75.0), Point::new(200.0, 100.0)));
    }

    #[test]
    fn test_cardinal_endpoints() {
        for rect in rects() {
            for kind in AnimationKind::CARDINAL {
                assert_eq!(compute_path(rect, 0.0, kind).area(), 0.0, "{kind:?}");

                let full = compute_path(rect, 1.0, kind);
                assert_eq!(full.area(), rect.area(), "{kind:?}");
                assert_eq!(
                    full.bounds(),
                    (Point::new(0.0, 0.0), Point::new(rect.width, rect.height)),
                    "{kind:?}"
                );
            }
        }
    }

    #[test]
    fn test_circle() {
        let rect = Rect::new(100.0, 100.0);
        match compute_path(rect, 1.0, AnimationKind::Circle) {
            RevealPath::Arc { center, radius, sweep, .. } => {
                assert_eq!(center, Point::new(50.0, 50.0));
                assert!(approx(radius, 70.71));
                assert_eq!(sweep, Angle::FULL_TURN);
            }
            other => panic!("expected an arc, got {other:?}"),
        }

        match compute_path(rect, 0.0, AnimationKind::Circle) {
            RevealPath::Arc { radius, .. } => assert_eq!(radius, 0.0),
            other => panic!("expected an arc, got {other:?}"),
        }
    }

    #[test]
    fn test_circle_covers_corners() {
        let rect = Rect::new(300.0, 120.0);
        let (min, max) = compute_path(rect, 1.0, AnimationKind::Circle).bounds();
        let corner_distance = (150.0f32 * 150.0 + 60.0 * 60.0).sqrt();
        assert!(approx(max.x - 150.0, corner_distance));
        assert!(approx(60.0 - min.y, corner_distance));
    }

    #[test]
    fn test_angle_multiples_match_cardinals() {
        let cases = [
            (0.0, AnimationKind::LeftToRight),
            (90.0, AnimationKind::TopToBottom),
            (180.0, AnimationKind::RightToLeft),
            (270.0, AnimationKind::BottomToTop),
            (360.0, AnimationKind::LeftToRight),
            (-90.0, AnimationKind::BottomToTop),
            (450.0, AnimationKind::TopToBottom),
        ];

        for rect in rects() {
            for (degrees, cardinal) in cases {
                for progress in [0.0, 0.1, 0.5, 0.9, 1.0, 1.5] {
                    assert_eq!(
                        compute_path(rect, progress, AnimationKind::angle(degrees)),
                        compute_path(rect, progress, cardinal),
                        "angle {degrees} at {progress}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_wedge_45_covers_square() {
        let rect = Rect::new(100.0, 100.0);
        let path = compute_path(rect, 1.0, AnimationKind::angle(45.0));
        let points = polygon(&path);
        assert_eq!(points.len(), 3);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[1], 200.0, 0.0);
        assert_point(points[2], 0.0, 200.0);
    }

    #[test]
    fn test_wedge_hypotenuse_hits_far_corner() {
        // x / leg_x + y / leg_y == 1 at the far corner for any angle
        let rect = Rect::new(160.0, 90.0);
        for degrees in [10.0, 30.0, 60.0, 80.0] {
            let path = compute_path(rect, 1.0, AnimationKind::angle(degrees));
            let points = polygon(&path);
            let leg_x = points[1].x;
            let leg_y = points[2].y;
            let along = rect.width / leg_x + rect.height / leg_y;
            assert!(approx(along, 1.0), "angle {degrees}: {along}");
        }
    }

    #[test]
    fn test_wedge_quadrant_anchors() {
        let rect = Rect::new(100.0, 100.0);

        let path = compute_path(rect, 1.0, AnimationKind::angle(135.0));
        let points = polygon(&path);
        assert_point(points[0], 100.0, 0.0);
        assert_point(points[1], -100.0, 0.0);
        assert_point(points[2], 100.0, 200.0);

        let path = compute_path(rect, 1.0, AnimationKind::angle(225.0));
        let points = polygon(&path);
        assert_point(points[0], 100.0, 100.0);
        assert_point(points[1], -100.0, 100.0);
        assert_point(points[2], 100.0, -100.0);

        let path = compute_path(rect, 1.0, AnimationKind::angle(315.0));
        let points = polygon(&path);
        assert_point(points[0], 0.0, 100.0);
        assert_point(points[1], 200.0, 100.0);
        assert_point(points[2], 0.0, -100.0);

        // Negative angles normalize before picking a quadrant
        assert_eq!(
            compute_path(rect, 0.5, AnimationKind::angle(-45.0)),
            compute_path(rect, 0.5, AnimationKind::angle(315.0))
        );
    }

    #[test]
    fn test_wedge_legs_scale_linearly() {
        let rect = Rect::new(200.0, 100.0);
        for degrees in [5.0, 30.0, 72.5, 89.0] {
            let kind = AnimationKind::angle(degrees);
            let full = compute_path(rect, 1.0, kind);
            let full = polygon(&full);
            for progress in [0.0, 0.25, 0.5, 0.75] {
                let path = compute_path(rect, progress, kind);
                let points = polygon(&path);
                assert!(approx(points[1].x, full[1].x * progress), "angle {degrees}");
                assert!(approx(points[2].y, full[2].y * progress), "angle {degrees}");
            }
        }
    }

    #[test]
    fn test_wedge_is_finite_near_right_angles() {
        let degrees = [
            1e-40, 1e-30, 0.001, 89.999, 89.99999, 90.001, 179.999, 180.00001, 269.999,
            359.999, 359.99997,
        ];
        for rect in rects() {
            for degrees in degrees {
                for progress in [0.0, 0.5, 1.0] {
                    let path = compute_path(rect, progress, AnimationKind::angle(degrees));
                    for point in path.to_polygon(8) {
                        assert!(
                            point.x.is_finite() && point.y.is_finite(),
                            "angle {degrees} on {rect:?} at {progress}: {path:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_unrepresentable_wedge_uses_nearest_wipe() {
        let rect = Rect::new(100.0, 100.0);
        assert_eq!(
            compute_path(rect, 0.5, AnimationKind::angle(1e-40)),
            compute_path(rect, 0.5, AnimationKind::LeftToRight)
        );
        let zero_width = Rect::new(0.0, 100.0);
        assert_eq!(
            compute_path(zero_width, 0.5, AnimationKind::angle(1e-40)),
            compute_path(zero_width, 0.5, AnimationKind::LeftToRight)
        );
    }

    #[test]
    fn test_area_is_monotonic() {
        let kinds = [
            AnimationKind::LeftToRight,
            AnimationKind::RightToLeft,
            AnimationKind::TopToBottom,
            AnimationKind::BottomToTop,
            AnimationKind::Circle,
            AnimationKind::angle(30.0),
            AnimationKind::angle(120.0),
            AnimationKind::angle(200.0),
            AnimationKind::angle(300.0),
        ];

        for rect in rects() {
            for kind in kinds {
                let mut previous = 0.0;
                for step in 0..=20 {
                    let area = compute_path(rect, step as f32 / 20.0, kind).area();
                    assert!(area >= previous, "{kind:?} shrank at step {step}");
                    previous = area;
                }
            }
        }
    }

    #[test]
    fn test_zero_sized_rect() {
        let rect = Rect::new(0.0, 0.0);
        assert_eq!(compute_path(rect, 0.7, AnimationKind::LeftToRight).area(), 0.0);
        assert_eq!(compute_path(rect, 0.7, AnimationKind::Circle).area(), 0.0);
        assert_eq!(compute_path(rect, 0.7, AnimationKind::angle(40.0)).area(), 0.0);
    }
}
