// SPDX-License-Identifier: MIT OR Apache-2.0
//! Basic geometric primitives.

use serde::{Deserialize, Serialize};

/// A point in rect space (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position
    pub x: f32,
    /// Vertical position
    pub y: f32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned target region, anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RectExtents")]
pub struct Rect {
    /// Width (never negative)
    pub width: f32,
    /// Height (never negative)
    pub height: f32,
}

impl Rect {
    /// Create a rect, clamping negative extents to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Center of the rect
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Distance from the center to any corner
    pub fn half_diagonal(&self) -> f32 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        (half_h * half_h + half_w * half_w).sqrt()
    }

    /// Area of the rect
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether the rect encloses no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Unchecked extents as written in config files
#[derive(Deserialize)]
#[serde(rename = "Rect")]
struct RectExtents {
    width: f32,
    height: f32,
}

impl From<RectExtents> for Rect {
    fn from(extents: RectExtents) -> Self {
        Rect::new(extents.width, extents.height)
    }
}

/// An angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(pub f32);

impl Angle {
    /// Zero degrees
    pub const ZERO: Angle = Angle(0.0);
    /// A full turn
    pub const FULL_TURN: Angle = Angle(360.0);

    /// Create an angle from degrees
    pub const fn degrees(degrees: f32) -> Self {
        Self(degrees)
    }

    /// Raw value in degrees
    pub fn as_degrees(&self) -> f32 {
        self.0
    }

    /// Value in radians
    pub fn as_radians(&self) -> f32 {
        self.0.to_radians()
    }

    /// Reduce into `[0, 360)`. Non-finite angles reduce to zero.
    pub fn normalized(&self) -> Angle {
        if !self.0.is_finite() {
            return Angle::ZERO;
        }
        let reduced = self.0.rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if reduced >= 360.0 {
            Angle::ZERO
        } else {
            Angle(reduced)
        }
    }

    /// Whether the normalized angle is an exact multiple of 90 degrees
    pub fn is_right_multiple(&self) -> bool {
        self.normalized().0.rem_euclid(90.0) == 0.0
    }
}

impl From<f32> for Angle {
    fn from(degrees: f32) -> Self {
        Self(degrees)
    }
}
