// SPDX-License-Identifier: MIT OR Apache-2.0
//! Animation kinds for reveal transitions.

use crate::geometry::Angle;
use serde::{Deserialize, Serialize};

/// How the incoming color sweeps across the rect
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum AnimationKind {
    /// Wipe from the left edge to the right edge
    #[default]
    LeftToRight,
    /// Wipe from the right edge to the left edge
    RightToLeft,
    /// Wipe from the top edge down
    TopToBottom,
    /// Wipe from the bottom edge up
    BottomToTop,
    /// Corner wedge sweeping at the given angle
    AngleSweep(Angle),
    /// Circle growing from the center
    Circle,
}

impl AnimationKind {
    /// The four axis-aligned wipes
    pub const CARDINAL: [AnimationKind; 4] = [
        AnimationKind::LeftToRight,
        AnimationKind::RightToLeft,
        AnimationKind::TopToBottom,
        AnimationKind::BottomToTop,
    ];

    /// Create an angle sweep from degrees
    pub fn angle(degrees: f32) -> Self {
        Self::AngleSweep(Angle::degrees(degrees))
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeftToRight => "Left to Right",
            Self::RightToLeft => "Right to Left",
            Self::TopToBottom => "Top to Bottom",
            Self::BottomToTop => "Bottom to Top",
            Self::AngleSweep(_) => "Angle Sweep",
            Self::Circle => "Circle",
        }
    }

    /// The axis-aligned wipe an exact multiple of 90 degrees stands for.
    ///
    /// Returns `None` for every other angle and for non-angle kinds.
    pub fn cardinal_equivalent(&self) -> Option<AnimationKind> {
        let Self::AngleSweep(angle) = self else {
            return None;
        };
        if !angle.is_right_multiple() {
            return None;
        }
        let quarter = (angle.normalized().as_degrees() / 90.0) as usize;
        Some(Self::quarter_turn(quarter))
    }

    /// Wipe for `quarter * 90` degrees: 0 left to right, 1 top to bottom,
    /// 2 right to left, 3 bottom to top. Wraps past a full turn.
    pub fn quarter_turn(quarter: usize) -> AnimationKind {
        const QUARTER_TURNS: [AnimationKind; 4] = [
            AnimationKind::LeftToRight,
            AnimationKind::TopToBottom,
            AnimationKind::RightToLeft,
            AnimationKind::BottomToTop,
        ];
        QUARTER_TURNS[quarter % 4]
    }
}
