// SPDX-License-Identifier: MIT OR Apache-2.0
//! Color layers queued over the base color.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a color layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerId(pub Uuid);

impl LayerId {
    /// Create a new random layer ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a queued layer.
///
/// Committed layers are no longer in the queue, so there is no variant for
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerPhase {
    /// Queued, progress still zero
    Pending,
    /// Progress strictly between zero and one
    Animating,
    /// Progress reached one, waiting to be settled
    Complete,
}

impl LayerPhase {
    /// Phase for a progress value
    pub fn from_progress(progress: f32) -> Self {
        if progress >= 1.0 {
            Self::Complete
        } else if progress > 0.0 {
            Self::Animating
        } else {
            Self::Pending
        }
    }
}

/// A color transition in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorLayer<C> {
    /// Unique layer ID
    pub id: LayerId,
    /// Incoming color
    pub color: C,
    /// Reveal progress in `[0, 1]`
    progress: f32,
}

impl<C> ColorLayer<C> {
    /// Create a layer at progress zero
    pub fn new(color: C) -> Self {
        Self {
            id: LayerId::new(),
            color,
            progress: 0.0,
        }
    }

    /// Current progress
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current phase
    pub fn phase(&self) -> LayerPhase {
        LayerPhase::from_progress(self.progress)
    }

    /// Whether the layer has fully revealed
    pub fn is_complete(&self) -> bool {
        self.phase() == LayerPhase::Complete
    }

    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }
}
