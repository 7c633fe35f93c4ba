// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-frame paint lists.

use crate::layer::LayerId;
use crate::sequencer::LayerSequencer;
use color_reveal_shape::{compute_path, AnimationKind, Rect, RevealPath};
use serde::{Deserialize, Serialize};

/// One queued layer, ready to paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintedLayer<C> {
    /// Source layer
    pub id: LayerId,
    /// Fill color
    pub color: C,
    /// Layer progress the path was computed for
    pub progress: f32,
    /// Region to fill
    pub path: RevealPath,
}

/// Everything a renderer needs for one frame.
///
/// Fill the rect with `background`, then each entry of `layers` in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealFrame<C> {
    /// Target rect
    pub rect: Rect,
    /// Committed base color
    pub background: C,
    /// Queued layers, oldest first
    pub layers: Vec<PaintedLayer<C>>,
}

impl<C: Clone> LayerSequencer<C> {
    /// Build the paint list for the current state
    pub fn frame(&self, rect: Rect, kind: AnimationKind) -> RevealFrame<C> {
        let layers = self
            .layers()
            .map(|layer| PaintedLayer {
                id: layer.id,
                color: layer.color.clone(),
                progress: layer.progress(),
                path: compute_path(rect, layer.progress(), kind),
            })
            .collect();

        RevealFrame {
            rect,
            background: self.base_color().clone(),
            layers,
        }
    }
}
