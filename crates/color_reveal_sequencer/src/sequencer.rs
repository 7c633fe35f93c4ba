// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered queue of color layers over a committed base color.

use crate::layer::{ColorLayer, LayerId, LayerPhase};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default bound on undrained driver events
pub const DEFAULT_MAX_EVENTS: usize = 256;

/// Sequencer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Time the driver should take to animate a layer from 0 to 1
    pub animation_duration: f32,
    /// Extra time after completion before the driver settles a layer
    pub settle_delay: f32,
    /// Maximum number of queued layers (`None` for unbounded)
    pub max_pending: Option<usize>,
    /// Maximum number of undrained events; the oldest are dropped past it
    pub max_events: usize,
}

impl SequencerConfig {
    /// Total time from enqueue until a layer should be settled
    pub fn settle_after(&self) -> f32 {
        self.animation_duration + self.settle_delay
    }

    /// Serialize to RON
    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// Deserialize from RON
    pub fn from_ron(s: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(s)
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            animation_duration: 1.0,
            settle_delay: 1.0,
            max_pending: None,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

/// Notification for the animation driver
#[derive(Debug, Clone, PartialEq)]
pub enum SequencerEvent<C> {
    /// A layer was queued and should be animated from 0 to 1
    LayerStarted {
        /// Layer to animate
        id: LayerId,
        /// Incoming color
        color: C,
        /// Requested animation duration
        duration: f32,
    },
    /// A layer reached full progress
    LayerCompleted {
        /// Completed layer
        id: LayerId,
    },
    /// The head layer was promoted to the base color
    LayerCommitted {
        /// Committed layer
        id: LayerId,
        /// New base color
        color: C,
    },
}

/// Queue of color transitions over a base color.
///
/// Layers are painted in insertion order and committed strictly from the
/// head, whatever order their animations finish in.
#[derive(Debug, Clone)]
pub struct LayerSequencer<C> {
    /// Most recently committed color
    base_color: C,
    /// Pending layers in request order
    layers: IndexMap<LayerId, ColorLayer<C>>,
    /// Settings
    config: SequencerConfig,
    /// Events not yet taken by the driver, oldest first
    pending_events: VecDeque<SequencerEvent<C>>,
}

impl<C: Clone> LayerSequencer<C> {
    /// Create a sequencer with default settings
    pub fn new(base_color: C) -> Self {
        Self::with_config(base_color, SequencerConfig::default())
    }

    /// Create a sequencer with custom settings
    pub fn with_config(base_color: C, config: SequencerConfig) -> Self {
        Self {
            base_color,
            layers: IndexMap::new(),
            config,
            pending_events: VecDeque::new(),
        }
    }

    /// Queue a transition to `color`.
    ///
    /// The new layer starts at progress zero at the tail of the queue, and a
    /// [`SequencerEvent::LayerStarted`] is emitted for the driver.
    pub fn on_new_color(&mut self, color: C) -> Result<LayerId, SequencerError> {
        if let Some(capacity) = self.config.max_pending {
            if self.layers.len() >= capacity {
                tracing::warn!(capacity, "Color layer queue is full, dropping request");
                return Err(SequencerError::QueueFull { capacity });
            }
        }

        let layer = ColorLayer::new(color.clone());
        let id = layer.id;
        self.layers.insert(id, layer);
        self.push_event(SequencerEvent::LayerStarted {
            id,
            color,
            duration: self.config.animation_duration,
        });

        tracing::debug!(layer = ?id, pending = self.layers.len(), "Queued color layer");
        Ok(id)
    }

    /// Write back animation progress for a layer.
    ///
    /// Progress is clamped to `[0, 1]` and may never move backward.
    pub fn set_progress(&mut self, id: LayerId, progress: f32) -> Result<LayerPhase, SequencerError> {
        if progress.is_nan() {
            return Err(SequencerError::InvalidProgress { id });
        }
        let layer = self.layers.get_mut(&id).ok_or(SequencerError::UnknownLayer(id))?;

        let progress = progress.clamp(0.0, 1.0);
        let current = layer.progress();
        if progress < current {
            return Err(SequencerError::ProgressRegression {
                id,
                current,
                requested: progress,
            });
        }

        let was_complete = layer.is_complete();
        layer.set_progress(progress);
        let phase = layer.phase();

        if !was_complete && phase == LayerPhase::Complete {
            tracing::debug!(layer = ?id, "Color layer fully revealed");
            self.push_event(SequencerEvent::LayerCompleted { id });
        }

        Ok(phase)
    }

    /// Commit the head layer into the base color.
    ///
    /// Always takes index 0, even when a later layer finished first. Returns
    /// the new base color, or `None` when nothing is queued.
    pub fn on_layer_settled(&mut self) -> Option<C> {
        let Some((id, layer)) = self.layers.shift_remove_index(0) else {
            tracing::warn!("Layer settled with an empty queue, ignoring");
            return None;
        };

        if !layer.is_complete() {
            tracing::debug!(
                layer = ?id,
                progress = layer.progress(),
                "Settling head layer before it fully revealed"
            );
        }

        self.base_color = layer.color.clone();
        self.push_event(SequencerEvent::LayerCommitted {
            id,
            color: layer.color.clone(),
        });

        tracing::debug!(layer = ?id, pending = self.layers.len(), "Committed color layer");
        Some(layer.color)
    }

    /// Get pending events and clear them.
    ///
    /// Hosts that never drain keep at most `max_events` of the newest.
    pub fn take_events(&mut self) -> Vec<SequencerEvent<C>> {
        self.pending_events.drain(..).collect()
    }

    fn push_event(&mut self, event: SequencerEvent<C>) {
        if self.config.max_events == 0 {
            return;
        }
        if self.pending_events.len() >= self.config.max_events {
            self.pending_events.pop_front();
            tracing::warn!(
                max_events = self.config.max_events,
                "Sequencer events are not being drained, dropping the oldest"
            );
        }
        self.pending_events.push_back(event);
    }
}

impl<C> LayerSequencer<C> {
    /// Most recently committed color
    pub fn base_color(&self) -> &C {
        &self.base_color
    }

    /// Queued layers in paint order
    pub fn layers(&self) -> impl Iterator<Item = &ColorLayer<C>> {
        self.layers.values()
    }

    /// Oldest queued layer, the next to be committed
    pub fn head(&self) -> Option<&ColorLayer<C>> {
        self.layers.first().map(|(_, layer)| layer)
    }

    /// Get a layer by ID
    pub fn layer(&self, id: LayerId) -> Option<&ColorLayer<C>> {
        self.layers.get(&id)
    }

    /// Queue position of a layer
    pub fn position(&self, id: LayerId) -> Option<usize> {
        self.layers.get_index_of(&id)
    }

    /// Number of queued layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether no layers are queued
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Settings
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }
}

/// Error from a sequencer operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SequencerError {
    /// The bounded queue has no room
    #[error("Color layer queue is full (capacity {capacity})")]
    QueueFull {
        /// Configured capacity
        capacity: usize,
    },

    /// No queued layer has this ID
    #[error("Layer not found: {0:?}")]
    UnknownLayer(LayerId),

    /// Progress may not move backward
    #[error("Progress for layer {id:?} cannot go from {current} back to {requested}")]
    ProgressRegression {
        /// Layer
        id: LayerId,
        /// Stored progress
        current: f32,
        /// Rejected progress
        requested: f32,
    },

    /// Progress was NaN
    #[error("Invalid progress for layer {id:?}")]
    InvalidProgress {
        /// Layer
        id: LayerId,
    },
}
