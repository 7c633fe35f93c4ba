// SPDX-License-Identifier: MIT OR Apache-2.0
//! Thread-safe handle around a [`LayerSequencer`].

use crate::frame::RevealFrame;
use crate::layer::{LayerId, LayerPhase};
use crate::sequencer::{LayerSequencer, SequencerConfig, SequencerError, SequencerEvent};
use color_reveal_shape::{AnimationKind, Rect};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, lock-protected sequencer for hosts where the color source and
/// the animation driver live on different threads.
///
/// Every call takes the lock once, so queue mutations stay serialized.
#[derive(Debug)]
pub struct SharedSequencer<C> {
    inner: Arc<Mutex<LayerSequencer<C>>>,
}

impl<C> Clone for SharedSequencer<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clone> SharedSequencer<C> {
    /// Create a shared sequencer with default settings
    pub fn new(base_color: C) -> Self {
        Self::from_sequencer(LayerSequencer::new(base_color))
    }

    /// Create a shared sequencer with custom settings
    pub fn with_config(base_color: C, config: SequencerConfig) -> Self {
        Self::from_sequencer(LayerSequencer::with_config(base_color, config))
    }

    /// Wrap an existing sequencer
    pub fn from_sequencer(sequencer: LayerSequencer<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sequencer)),
        }
    }

    /// See [`LayerSequencer::on_new_color`]
    pub fn on_new_color(&self, color: C) -> Result<LayerId, SequencerError> {
        self.inner.lock().on_new_color(color)
    }

    /// See [`LayerSequencer::set_progress`]
    pub fn set_progress(&self, id: LayerId, progress: f32) -> Result<LayerPhase, SequencerError> {
        self.inner.lock().set_progress(id, progress)
    }

    /// See [`LayerSequencer::on_layer_settled`]
    pub fn on_layer_settled(&self) -> Option<C> {
        self.inner.lock().on_layer_settled()
    }

    /// See [`LayerSequencer::take_events`]
    pub fn take_events(&self) -> Vec<SequencerEvent<C>> {
        self.inner.lock().take_events()
    }

    /// Current base color
    pub fn base_color(&self) -> C {
        self.inner.lock().base_color().clone()
    }

    /// Number of queued layers
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no layers are queued
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Snapshot of the paint list for one frame
    pub fn frame(&self, rect: Rect, kind: AnimationKind) -> RevealFrame<C> {
        self.inner.lock().frame(rect, kind)
    }

    /// Run a closure with exclusive access to the sequencer
    pub fn with<R>(&self, f: impl FnOnce(&mut LayerSequencer<C>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
