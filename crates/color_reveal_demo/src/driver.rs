// SPDX-License-Identifier: MIT OR Apache-2.0
//! Frame-clock animation driver for a [`LayerSequencer`].

use color_reveal_sequencer::{LayerId, LayerSequencer, SequencerError, SequencerEvent};
use serde::{Deserialize, Serialize};

/// Easing curve applied to linear time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// No easing
    Linear,
    /// Cubic ease-in-out
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear time in `[0, 1]` to eased progress
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A layer the driver is animating or waiting to settle
#[derive(Debug, Clone)]
struct ActiveLayer {
    id: LayerId,
    started_at: f32,
    duration: f32,
    settle_after: f32,
}

impl ActiveLayer {
    fn linear_progress(&self, now: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    fn is_due(&self, now: f32) -> bool {
        now - self.started_at >= self.settle_after
    }
}

/// Drives queued layers from 0 to 1 and settles them after a delay.
///
/// The driver owns all timing: it picks up new layers from
/// [`SequencerEvent::LayerStarted`], writes eased progress back every
/// update, and calls [`LayerSequencer::on_layer_settled`] once per layer
/// whose animation and settle delay have both elapsed.
#[derive(Debug, Clone, Default)]
pub struct RevealDriver {
    /// Current driver time
    time: f32,
    /// Easing for every layer
    easing: Easing,
    /// Layers not yet settled, oldest first
    active: Vec<ActiveLayer>,
}

impl RevealDriver {
    /// Create a driver at time zero
    pub fn new(easing: Easing) -> Self {
        Self {
            time: 0.0,
            easing,
            active: Vec::new(),
        }
    }

    /// Current driver time
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Whether no layer is animating or waiting to settle
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Advance by `delta_time` and return the colors committed this step
    pub fn update<C: Clone>(
        &mut self,
        delta_time: f32,
        sequencer: &mut LayerSequencer<C>,
    ) -> Result<Vec<C>, SequencerError> {
        self.collect_started(sequencer);
        self.time += delta_time.max(0.0);

        let now = self.time;
        let easing = self.easing;
        let mut lost = Vec::new();
        for layer in &self.active {
            let progress = easing.apply(layer.linear_progress(now));
            match sequencer.set_progress(layer.id, progress) {
                Ok(_) => {}
                // Settled by someone else ahead of its own timer
                Err(SequencerError::UnknownLayer(id)) => lost.push(id),
                Err(e) => return Err(e),
            }
        }
        if !lost.is_empty() {
            tracing::warn!("{} layer(s) left the queue before their timers ran out", lost.len());
            self.active.retain(|layer| !lost.contains(&layer.id));
        }

        let due = self.active.iter().filter(|layer| layer.is_due(now)).count();
        self.active.retain(|layer| !layer.is_due(now));

        let mut committed = Vec::with_capacity(due);
        for _ in 0..due {
            // Head-only: the sequencer decides which layer commits
            if let Some(color) = sequencer.on_layer_settled() {
                committed.push(color);
            }
        }

        Ok(committed)
    }

    /// Start tracking layers queued since the last update
    fn collect_started<C: Clone>(&mut self, sequencer: &mut LayerSequencer<C>) {
        let settle_delay = sequencer.config().settle_delay;
        for event in sequencer.take_events() {
            if let SequencerEvent::LayerStarted { id, duration, .. } = event {
                tracing::debug!(layer = ?id, time = self.time, "Animating color layer");
                self.active.push(ActiveLayer {
                    id,
                    started_at: self.time,
                    duration,
                    settle_after: duration.max(0.0) + settle_delay.max(0.0),
                });
            }
        }
    }
}
