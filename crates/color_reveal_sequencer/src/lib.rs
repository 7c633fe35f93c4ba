// SPDX-License-Identifier: MIT OR Apache-2.0
//! Color-layer sequencing for reveal transitions.
//!
//! This crate tracks which colors are in flight over a background:
//! - Queueing a layer per requested color
//! - Progress write-back from an external animation driver
//! - Committing layers into the base color strictly in request order
//! - Per-frame paint lists for a renderer
//!
//! ## Architecture
//!
//! The sequencer is clock-free. A driver owns timing and easing; it learns
//! about new layers through [`SequencerEvent`]s drained with
//! [`LayerSequencer::take_events`], writes progress back with
//! [`LayerSequencer::set_progress`], and calls
//! [`LayerSequencer::on_layer_settled`] once a layer has finished and its
//! settle delay has passed.

pub mod color;
pub mod layer;
pub mod sequencer;
pub mod shared;
pub mod frame;

pub use color::{ColorParseError, Rgba};
pub use layer::{ColorLayer, LayerId, LayerPhase};
pub use sequencer::{
    LayerSequencer, SequencerConfig, SequencerError, SequencerEvent, DEFAULT_MAX_EVENTS,
};
pub use shared::SharedSequencer;
pub use frame::{PaintedLayer, RevealFrame};
