// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reveal-mask geometry for color transitions.
//!
//! This crate computes the shape that covers a rectangle while a new
//! background color sweeps in:
//! - Horizontal and vertical wipes
//! - Corner wedges at arbitrary angles
//! - Circles growing from the center
//!
//! ## Architecture
//!
//! Everything here is a pure function of its inputs:
//! - [`Rect`], [`Point`] and [`Angle`] describe the space
//! - [`AnimationKind`] selects the sweep
//! - [`compute_path`] maps `(rect, progress, kind)` to a [`RevealPath`]

pub mod geometry;
pub mod kind;
pub mod path;
pub mod generator;

pub use geometry::{Angle, Point, Rect};
pub use kind::AnimationKind;
pub use path::RevealPath;
pub use generator::compute_path;
