// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pip --heading-base-level=0

//! Understory PiP: headless gesture logic for a picture-in-picture overlay.
//!
//! A floating overlay sits in one corner of a container at one of three
//! discrete sizes. The user can pinch it to resize, drag it to another corner
//! and twist it (it springs back upright). This crate turns the raw gesture
//! samples into:
//! - Live feedback while a gesture runs (scale, offset, limited rotation).
//! - A resting [`SizeLevel`] snapped from the pinched scale when a pinch ends.
//! - A resting [`Corner`] inferred from the drop position (or the release
//!   velocity for short flicks) when a drag ends, limited to enabled corners.
//!
//! It does **not** render, animate or recognise gestures. Callers are expected
//! to:
//! - Recognise pinch/drag/rotate gestures in their input layer and forward
//!   each sample and each gesture end to [`PipState`].
//! - Draw the overlay from [`PipState::layout`], using
//!   [`PipLayout::resting_rect`] or [`PipLayout::transform`] for placement.
//! - Optionally attach a [`PipObserver`] to animate commits.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use understory_pip::{Corner, PipConfig, PipState, SizeLevel};
//!
//! let container = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let config = PipConfig::new().with_corners([Corner::TopLeading, Corner::BottomTrailing]);
//! let mut pip = PipState::new(config);
//!
//! // Pinch out to 1.8x: snaps to the large level.
//! pip.magnify_changed(1.8);
//! pip.magnify_ended();
//! assert_eq!(pip.size_level(), SizeLevel::Large);
//!
//! // Drag towards the top-right: that corner is disabled, so nothing moves.
//! pip.drag_changed(Vec2::new(500.0, 0.0));
//! pip.drag_ended(Vec2::new(500.0, 0.0), Vec2::ZERO, container);
//! assert_eq!(pip.corner(), Corner::TopLeading);
//!
//! // Drag towards the bottom-right.
//! pip.drag_ended(Vec2::new(500.0, 400.0), Vec2::ZERO, container);
//! assert_eq!(pip.corner(), Corner::BottomTrailing);
//! assert_eq!(
//!     pip.layout().resting_rect(container),
//!     Rect::new(500.0, 400.0, 800.0, 600.0)
//! );
//! ```
//!
//! ## Design notes
//!
//! - Ties snap deterministically: a scale exactly between two levels picks the
//!   smaller one, and a position exactly between two edges picks the trailing
//!   or top edge.
//! - Only corner commits honour the enabled set. The enabled size set is
//!   carried in [`PipConfig`] but a pinch always commits the nearest level.
//! - All operations are total; nothing here returns an error except
//!   [`PipConfig::try_with_base_size`] and [`PipConfig::try_with_limits`].
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod corner;
mod limits;
mod observer;
mod size;
mod state;

pub use config::{ConfigError, DEFAULT_BASE_SIZE, GestureLimits, PipConfig};
pub use corner::{Corner, CornerSet, infer_corner};
pub use limits::{clamp_lower, clamp_range, clamp_upper, closest_bound};
pub use observer::{EventLog, PipEvent, PipObserver};
pub use size::{SizeLevel, SizeSet};
pub use state::{DragOutcome, PipDebugInfo, PipLayout, PipState, PipTransient};
