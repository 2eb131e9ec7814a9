// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay gesture state machine.
//!
//! ## Usage
//!
//! 1) Create a [`PipState`] from a [`PipConfig`] when the overlay is attached.
//! 2) Forward live gesture samples to [`PipState::magnify_changed`],
//!    [`PipState::rotate_changed`] and [`PipState::drag_changed`].
//! 3) Forward the end of each gesture to the matching `*_ended` method.
//! 4) Render from [`PipState::layout`].
//!
//! Pinch, drag and rotate are independent: each touches its own transient
//! field plus at most one resting field (size level for pinch, corner for
//! drag), so their end events may arrive in any order.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::{GestureLimits, PipConfig};
use crate::corner::{Corner, CornerSet, infer_corner};
use crate::limits::{clamp_range, clamp_upper};
use crate::observer::{PipEvent, PipObserver};
use crate::size::{SizeLevel, SizeSet};

/// In-flight visual feedback, reset to neutral when its gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipTransient {
    /// Live rotation in degrees, already limited.
    pub rotation_degrees: f64,
    /// Live scale relative to the resting size.
    pub scale: f64,
    /// Live drag translation.
    pub offset: Vec2,
}

impl PipTransient {
    /// No rotation, unit scale, zero offset.
    pub const NEUTRAL: Self = Self {
        rotation_degrees: 0.0,
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Returns `true` if no gesture feedback is applied.
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for PipTransient {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// What a finished drag did to the resting corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// Neither the translation nor the release velocity pointed elsewhere.
    Unchanged,
    /// The overlay moved to this corner.
    Committed(Corner),
    /// The drag pointed to this corner, but it is not enabled.
    Rejected(Corner),
}

/// Everything a renderer needs to draw the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipLayout {
    /// Resting size: base extent times the size level multiplier.
    pub size: Size,
    /// Resting corner.
    pub corner: Corner,
    /// Placement of the overlay in its container as axis fractions.
    pub alignment: Vec2,
    /// Pivot for the live scale, in overlay-local coordinates.
    pub scale_anchor: Point,
    /// Pivot for the live rotation (bottom centre), in overlay-local coordinates.
    pub rotation_anchor: Point,
    /// Live gesture feedback.
    pub transient: PipTransient,
}

impl PipLayout {
    /// Returns the overlay rectangle docked at its corner inside `container`,
    /// ignoring live feedback.
    ///
    /// The rectangle sits flush against the container edges; hosts that want
    /// a margin inset `container` before calling this.
    #[must_use]
    pub fn resting_rect(&self, container: Rect) -> Rect {
        let slack = container.size() - self.size;
        let origin = container.origin()
            + Vec2::new(slack.width * self.alignment.x, slack.height * self.alignment.y);
        Rect::from_origin_size(origin, self.size)
    }

    /// Returns the transform from overlay-local to container coordinates,
    /// including live feedback.
    ///
    /// The live scale is applied about the scale anchor, then the live
    /// rotation about the bottom centre, then the result is moved to the
    /// resting origin plus the live offset.
    #[must_use]
    pub fn transform(&self, container: Rect) -> Affine {
        let origin = self.resting_rect(container).origin().to_vec2();
        Affine::translate(origin + self.transient.offset)
            * Affine::rotate_about(
                self.transient.rotation_degrees.to_radians(),
                self.rotation_anchor,
            )
            * Affine::scale_about(self.transient.scale, self.scale_anchor)
    }
}

/// Overlay gesture state: resting corner and size level plus live feedback.
///
/// `O` receives a [`PipEvent`] after every mutation; the default `()` ignores
/// them.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use understory_pip::{Corner, DragOutcome, PipConfig, PipState, SizeLevel};
///
/// let container = Rect::new(0.0, 0.0, 800.0, 600.0);
/// let mut pip = PipState::new(PipConfig::default());
///
/// pip.magnify_changed(1.6);
/// assert_eq!(pip.magnify_ended(), SizeLevel::Medium);
///
/// pip.drag_changed(Vec2::new(520.0, 400.0));
/// let outcome = pip.drag_ended(Vec2::new(520.0, 400.0), Vec2::ZERO, container);
/// assert_eq!(outcome, DragOutcome::Committed(Corner::BottomTrailing));
/// assert!(pip.transient().is_neutral());
/// ```
#[derive(Clone, Debug)]
pub struct PipState<O = ()> {
    config: PipConfig,
    corner: Corner,
    size_level: SizeLevel,
    transient: PipTransient,
    observer: O,
}

impl PipState {
    /// Creates a state docked top-leading at the small size, without an observer.
    #[must_use]
    pub fn new(config: PipConfig) -> Self {
        Self::with_observer(config, ())
    }
}

impl Default for PipState {
    fn default() -> Self {
        Self::new(PipConfig::default())
    }
}

impl<O: PipObserver> PipState<O> {
    /// Creates a state docked top-leading at the small size that reports to `observer`.
    #[must_use]
    pub fn with_observer(config: PipConfig, observer: O) -> Self {
        Self {
            config,
            corner: Corner::TopLeading,
            size_level: SizeLevel::Small,
            transient: PipTransient::NEUTRAL,
            observer,
        }
    }

    /// Starts from the given resting corner and size level instead of the defaults.
    ///
    /// Neither value is checked against the enabled sets.
    #[must_use]
    pub fn with_resting(mut self, corner: Corner, size_level: SizeLevel) -> Self {
        self.corner = corner;
        self.size_level = size_level;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &PipConfig {
        &self.config
    }

    /// Returns the resting corner.
    #[must_use]
    pub fn corner(&self) -> Corner {
        self.corner
    }

    /// Returns the resting size level.
    #[must_use]
    pub fn size_level(&self) -> SizeLevel {
        self.size_level
    }

    /// Returns the resting size: base extent times the size level multiplier.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size_level.scaled(self.config.base_size())
    }

    /// Returns the live gesture feedback.
    #[must_use]
    pub fn transient(&self) -> PipTransient {
        self.transient
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the state and returns its observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Live pinch sample.
    ///
    /// Growth is capped at [`GestureLimits::max_magnification`]; shrinking is
    /// not limited.
    pub fn magnify_changed(&mut self, magnification: f64) {
        let limit = self.config.limits().max_magnification;
        self.transient.scale = clamp_upper(magnification, limit);
        self.preview();
    }

    /// End of a pinch: snaps the resting size to the level nearest the pinched
    /// size and resets the live scale.
    ///
    /// The result is committed even when it is not in the enabled size set.
    pub fn magnify_ended(&mut self) -> SizeLevel {
        let from = self.size_level;
        let to = SizeLevel::nearest(from.multiplier() * self.transient.scale);
        self.size_level = to;
        if to != from {
            self.observer.notify(PipEvent::SizeCommitted { from, to });
        }
        self.transient.scale = 1.0;
        self.preview();
        to
    }

    /// Live rotation sample, in degrees.
    ///
    /// The input is scaled by [`GestureLimits::rotation_sensitivity`] and
    /// limited to `±`[`GestureLimits::max_rotation_degrees`] (its magnitude,
    /// so a negative limit behaves like its positive counterpart).
    pub fn rotate_changed(&mut self, degrees: f64) {
        let GestureLimits {
            rotation_sensitivity,
            max_rotation_degrees,
            ..
        } = self.config.limits();
        let bound = max_rotation_degrees.abs();
        self.transient.rotation_degrees =
            clamp_range(degrees * rotation_sensitivity, -bound, bound);
        self.preview();
    }

    /// End of a rotation: the overlay springs back upright.
    pub fn rotate_ended(&mut self) {
        self.transient.rotation_degrees = 0.0;
        self.preview();
    }

    /// Live drag sample: the raw translation since the drag started.
    pub fn drag_changed(&mut self, translation: Vec2) {
        self.transient.offset = translation;
        self.preview();
    }

    /// End of a drag.
    ///
    /// The corner nearest the dropped position is chosen. If that is the
    /// current corner, the release `velocity` is tried as a displacement
    /// instead, so a short flick can still move the overlay. A different corner
    /// is committed only if it is enabled. The live offset is always reset.
    pub fn drag_ended(
        &mut self,
        translation: Vec2,
        velocity: Vec2,
        container: Rect,
    ) -> DragOutcome {
        let mut candidate = self.infer_corner(translation, container);
        if candidate == self.corner {
            candidate = self.infer_corner(velocity, container);
        }

        let outcome = if candidate == self.corner {
            DragOutcome::Unchanged
        } else if self.config.corners().has(candidate) {
            let from = self.corner;
            self.corner = candidate;
            self.observer.notify(PipEvent::CornerCommitted {
                from,
                to: candidate,
            });
            DragOutcome::Committed(candidate)
        } else {
            self.observer.notify(PipEvent::CornerRejected {
                current: self.corner,
                candidate,
            });
            DragOutcome::Rejected(candidate)
        };

        self.transient.offset = Vec2::ZERO;
        self.preview();
        outcome
    }

    /// Returns the corner the overlay would dock at if moved by `delta` from
    /// its resting position inside `container`.
    #[must_use]
    pub fn infer_corner(&self, delta: Vec2, container: Rect) -> Corner {
        infer_corner(self.corner, delta, container, self.size())
    }

    /// Returns the current render parameters.
    #[must_use]
    pub fn layout(&self) -> PipLayout {
        let size = self.size();
        PipLayout {
            size,
            corner: self.corner,
            alignment: self.corner.anchor_fraction(),
            scale_anchor: self.corner.anchor_point(size),
            rotation_anchor: Point::new(size.width / 2.0, size.height),
            transient: self.transient,
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PipDebugInfo {
        PipDebugInfo {
            corner: self.corner,
            size_level: self.size_level,
            size: self.size(),
            transient: self.transient,
            base_size: self.config.base_size(),
            enabled_corners: self.config.corners(),
            enabled_sizes: self.config.sizes(),
            limits: self.config.limits(),
        }
    }

    fn preview(&mut self) {
        self.observer.notify(PipEvent::Preview(self.transient));
    }
}

/// Debug snapshot of a [`PipState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipDebugInfo {
    /// Resting corner.
    pub corner: Corner,
    /// Resting size level.
    pub size_level: SizeLevel,
    /// Resting size.
    pub size: Size,
    /// Live gesture feedback.
    pub transient: PipTransient,
    /// Base extent at the small level.
    pub base_size: Size,
    /// Corners a drag may commit to.
    pub enabled_corners: CornerSet,
    /// Enabled size levels (not enforced on pinch).
    pub enabled_sizes: SizeSet,
    /// Live gesture limits.
    pub limits: GestureLimits,
}
