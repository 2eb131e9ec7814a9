// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Docking corners and nearest-corner inference.

use kurbo::{Point, Rect, Size, Vec2};

/// One of the four docking positions of the overlay inside its container.
///
/// "Leading" is the minimum-x edge and "top" is the minimum-y edge of the
/// container's local coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Corner {
    /// Minimum x, minimum y.
    #[default]
    TopLeading,
    /// Maximum x, minimum y.
    TopTrailing,
    /// Minimum x, maximum y.
    BottomLeading,
    /// Maximum x, maximum y.
    BottomTrailing,
}

impl Corner {
    /// Every corner, clockwise from [`Corner::TopLeading`].
    pub const ALL: [Self; 4] = [
        Self::TopLeading,
        Self::TopTrailing,
        Self::BottomTrailing,
        Self::BottomLeading,
    ];

    /// Builds a corner from which edges it touches.
    #[must_use]
    pub const fn from_sides(is_trailing: bool, is_top: bool) -> Self {
        match (is_trailing, is_top) {
            (true, true) => Self::TopTrailing,
            (true, false) => Self::BottomTrailing,
            (false, true) => Self::TopLeading,
            (false, false) => Self::BottomLeading,
        }
    }

    /// Returns `true` for the two corners on the top edge.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeading | Self::TopTrailing)
    }

    /// Returns `true` for the two corners on the trailing edge.
    #[must_use]
    pub const fn is_trailing(self) -> bool {
        matches!(self, Self::TopTrailing | Self::BottomTrailing)
    }

    /// Returns the corner as axis fractions: `0.0` for the leading/top edge,
    /// `1.0` for the trailing/bottom edge.
    ///
    /// This doubles as the alignment used to place the overlay in its
    /// container and as the unit anchor for scaling the overlay.
    #[must_use]
    pub const fn anchor_fraction(self) -> Vec2 {
        let x = if self.is_trailing() { 1.0 } else { 0.0 };
        let y = if self.is_top() { 0.0 } else { 1.0 };
        Vec2::new(x, y)
    }

    /// Returns this corner as a point within an overlay of `size`, in the
    /// overlay's own local bounds.
    #[must_use]
    pub fn anchor_point(self, size: Size) -> Point {
        let f = self.anchor_fraction();
        Point::new(size.width * f.x, size.height * f.y)
    }

    /// Returns the centre of an overlay of `overlay` size docked at this
    /// corner, in container-local coordinates.
    ///
    /// Only the container's extent is used; its origin is ignored.
    #[must_use]
    pub fn reference_center(self, container: Rect, overlay: Size) -> Point {
        let mid_x = overlay.width / 2.0;
        let mid_y = overlay.height / 2.0;
        let x = if self.is_trailing() {
            container.width() - mid_x
        } else {
            mid_x
        };
        let y = if self.is_top() {
            mid_y
        } else {
            container.height() - mid_y
        };
        Point::new(x, y)
    }
}

/// Infers the corner an overlay should dock at after being moved by `delta`
/// from its resting position at `current`.
///
/// The moved centre is compared against the overlay centre docked at each edge
/// of the container, one axis at a time. Exact ties resolve to the trailing
/// and top edges.
///
/// ```
/// use kurbo::{Rect, Size, Vec2};
/// use understory_pip::{infer_corner, Corner};
///
/// let container = Rect::new(0.0, 0.0, 300.0, 200.0);
/// let overlay = Size::new(150.0, 100.0);
/// // From (75, 50) to (280, 20).
/// let corner = infer_corner(Corner::TopLeading, Vec2::new(205.0, -30.0), container, overlay);
/// assert_eq!(corner, Corner::TopTrailing);
/// ```
#[must_use]
pub fn infer_corner(current: Corner, delta: Vec2, container: Rect, overlay: Size) -> Corner {
    let location = current.reference_center(container, overlay) + delta;

    let mid_x = overlay.width / 2.0;
    let mid_y = overlay.height / 2.0;

    let delta_leading = (mid_x - location.x).abs();
    let delta_trailing = (container.width() - mid_x - location.x).abs();
    let delta_top = (mid_y - location.y).abs();
    let delta_bottom = (container.height() - mid_y - location.y).abs();

    let is_trailing = delta_leading.min(delta_trailing) == delta_trailing;
    let is_top = delta_top.min(delta_bottom) == delta_top;

    Corner::from_sides(is_trailing, is_top)
}

bitflags::bitflags! {
    /// A set of [`Corner`]s.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CornerSet: u8 {
        /// [`Corner::TopLeading`].
        const TOP_LEADING     = 0b0000_0001;
        /// [`Corner::TopTrailing`].
        const TOP_TRAILING    = 0b0000_0010;
        /// [`Corner::BottomLeading`].
        const BOTTOM_LEADING  = 0b0000_0100;
        /// [`Corner::BottomTrailing`].
        const BOTTOM_TRAILING = 0b0000_1000;
    }
}

impl CornerSet {
    /// Returns `true` if `corner` is a member of this set.
    #[must_use]
    pub fn has(self, corner: Corner) -> bool {
        self.contains(corner.into())
    }
}

impl Default for CornerSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Corner> for CornerSet {
    fn from(corner: Corner) -> Self {
        match corner {
            Corner::TopLeading => Self::TOP_LEADING,
            Corner::TopTrailing => Self::TOP_TRAILING,
            Corner::BottomLeading => Self::BOTTOM_LEADING,
            Corner::BottomTrailing => Self::BOTTOM_TRAILING,
        }
    }
}

impl FromIterator<Corner> for CornerSet {
    fn from_iter<I: IntoIterator<Item = Corner>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, corner| set | Self::from(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect::new(0.0, 0.0, 300.0, 200.0);
    const OVERLAY: Size = Size::new(150.0, 100.0);

    #[test]
    fn sides_round_trip() {
        for corner in Corner::ALL {
            assert_eq!(
                Corner::from_sides(corner.is_trailing(), corner.is_top()),
                corner
            );
        }
    }

    #[test]
    fn anchor_points_are_overlay_corners() {
        let size = Size::new(150.0, 100.0);
        assert_eq!(Corner::TopLeading.anchor_point(size), Point::new(0.0, 0.0));
        assert_eq!(Corner::TopTrailing.anchor_point(size), Point::new(150.0, 0.0));
        assert_eq!(
            Corner::BottomLeading.anchor_point(size),
            Point::new(0.0, 100.0)
        );
        assert_eq!(
            Corner::BottomTrailing.anchor_point(size),
            Point::new(150.0, 100.0)
        );
    }

    #[test]
    fn reference_centers_are_inset_by_half_extent() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            Corner::TopLeading.reference_center(container, OVERLAY),
            Point::new(75.0, 50.0)
        );
        assert_eq!(
            Corner::TopTrailing.reference_center(container, OVERLAY),
            Point::new(725.0, 50.0)
        );
        assert_eq!(
            Corner::BottomLeading.reference_center(container, OVERLAY),
            Point::new(75.0, 550.0)
        );
        assert_eq!(
            Corner::BottomTrailing.reference_center(container, OVERLAY),
            Point::new(725.0, 550.0)
        );
    }

    #[test]
    fn reference_center_ignores_container_origin() {
        let shifted = Rect::new(40.0, 60.0, 340.0, 260.0);
        assert_eq!(
            Corner::BottomTrailing.reference_center(shifted, OVERLAY),
            Corner::BottomTrailing.reference_center(CONTAINER, OVERLAY)
        );
    }

    #[test]
    fn zero_delta_keeps_corner() {
        for corner in Corner::ALL {
            assert_eq!(infer_corner(corner, Vec2::ZERO, CONTAINER, OVERLAY), corner);
        }
    }

    #[test]
    fn drag_near_top_right_resolves_top_trailing() {
        let delta = Point::new(280.0, 20.0) - Point::new(75.0, 50.0);
        assert_eq!(
            infer_corner(Corner::TopLeading, delta, CONTAINER, OVERLAY),
            Corner::TopTrailing
        );
    }

    #[test]
    fn drag_across_container_reaches_opposite_corner() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            infer_corner(
                Corner::BottomTrailing,
                Vec2::new(-600.0, -450.0),
                container,
                OVERLAY
            ),
            Corner::TopLeading
        );
        assert_eq!(
            infer_corner(
                Corner::TopLeading,
                Vec2::new(500.0, 20.0),
                container,
                OVERLAY
            ),
            Corner::TopTrailing
        );
    }

    #[test]
    fn midpoint_ties_favor_trailing_and_top() {
        let container = Rect::new(0.0, 0.0, 800.0, 600.0);
        // Leading centre at x = 75, trailing at x = 725; midpoint x = 400.
        // Top centre at y = 50, bottom at y = 550; midpoint y = 300.
        let delta = Point::new(400.0, 300.0) - Point::new(75.0, 50.0);
        assert_eq!(
            infer_corner(Corner::TopLeading, delta, container, OVERLAY),
            Corner::TopTrailing
        );
        let just_before = delta - Vec2::new(1.0, -1.0);
        assert_eq!(
            infer_corner(Corner::TopLeading, just_before, container, OVERLAY),
            Corner::BottomLeading
        );
    }

    #[test]
    fn vertical_decision_line_is_container_midline() {
        // Top and bottom centres sit symmetrically about the midline, so the
        // overlay's half-extent never shifts the decision.
        let container = Rect::new(0.0, 0.0, 400.0, 1000.0);
        let overlay = Size::new(300.0, 100.0);
        // Top centre y = 50, bottom centre y = 950; midpoint y = 500.
        let delta = Vec2::new(0.0, 440.0);
        assert_eq!(
            infer_corner(Corner::TopLeading, delta, container, overlay),
            Corner::TopLeading
        );
        let delta = Vec2::new(0.0, 460.0);
        assert_eq!(
            infer_corner(Corner::TopLeading, delta, container, overlay),
            Corner::BottomLeading
        );
    }

    #[test]
    fn set_membership() {
        let set: CornerSet = [Corner::TopLeading, Corner::BottomTrailing]
            .into_iter()
            .collect();
        assert!(set.has(Corner::TopLeading));
        assert!(!set.has(Corner::TopTrailing));
        assert!(!set.has(Corner::BottomLeading));
        assert!(set.has(Corner::BottomTrailing));
        assert_eq!(CornerSet::default(), CornerSet::all());
    }
}
