// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration for [`PipState`](crate::PipState).

use core::fmt;

use kurbo::Size;

use crate::corner::{Corner, CornerSet};
use crate::size::{SizeLevel, SizeSet};

/// Default base extent of the overlay at [`SizeLevel::Small`].
pub const DEFAULT_BASE_SIZE: Size = Size::new(150.0, 100.0);

/// Tuning constants for the in-progress gesture handlers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureLimits {
    /// Upper limit on the live pinch magnification. There is no lower limit.
    pub max_magnification: f64,
    /// Factor applied to the reported rotation before limiting.
    pub rotation_sensitivity: f64,
    /// Live rotation is limited to `±max_rotation_degrees`.
    pub max_rotation_degrees: f64,
}

impl GestureLimits {
    /// Returns `true` if every limit is finite and not negative.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [
            self.max_magnification,
            self.rotation_sensitivity,
            self.max_rotation_degrees,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl Default for GestureLimits {
    fn default() -> Self {
        Self {
            max_magnification: 3.0,
            rotation_sensitivity: 0.5,
            max_rotation_degrees: 10.0,
        }
    }
}

/// Error returned by [`PipConfig::try_with_base_size`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A base extent component was NaN or infinite.
    NonFiniteBaseSize(Size),
    /// A base extent component was zero or negative.
    NonPositiveBaseSize(Size),
    /// A gesture limit was NaN, infinite or negative.
    InvalidLimits(GestureLimits),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBaseSize(size) => {
                write!(f, "overlay base size {size:?} is not finite")
            }
            Self::NonPositiveBaseSize(size) => {
                write!(f, "overlay base size {size:?} must be strictly positive")
            }
            Self::InvalidLimits(limits) => {
                write!(f, "gesture limits {limits:?} must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Overlay configuration, fixed once the overlay is attached.
///
/// The enabled corner set limits which corners a drag may commit. The enabled
/// size set is carried for hosts but does not filter pinch commits; see
/// [`PipState::magnify_ended`](crate::PipState::magnify_ended).
///
/// An empty corner set is accepted and simply means no drag ever moves the
/// overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipConfig {
    base_size: Size,
    corners: CornerSet,
    sizes: SizeSet,
    limits: GestureLimits,
}

impl Default for PipConfig {
    fn default() -> Self {
        Self {
            base_size: DEFAULT_BASE_SIZE,
            corners: CornerSet::all(),
            sizes: SizeSet::all(),
            limits: GestureLimits::default(),
        }
    }
}

impl PipConfig {
    /// Creates the default configuration: a 150×100 base, all corners and all
    /// sizes enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base extent without validation.
    #[must_use]
    pub fn with_base_size(mut self, base_size: Size) -> Self {
        self.base_size = base_size;
        self
    }

    /// Sets the base extent, rejecting non-finite or non-positive components.
    pub fn try_with_base_size(self, base_size: Size) -> Result<Self, ConfigError> {
        if !base_size.is_finite() {
            return Err(ConfigError::NonFiniteBaseSize(base_size));
        }
        if base_size.width <= 0.0 || base_size.height <= 0.0 {
            return Err(ConfigError::NonPositiveBaseSize(base_size));
        }
        Ok(self.with_base_size(base_size))
    }

    /// Sets which corners a drag may commit to.
    #[must_use]
    pub fn with_corners(mut self, corners: impl IntoIterator<Item = Corner>) -> Self {
        self.corners = corners.into_iter().collect();
        self
    }

    /// Sets the enabled size levels.
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = SizeLevel>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Sets the live gesture limits without validation.
    #[must_use]
    pub fn with_limits(mut self, limits: GestureLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the live gesture limits, rejecting NaN, infinite or negative values.
    pub fn try_with_limits(self, limits: GestureLimits) -> Result<Self, ConfigError> {
        if !limits.is_valid() {
            return Err(ConfigError::InvalidLimits(limits));
        }
        Ok(self.with_limits(limits))
    }

    /// Returns the base extent.
    #[must_use]
    pub fn base_size(&self) -> Size {
        self.base_size
    }

    /// Returns the enabled corners.
    #[must_use]
    pub fn corners(&self) -> CornerSet {
        self.corners
    }

    /// Returns the enabled size levels.
    #[must_use]
    pub fn sizes(&self) -> SizeSet {
        self.sizes
    }

    /// Returns the live gesture limits.
    #[must_use]
    pub fn limits(&self) -> GestureLimits {
        self.limits
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = PipConfig::new();
        assert_eq!(config.base_size(), Size::new(150.0, 100.0));
        assert_eq!(config.corners(), CornerSet::all());
        assert_eq!(config.sizes(), SizeSet::all());
        assert_eq!(config.limits(), GestureLimits::default());
    }

    #[test]
    fn builders_replace_sets() {
        let config = PipConfig::new()
            .with_corners([Corner::BottomLeading])
            .with_sizes([SizeLevel::Medium, SizeLevel::Large]);
        assert_eq!(config.corners(), CornerSet::BOTTOM_LEADING);
        assert_eq!(config.sizes(), SizeSet::MEDIUM | SizeSet::LARGE);

        let none = PipConfig::new().with_corners([]);
        assert!(none.corners().is_empty());
    }

    #[test]
    fn base_size_validation() {
        let ok = PipConfig::new().try_with_base_size(Size::new(200.0, 120.0));
        assert_eq!(ok.map(|c| c.base_size()), Ok(Size::new(200.0, 120.0)));

        let zero = Size::new(0.0, 120.0);
        assert_eq!(
            PipConfig::new().try_with_base_size(zero),
            Err(ConfigError::NonPositiveBaseSize(zero))
        );

        let nan = Size::new(f64::NAN, 1.0);
        let err = PipConfig::new().try_with_base_size(nan).unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteBaseSize(_)));
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn limits_validation() {
        let tighter = GestureLimits {
            max_magnification: 2.0,
            ..GestureLimits::default()
        };
        assert_eq!(
            PipConfig::new().try_with_limits(tighter).map(|c| c.limits()),
            Ok(tighter)
        );

        let negative = GestureLimits {
            max_rotation_degrees: -10.0,
            ..GestureLimits::default()
        };
        assert_eq!(
            PipConfig::new().try_with_limits(negative),
            Err(ConfigError::InvalidLimits(negative))
        );

        let nan = GestureLimits {
            max_magnification: f64::NAN,
            ..GestureLimits::default()
        };
        let err = PipConfig::new().try_with_limits(nan).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLimits(_)));
        assert!(err.to_string().contains("gesture limits"));

        let infinite = GestureLimits {
            rotation_sensitivity: f64::INFINITY,
            ..GestureLimits::default()
        };
        assert!(PipConfig::new().try_with_limits(infinite).is_err());
        assert!(GestureLimits::default().is_valid());
    }
}
