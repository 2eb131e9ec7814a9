// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar limiting helpers shared by the gesture handlers.
//!
//! These work for any `Copy + PartialOrd` type with subtraction; in practice
//! they are used with `f64`.

use core::ops::Sub;

/// Limits `value` from above: returns `value` or `limit`, whichever is smaller.
#[must_use]
pub fn clamp_upper<T: Copy + PartialOrd>(value: T, limit: T) -> T {
    if limit < value { limit } else { value }
}

/// Limits `value` from below: returns `value` or `limit`, whichever is larger.
#[must_use]
pub fn clamp_lower<T: Copy + PartialOrd>(value: T, limit: T) -> T {
    if limit > value { limit } else { value }
}

/// Bounds `value` into `[lo, hi]`.
///
/// The upper clamp is applied first, then the lower one. For `lo <= hi` the
/// result is always inside the range.
#[must_use]
pub fn clamp_range<T: Copy + PartialOrd>(value: T, lo: T, hi: T) -> T {
    clamp_lower(clamp_upper(value, hi), lo)
}

/// Returns whichever of `lo` and `hi` is closer to `value`.
///
/// Ties resolve to `lo`. The comparison is exact so that a value sitting on
/// the midpoint always lands on the same bound.
///
/// ```
/// use understory_pip::closest_bound;
///
/// assert_eq!(closest_bound(3, 2, 10), 2);
/// assert_eq!(closest_bound(9, 2, 10), 10);
/// assert_eq!(closest_bound(6, 2, 10), 2);
/// ```
#[must_use]
pub fn closest_bound<T>(value: T, lo: T, hi: T) -> T
where
    T: Copy + PartialOrd + Sub<Output = T>,
{
    if value - lo <= hi - value { lo } else { hi }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_and_lower_match_min_max() {
        assert_eq!(clamp_lower(3, 4), 4);
        assert_eq!(clamp_lower(3, 3), 3);
        assert_eq!(clamp_lower(3, 2), 3);

        assert_eq!(clamp_upper(3, 4), 3);
        assert_eq!(clamp_upper(3, 3), 3);
        assert_eq!(clamp_upper(3, 2), 2);

        for (a, b) in [(1.5_f64, -2.0), (-7.25, 0.0), (4.0, 4.0), (0.1, 0.2)] {
            assert_eq!(clamp_upper(a, b), a.min(b));
            assert_eq!(clamp_lower(a, b), a.max(b));
        }
    }

    #[test]
    fn range_bounds_value() {
        assert_eq!(clamp_range(3, 2, 4), 3);
        assert_eq!(clamp_range(3, 4, 6), 4);
        assert_eq!(clamp_range(3, 0, 2), 2);
    }

    #[test]
    fn range_is_identity_inside_and_stays_in_bounds() {
        for v in [-25.0_f64, -10.0, -3.5, 0.0, 9.99, 10.0, 42.0] {
            let c = clamp_range(v, -10.0, 10.0);
            assert!((-10.0..=10.0).contains(&c));
            if (-10.0..=10.0).contains(&v) {
                assert_eq!(c, v);
            }
        }
    }

    #[test]
    fn degenerate_range_collapses_to_point() {
        assert_eq!(clamp_range(-1.0, 5.0, 5.0), 5.0);
        assert_eq!(clamp_range(8.0, 5.0, 5.0), 5.0);
    }

    #[test]
    fn closest_bound_picks_nearer_end() {
        assert_eq!(closest_bound(3, 2, 10), 2);
        assert_eq!(closest_bound(9, 2, 10), 10);
        assert_eq!(closest_bound(1.9_f64, 1.5, 2.0), 2.0);
    }

    #[test]
    fn closest_bound_tie_favors_lower() {
        assert_eq!(closest_bound(6, 2, 10), 2);
        assert_eq!(closest_bound(1.25_f64, 1.0, 1.5), 1.0);
        assert_eq!(closest_bound(1.75_f64, 1.5, 2.0), 1.5);
    }
}
