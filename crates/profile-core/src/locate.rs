//! Binary-search helpers mapping query boundaries onto breakpoint indices
//!
//! All integral routines go through [`bracket`] (interval kinds) or
//! [`select_points`] (discrete kind) so that domain checks live in one place.

use crate::error::{Error, Result};
use crate::interval::Interval;

/// Which side of equal entries an insertion index should land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Insert before entries equal to the query
    Left,
    /// Insert after entries equal to the query
    Right,
}

/// Sorted-insertion index of `value` in the ascending slice `x`.
///
/// With [`Side::Right`] every entry below the returned index is `<= value`;
/// with [`Side::Left`] every entry below it is `< value`.
///
/// # Examples
///
/// ```rust
/// use profile_core::locate::{locate, Side};
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(locate(&x, 1.0, Side::Left), 1);
/// assert_eq!(locate(&x, 1.0, Side::Right), 2);
/// assert_eq!(locate(&x, 1.5, Side::Left), 2);
/// ```
#[inline]
pub fn locate(x: &[f64], value: f64, side: Side) -> usize {
    match side {
        Side::Left => x.partition_point(|&v| v < value),
        Side::Right => x.partition_point(|&v| v <= value),
    }
}

/// Indices surrounding a query interval on a breakpoint sequence.
///
/// `start` is the first breakpoint strictly right of the interval start,
/// `end` the last breakpoint strictly left of the interval end. Intervals
/// `[start, end)` are covered entirely by the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub start: usize,
    pub end: usize,
}

impl Bracket {
    /// Query start and end fall inside the same interval (index `end`)
    pub fn is_within_one_interval(&self) -> bool {
        self.start == self.end + 1
    }
}

fn out_of_domain(x: &[f64], interval: Interval) -> Error {
    Error::OutOfDomain {
        start: interval.start,
        end: interval.end,
        domain: (
            x.first().copied().unwrap_or(f64::NAN),
            x.last().copied().unwrap_or(f64::NAN),
        ),
    }
}

/// Locate the breakpoints bracketing a non-degenerate interval `[a, b]`.
///
/// Fails with [`Error::OutOfDomain`] if the interval leaves the domain, is
/// reversed, or has zero length.
pub fn bracket(x: &[f64], interval: Interval) -> Result<Bracket> {
    if x.len() < 2 || !(interval.start < interval.end) {
        return Err(out_of_domain(x, interval));
    }

    let start = locate(x, interval.start, Side::Right);
    let end = locate(x, interval.end, Side::Left)
        .checked_sub(1)
        .ok_or_else(|| out_of_domain(x, interval))?;

    if start == 0 || end >= x.len() - 1 {
        return Err(out_of_domain(x, interval));
    }

    Ok(Bracket { start, end })
}

/// Index range of discrete points lying strictly inside `[a, b]`.
///
/// Fails with [`Error::OutOfDomain`] if the interval leaves the domain or is
/// reversed.
pub fn select_points(x: &[f64], interval: Interval) -> Result<std::ops::Range<usize>> {
    if x.is_empty() || !(interval.start <= interval.end) {
        return Err(out_of_domain(x, interval));
    }

    let start = locate(x, interval.start, Side::Right);
    let end = locate(x, interval.end, Side::Left);

    if start == 0 || end >= x.len() {
        return Err(out_of_domain(x, interval));
    }

    // a == b on a point yields start == end + 1
    Ok(start..end.max(start))
}

/// Check that `x` is a usable breakpoint sequence: finite, strictly increasing,
/// with at least `minimum` entries.
pub fn validate_breakpoints(x: &[f64], minimum: usize) -> Result<()> {
    if x.len() < minimum {
        return Err(Error::too_short(minimum, x.len(), "breakpoints"));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(Error::non_finite("breakpoints"));
    }
    if let Some(i) = x.windows(2).position(|w| w[0] >= w[1]) {
        return Err(Error::not_increasing(i + 1));
    }
    Ok(())
}
