//! Multiplicity-weighted display smoothing for discrete profiles
//!
//! Every point is averaged with its neighbours until the window holds
//! `(k + 1)` profile units of multiplicity on each side, where one unit is the
//! multiplicity of the first (structural) point. The neighbour that crosses
//! the target contributes only the fraction of its value that is still needed.
//! Expansion stops at the array ends, so smoothing is weaker near the domain
//! boundaries.

use profile_core::SmoothingConfig;
use tracing::trace;

/// Smoothing window measured in profile units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmoothingWindow {
    size: usize,
}

impl SmoothingWindow {
    /// Create a window averaging in `size` neighbouring units per side
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Smoothed effective values `y / mp`.
    ///
    /// `y` and `mp` are expected to have the same length; extra entries of the
    /// longer slice are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use profile_functions::SmoothingWindow;
    ///
    /// let y = [0.0, 1.0, 1.0, 1.0, 0.0];
    /// let mp = [1.0; 5];
    /// let smoothed = SmoothingWindow::new(1).apply(&y, &mp);
    /// assert_eq!(smoothed[0], 0.5);
    /// assert_eq!(smoothed[2], 1.0);
    /// ```
    pub fn apply(&self, y: &[f64], mp: &[f64]) -> Vec<f64> {
        let n = y.len().min(mp.len());
        let (y, mp) = (&y[..n], &mp[..n]);

        if self.size == 0 || n == 0 {
            return y.iter().zip(mp).map(|(v, m)| v / m).collect();
        }

        let expected_mp = (self.size + 1) as f64 * mp[0];
        trace!(window = self.size, expected_mp, points = n, "smoothing discrete profile");

        (0..n)
            .map(|i| {
                if mp[i] >= expected_mp {
                    return y[i] / mp[i];
                }
                let right = (i + 1..n).map(|j| (y[j], mp[j]));
                let left = (0..i).rev().map(|j| (y[j], mp[j]));
                let (y_r, mp_r) = expand_side(right, mp[i], expected_mp);
                let (y_l, mp_l) = expand_side(left, mp[i], expected_mp);
                (y[i] + y_r + y_l) / (mp[i] + mp_r + mp_l)
            })
            .collect()
    }
}

impl From<SmoothingConfig> for SmoothingWindow {
    fn from(config: SmoothingConfig) -> Self {
        Self::new(config.window)
    }
}

/// Walk one side accumulating neighbour contributions until the running
/// multiplicity (starting from `own_mp`) reaches `expected_mp`.
///
/// Returns the accumulated value and multiplicity excluding the own point.
fn expand_side<I>(neighbours: I, own_mp: f64, expected_mp: f64) -> (f64, f64)
where
    I: Iterator<Item = (f64, f64)>,
{
    let mut acc_y = 0.0;
    let mut acc_mp = own_mp;
    for (y, mp) in neighbours {
        if acc_mp + mp < expected_mp {
            acc_y += y;
            acc_mp += mp;
        } else {
            let needed = expected_mp - acc_mp;
            acc_y += y * needed / mp;
            acc_mp = expected_mp;
            break;
        }
    }
    (acc_y, acc_mp - own_mp)
}
