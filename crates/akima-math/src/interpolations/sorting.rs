//! Joint sorting of samples by abscissa.
//!
//! The sort is stable, so samples sharing an abscissa keep their input order
//! and every y stays paired with its x.  Already-ascending input skips the
//! sort entirely.

use akima_core::Real;

/// Samples reordered so that `x` is non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSamples {
    /// Abscissae in ascending order.
    pub x: Vec<Real>,
    /// Ordinates reordered to match `x`.
    pub y: Vec<Real>,
}

/// Sort `(xs[i], ys[i])` pairs by x, ascending.
///
/// Inputs are expected to be finite and of equal length.
pub fn sort_by_x(xs: &[Real], ys: &[Real]) -> SortedSamples {
    debug_assert_eq!(xs.len(), ys.len());

    if xs.windows(2).all(|w| w[0] <= w[1]) {
        return SortedSamples {
            x: xs.to_vec(),
            y: ys.to_vec(),
        };
    }

    // Sort indices only, then gather both arrays through the permutation.
    let mut order: Vec<usize> = (0..xs.len()).collect();
    order.sort_by(|&a, &b| xs[a].total_cmp(&xs[b]));

    SortedSamples {
        x: order.iter().map(|&i| xs[i]).collect(),
        y: order.iter().map(|&i| ys[i]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_is_copied_through() {
        let s = sort_by_x(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]);
        assert_eq!(s.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(s.y, vec![5.0, 6.0, 7.0]);
    }

    #[test]
    fn pairs_stay_together() {
        let s = sort_by_x(&[3.0, 0.0, 2.0, 1.0], &[9.0, 0.0, 4.0, 1.0]);
        assert_eq!(s.x, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(s.y, vec![0.0, 1.0, 4.0, 9.0]);
    }

    #[test]
    fn equal_abscissae_keep_input_order() {
        let s = sort_by_x(&[2.0, 1.0, 2.0, 0.0], &[10.0, 1.0, 20.0, 0.0]);
        assert_eq!(s.x, vec![0.0, 1.0, 2.0, 2.0]);
        assert_eq!(s.y, vec![0.0, 1.0, 10.0, 20.0]);
    }
}
