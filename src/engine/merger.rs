//! Single left-to-right absorption sweep

use tracing::trace;

use crate::models::IntervalSequence;

/// Absorb every pair of `residual` that starts below the running upper bound
///
/// Pairs are visited in order. A pair `(a, b)` with `a < hi` is consumed and
/// raises `hi` to `max(hi, b)`; later pairs are compared against the raised bound.
/// Any other pair is kept, in order, in the returned sequence. `lo` is returned
/// unchanged. A dangling trailing value is dropped.
#[must_use]
pub fn absorb_overlapping(
    lo: u64,
    hi: u64,
    residual: IntervalSequence,
) -> (u64, u64, IntervalSequence) {
    let mut hi = hi;
    let mut remaining = Vec::with_capacity(residual.len());

    for (a, b) in residual.pairs() {
        if a < hi {
            trace!(lo, hi, a, b, "absorbed pair");
            hi = hi.max(b);
        } else {
            remaining.push(a);
            remaining.push(b);
        }
    }

    (lo, hi, IntervalSequence::from_flat(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn absorb(lo: u64, hi: u64, values: Vec<u64>) -> (u64, u64, Vec<u64>) {
        let (lo, hi, remaining) = absorb_overlapping(lo, hi, IntervalSequence::from_flat(values));
        (lo, hi, remaining.into_inner())
    }

    #[test]
    fn absorb_chain_of_overlaps() {
        assert_eq!(
            absorb(10, 20, vec![15, 25, 21, 23, 22, 24, 60, 70]),
            (10, 25, vec![60, 70])
        );
    }

    #[test]
    fn nothing_absorbed() {
        assert_eq!(
            absorb(10, 12, vec![15, 25, 21, 23, 22, 24]),
            (10, 12, vec![15, 25, 21, 23, 22, 24])
        );
    }

    #[test]
    fn touching_pair_is_not_absorbed() {
        assert_eq!(absorb(2, 5, vec![5, 8]), (2, 5, vec![5, 8]));
    }

    #[test]
    fn contained_pair_keeps_upper_bound() {
        assert_eq!(absorb(2, 19, vec![4, 8]), (2, 19, vec![]));
    }

    #[test]
    fn single_sweep_does_not_revisit_kept_pairs() {
        // [22,30] is kept before [15,25] raises the bound past 22.
        assert_eq!(
            absorb(10, 20, vec![22, 30, 15, 25]),
            (10, 25, vec![22, 30])
        );
    }

    #[test]
    fn dangling_value_is_dropped() {
        assert_eq!(absorb(1, 3, vec![7, 9, 11]), (1, 3, vec![7, 9]));
    }
}
