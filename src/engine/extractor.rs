//! Selection of the interval with the globally smallest value

use tracing::trace;

use crate::models::IntervalSequence;

/// Remove the pair starting at the smallest value of `sequence`
///
/// The flat sequence is scanned for its first minimum at index `m`. The values at
/// `m` and `m + 1` are returned as `(lo, hi)` and removed together, even when `m`
/// happens to be an upper bound; with well-formed input the minimum is always a
/// lower bound.
///
/// An empty sequence yields `(0, 0, empty)`. A minimum in the last slot yields
/// `hi = 0`.
#[must_use]
pub fn extract_smallest(sequence: IntervalSequence) -> (u64, u64, IntervalSequence) {
    let mut values = sequence.into_inner();

    let Some(min_index) = position_of_min(&values) else {
        return (0, 0, IntervalSequence::default());
    };

    let lo = values[min_index];
    let hi = values.get(min_index + 1).copied().unwrap_or(0);

    let end = (min_index + 2).min(values.len());
    values.drain(min_index..end);

    trace!(lo, hi, min_index, remaining = values.len(), "extracted smallest interval");
    (lo, hi, IntervalSequence::from_flat(values))
}

/// Index of the first occurrence of the minimum value
fn position_of_min(values: &[u64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .min_by_key(|&(_, value)| *value)
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(values: Vec<u64>) -> (u64, u64, Vec<u64>) {
        let (lo, hi, residual) = extract_smallest(IntervalSequence::from_flat(values));
        (lo, hi, residual.into_inner())
    }

    #[test]
    fn extract_from_middle() {
        assert_eq!(
            extract(vec![25, 30, 2, 19, 14, 23, 4, 8]),
            (2, 19, vec![25, 30, 14, 23, 4, 8])
        );
    }

    #[test]
    fn extract_from_empty_sequence() {
        assert_eq!(extract(vec![]), (0, 0, vec![]));
    }

    #[test]
    fn extract_single_pair() {
        assert_eq!(extract(vec![3, 5]), (3, 5, vec![]));
    }

    #[test]
    fn extract_first_pair() {
        assert_eq!(
            extract(vec![10, 20, 30, 40, 50, 60]),
            (10, 20, vec![30, 40, 50, 60])
        );
    }

    #[test]
    fn ties_resolve_to_earliest_index() {
        assert_eq!(extract(vec![2, 9, 2, 7]), (2, 9, vec![2, 7]));
    }

    #[test]
    fn minimum_in_upper_slot_takes_following_value() {
        // 1 sits in the upper slot of [5,1]; it is removed together with 7.
        assert_eq!(extract(vec![5, 1, 7, 9]), (1, 7, vec![5, 9]));
    }

    #[test]
    fn dangling_minimum_has_zero_partner() {
        assert_eq!(extract(vec![4, 6, 1]), (1, 0, vec![4, 6]));
    }
}
