//! Sequence Helpers
//!
//! Random input generation, the closed-form comparison counter and a
//! sortedness check shared by the executor and the tests.

use rand::Rng;

/// Comparisons implied by a sequence of length `n`: `n(n-1)/2`.
///
/// This is a closed-form figure, not a count of what any algorithm did.
/// `n = 0` and `n = 1` both give 0.
#[inline]
pub fn count_comparisons(n: usize) -> u64 {
    let n = n as u64;
    // One of n, n-1 is even, so halve that one first to keep the product in range.
    if n < 2 {
        0
    } else if n % 2 == 0 {
        (n / 2).saturating_mul(n - 1)
    } else {
        n.saturating_mul((n - 1) / 2)
    }
}

/// `len` values drawn uniformly from `[0, upper)`.
///
/// `upper` must be positive.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, upper: i64) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..upper)).collect()
}

/// Whether `seq` is in non-decreasing order.
#[inline]
pub fn is_sorted(seq: &[i64]) -> bool {
    seq.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_count_comparisons() {
        assert_eq!(count_comparisons(0), 0);
        assert_eq!(count_comparisons(1), 0);
        assert_eq!(count_comparisons(2), 1);
        assert_eq!(count_comparisons(5), 10);
        assert_eq!(count_comparisons(6), 15);
        assert_eq!(count_comparisons(1_000_000), 499_999_500_000);
    }

    #[test]
    fn test_count_comparisons_large() {
        let n = u32::MAX as usize;
        let expected = (n as u128 * (n as u128 - 1) / 2) as u64;
        assert_eq!(count_comparisons(n), expected);
    }

    #[test]
    fn test_random_sequence_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let seq = random_sequence(&mut rng, 10_000, 1_000_000);
        assert_eq!(seq.len(), 10_000);
        assert!(seq.iter().all(|&v| (0..1_000_000).contains(&v)));
    }

    #[test]
    fn test_random_sequence_is_seeded() {
        let a = random_sequence(&mut StdRng::seed_from_u64(1), 64, 100);
        let b = random_sequence(&mut StdRng::seed_from_u64(1), 64, 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 3, 4, 5]));
        assert!(is_sorted(&[1, 1, 1, 1]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[]));
        assert!(!is_sorted(&[5, 4, 3, 2, 1]));
        assert!(!is_sorted(&[1, 3, 2]));
    }
}
