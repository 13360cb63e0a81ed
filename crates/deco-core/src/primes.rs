//! Naive trial-division prime counting.

/// Report whether `number` is prime.
///
/// Anything below 2 is not prime. Otherwise every candidate divisor from 2 up
/// to and including `floor(sqrt(number))` is tried, so perfect squares such as
/// 9 or 25 are rejected.
#[must_use]
pub fn is_prime(number: i64) -> bool {
    if number < 2 {
        return false;
    }
    !(2..=number.isqrt()).any(|divisor| number % divisor == 0)
}

/// Count the primes in the half-open range `[0, bound)`.
///
/// Returns 0 for `bound <= 0`.
#[must_use]
pub fn count_primes(bound: i64) -> u64 {
    if bound <= 0 {
        return 0;
    }
    let count = (0..bound).filter(|&number| is_prime(number)).count();
    tracing::trace!(bound, count, "prime scan complete");
    count as u64
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const PRIMES_BELOW_50: [i64; 15] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47];

    #[rstest]
    #[case(i64::MIN)]
    #[case(-7)]
    #[case(-1)]
    #[case(0)]
    #[case(1)]
    fn numbers_below_two_are_not_prime(#[case] number: i64) {
        assert!(!is_prime(number));
    }

    #[test]
    fn classifies_everything_below_fifty() {
        for number in 2..50 {
            assert_eq!(
                is_prime(number),
                PRIMES_BELOW_50.contains(&number),
                "misclassified {number}"
            );
        }
    }

    #[rstest]
    #[case(4)]
    #[case(9)]
    #[case(25)]
    #[case(49)]
    #[case(121)]
    #[case(10_201)]
    fn perfect_squares_are_composite(#[case] number: i64) {
        assert!(!is_prime(number));
    }

    #[test]
    fn large_prime_near_square_boundary() {
        // 101 * 101 = 10201; the neighbours either side are prime.
        assert!(is_prime(10_193));
        assert!(is_prime(10_211));
    }

    #[rstest]
    #[case(-100, 0)]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 0)]
    #[case(3, 1)]
    #[case(10, 4)]
    #[case(11, 4)]
    #[case(12, 5)]
    #[case(100, 25)]
    #[case(1_000, 168)]
    fn counts_primes_below_bound(#[case] bound: i64, #[case] expected: u64) {
        assert_eq!(count_primes(bound), expected);
    }

    #[test]
    fn counts_primes_below_one_hundred_thousand() {
        assert_eq!(count_primes(100_000), 9592);
    }
}
