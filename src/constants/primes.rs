//! Small prime generation
//!
//! The SHA-2 constants are indexed by the first 80 primes (the largest is
//! 409), so plain trial division is all that is needed here. None of these
//! functions are meant to scale to large inputs.

/// Returns `true` if `value` is prime.
///
/// Tests every divisor `d ≥ 2` with `d² ≤ value`. Zero and one are not prime.
pub fn is_prime(value: u64) -> bool {
    if value < 2 {
        return false;
    }

    let mut divisor = 2u64;

    while divisor * divisor <= value {
        if value % divisor == 0 {
            return false;
        }

        divisor += 1;
    }

    true
}

/// Returns the smallest prime greater than or equal to `value`.
pub fn next_prime(value: u64) -> u64 {
    let mut candidate = value.max(2);

    while !is_prime(candidate) {
        candidate += 1;
    }

    candidate
}

/// Returns the `index`-th prime, zero-indexed (`nth_prime(0) == 2`).
pub fn nth_prime(index: usize) -> u64 {
    let mut prime = 2;

    for _ in 0..index {
        prime = next_prime(prime + 1);
    }

    prime
}

/// Returns the first `N` primes in ascending order.
pub fn first_primes<const N: usize>() -> [u64; N] {
    let mut primes = [0u64; N];
    let mut candidate = 2;

    for slot in primes.iter_mut() {
        candidate = next_prime(candidate);
        *slot = candidate;
        candidate += 1;
    }

    primes
}
