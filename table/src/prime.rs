/// Returns the first prime found by forcing `n` odd and then stepping by two.
///
/// The result is always an odd prime, so `next_prime(2)` is 3.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = if n % 2 == 0 { n + 1 } else { n };
    while !is_prime(candidate) {
        candidate += 2;
    }

    candidate
}

/// Trial division up to the square root. Not fast, only used when sizing.
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}
