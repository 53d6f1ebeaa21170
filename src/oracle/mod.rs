/// Trial-division primality test.
///
/// Total over all of `i64`: anything below 2 (including negatives) is not
/// prime. After checking 2 itself, only odd divisors up to the integer
/// square root are tried.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    // i <= n / i is i * i <= n without the risk of overflowing i64.
    let mut i = 3;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
