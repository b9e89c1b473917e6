use num_bigint::BigUint;

use crate::Error;

/// Computes the factorial of the given number.
///
/// The result is exact: `BigUint` grows as needed, so `25!` and beyond are
/// not truncated to 64 bits.
pub fn factorial(n: u64) -> BigUint {
    let mut result = BigUint::from(1_u32);
    for i in 1..=n {
        result *= i;
    }
    result
}

/// Like [`factorial`], but for signed input. Negative numbers are rejected.
pub fn checked_factorial(n: i64) -> Result<BigUint, Error> {
    u64::try_from(n)
        .map(factorial)
        .map_err(|_| Error::Negative(n))
}

/// Signed factorial without input validation.
///
/// The loop over `1..=n` is empty for negative `n`, so this returns 1 there.
/// That value is meaningless; prefer [`checked_factorial`].
pub fn factorial_unchecked_signed(n: i64) -> BigUint {
    u64::try_from(n)
        .map(factorial)
        .unwrap_or_else(|_| BigUint::from(1_u32))
}

/// Parses a decimal integer and returns its factorial.
pub fn parse_input(s: &str) -> Result<BigUint, Error> {
    let n = s.trim().parse::<i64>()?;
    checked_factorial(n)
}
