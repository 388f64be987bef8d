//! Square computation

/// Square of `n`
///
/// Widened to `i128` so every `i64` input, `i64::MIN` included, has a result.
#[must_use]
pub fn square(n: i64) -> i128 {
    let n = i128::from(n);
    n * n
}

/// Log message reporting a computed square, e.g. `Square : 10  = 100`
#[must_use]
pub fn square_message(n: i64, squared: i128) -> String {
    format!("Square : {n}  = {squared}")
}
