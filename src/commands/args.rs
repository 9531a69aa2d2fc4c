//! Leading-numeric extraction.
//!
//! Several commands take an optional number as their first argument. When the
//! first token parses and is in range it is consumed; otherwise every token is
//! left as payload and a default is used. A bad number is never an error.

/// Count used when no valid leading count is given.
pub const DEFAULT_COUNT: usize = 1;

/// Probability used when no valid leading probability is given.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Split off the first token when `parse` accepts it.
fn split_leading<T>(args: &[String], parse: impl Fn(&str) -> Option<T>) -> Option<(T, &[String])> {
    let (first, rest) = args.split_first()?;
    parse(first).map(|value| (value, rest))
}

/// A count is a run of ASCII digits that fits in `usize`.
///
/// Signs, decimal points and whitespace make the token payload.
pub fn parse_count(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// A probability is any float in `[0, 1]`. NaN and infinities are rejected.
pub fn parse_probability(token: &str) -> Option<f64> {
    token
        .parse::<f64>()
        .ok()
        .filter(|p| (0.0..=1.0).contains(p))
}

/// Leading count and remaining payload.
pub fn leading_count(args: &[String]) -> (usize, &[String]) {
    split_leading(args, parse_count).unwrap_or((DEFAULT_COUNT, args))
}

/// Leading probability and remaining payload.
pub fn leading_probability(args: &[String]) -> (f64, &[String]) {
    split_leading(args, parse_probability).unwrap_or((DEFAULT_PROBABILITY, args))
}
