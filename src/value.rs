//! Total conversions from a raw parameter value into typed values.

/// String form stored for a boolean `true`.
pub const TRUE: &str = "1";
/// String form stored for a boolean `false`.
pub const FALSE: &str = "0";

/// Returns the string form of the boolean `b`.
pub fn from_bool(b: bool) -> &'static str {
    match b {
        true => TRUE,
        false => FALSE,
    }
}

/// Interprets a raw value as a boolean.
///
/// Only the literal `"0"` is false. The empty string (a bare switch) and any
/// other text is true.
pub fn to_bool(s: &str) -> bool {
    s != FALSE
}

/// Interprets a raw value as a base-10 integer from its leading digits.
///
/// Leading ASCII whitespace and a single `+` or `-` sign are accepted, then
/// digits are consumed until the first non-digit character. A value with no
/// leading digits is `0`. Values beyond the range of `i64` saturate.
pub fn to_int(s: &str) -> i64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut result: i64 = 0;
    for d in digits.bytes().take_while(|b| b.is_ascii_digit()) {
        let d = (d - b'0') as i64;
        // accumulate toward the sign so i64::MIN is reachable
        result = match negative {
            true => result.saturating_mul(10).saturating_sub(d),
            false => result.saturating_mul(10).saturating_add(d),
        };
    }
    result
}
