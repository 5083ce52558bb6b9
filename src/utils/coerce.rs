//! Lenient numeric coercion for form fields
//!
//! Form posts carry every value as a string. Surrounding whitespace is
//! ignored and fractional input truncates toward zero.

fn parse_finite(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}

/// Exercise duration. Never fails: missing, unparsable or negative input
/// becomes 0.
pub fn coerce_duration(raw: Option<&str>) -> i64 {
    raw.and_then(parse_finite).map(truncate_duration).unwrap_or(0)
}

/// Whole, non-negative duration from a float; non-finite values become 0
pub fn truncate_duration(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    value.trunc().max(0.0) as i64
}

/// Log limit. `None` when the value is not a non-negative number.
pub fn parse_limit(raw: &str) -> Option<usize> {
    let value = parse_finite(raw)?;
    if value < 0.0 {
        return None;
    }
    Some(value.trunc() as usize)
}
