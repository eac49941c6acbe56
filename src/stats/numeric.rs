// src/stats/numeric.rs
//
// Coercion of table cells into numbers. A cell that does not parse is 0,
// never an error.

/// Parse a cell as a float. Accepts surrounding whitespace, a trailing `%`
/// and thousands separators. Unparseable or non-finite input → `None`.
pub fn parse_f64(cell: &str) -> Option<f64> {
    let t = cell.trim().trim_end_matches('%').trim();
    if t.is_empty() {
        return None;
    }
    let cleaned: String = t.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Float cell, 0 when unparseable.
pub fn coerce_f64(cell: &str) -> f64 {
    parse_f64(cell).unwrap_or(0.0)
}

/// Counting cell: fractional values truncate, negative or unparseable → 0.
pub fn coerce_count(cell: &str) -> u32 {
    match parse_f64(cell) {
        Some(v) if v > 0.0 => {
            if v >= u32::MAX as f64 { u32::MAX } else { v.trunc() as u32 }
        }
        _ => 0,
    }
}

/// Optional attribute: a blank cell stays absent, garbage becomes 0.
pub fn coerce_optional(cell: &str) -> Option<f64> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(non_negative(coerce_f64(cell)))
    }
}

/// Attribute guard applied at compute time: NaN, infinities and negatives → 0.
pub fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Round to 2 decimals, exact halves to the even neighbour. `-0.0` comes back as `0.0`.
pub fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round_ties_even() / 100.0;
    if r == 0.0 { 0.0 } else { r }
}

/// `num / den`, or 0 when the denominator is 0 or the quotient is not finite.
pub fn ratio_or_zero(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let q = num / den;
    if q.is_finite() { q } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_cells_become_zero() {
        assert_eq!(coerce_count("n/a"), 0);
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("-4"), 0);
        assert_eq!(coerce_count(" 12 "), 12);
        assert_eq!(coerce_count("12.9"), 12);
        assert_eq!(coerce_count("1,204"), 1204);
        assert_eq!(coerce_f64("NaN"), 0.0);
        assert_eq!(coerce_f64("inf"), 0.0);
        assert_eq!(coerce_f64("65%"), 65.0);
    }

    #[test]
    fn optional_blank_stays_absent() {
        assert_eq!(coerce_optional("  "), None);
        assert_eq!(coerce_optional("abc"), Some(0.0));
        assert_eq!(coerce_optional("185"), Some(185.0));
    }

    #[test]
    fn rounding_and_ratio_guards() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(-0.001), 0.0);
        assert!(round2(-0.001).is_sign_positive());
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        assert_eq!(ratio_or_zero(5.0, 0.0), 0.0);
        assert_eq!(ratio_or_zero(1.0, 4.0), 0.25);
        assert_eq!(ratio_or_zero(f64::MAX, f64::MIN_POSITIVE), 0.0);
    }
}
