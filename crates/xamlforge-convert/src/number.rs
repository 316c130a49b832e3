//! Decimal formatting for attribute values.

/// Compact decimal: at most three fractional digits, trailing zeros
/// trimmed, `-0` folded to `0`.
///
/// `10.0` → `"10"`, `0.125` → `"0.125"`, `1.23456` → `"1.235"`.
pub fn compact(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_owned() } else { s.to_owned() }
}

/// Fixed three fractional digits, used in comments and stop offsets.
pub fn fixed(value: f64) -> String {
    let s = format!("{value:.3}");
    if s == "-0.000" { "0.000".to_owned() } else { s }
}

/// `x,y` pair as XAML point syntax.
pub fn point(x: f64, y: f64) -> String {
    format!("{},{}", compact(x), compact(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_trims() {
        assert_eq!(compact(10.0), "10");
        assert_eq!(compact(100.5), "100.5");
        assert_eq!(compact(0.125), "0.125");
        assert_eq!(compact(1.23456), "1.235");
        assert_eq!(compact(-3.25), "-3.25");
    }

    #[test]
    fn compact_folds_negative_zero() {
        assert_eq!(compact(-0.0), "0");
        assert_eq!(compact(-0.0001), "0");
    }

    #[test]
    fn fixed_keeps_three_digits() {
        assert_eq!(fixed(0.5), "0.500");
        assert_eq!(fixed(10.0), "10.000");
        assert_eq!(fixed(-0.0), "0.000");
    }

    #[test]
    fn point_syntax() {
        assert_eq!(point(0.0, 0.5), "0,0.5");
    }
}
