//! Number formatting for summaries.

/// Two decimals with thousands separators: `2215.91` → `"2,215.91"`.
///
/// Non-finite input renders as `"0.00"`.
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let cents = (value.abs() * 100.0).round() as u128;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// Explicitly signed, two decimals. Negative zero prints as `+0.00`.
pub fn signed(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:+.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(2215.91), "2,215.91");
        assert_eq!(thousands(0.0), "0.00");
        assert_eq!(thousands(999.999), "1,000.00");
        assert_eq!(thousands(1_234_567.0), "1,234,567.00");
        assert_eq!(thousands(12.3), "12.30");
    }

    #[test]
    fn negatives_and_garbage() {
        assert_eq!(thousands(-1234.5), "-1,234.50");
        assert_eq!(thousands(-0.001), "0.00");
        assert_eq!(thousands(f64::NAN), "0.00");
    }

    #[test]
    fn signed_values() {
        assert_eq!(signed(1.5), "+1.50");
        assert_eq!(signed(-1.0), "-1.00");
        assert_eq!(signed(-0.0), "+0.00");
    }
}
