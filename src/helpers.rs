/// Formats `value` with two decimals and comma thousands separators,
/// e.g. `-1234.5` -> `-1,234.50`.
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // same sign rule as `{:.2}`: -0.001 prints as -0.00
    let sign = if value.is_sign_negative() && !value.is_nan() { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(999.999), "1,000.00");
        assert_eq!(format_thousands(1234567.891), "1,234,567.89");
        assert_eq!(format_thousands(20_882_000_000.0), "20,882,000,000.00");
    }

    #[test]
    fn keeps_sign_in_front_of_digits() {
        assert_eq!(format_thousands(-1234.5), "-1,234.50");
        assert_eq!(format_thousands(-12.0), "-12.00");
        assert_eq!(format_thousands(-0.001), "-0.00");
        assert_eq!(format_thousands(-0.001), format!("{:.2}", -0.001));
        assert_eq!(format_thousands(-0.0), "-0.00");
    }
}
