use itertools::Itertools;

/// Groups the digits of an integer in threes: `1234567` -> `"1,234,567"`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let head = digits.len() % 3;
    let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend((head..digits.len()).step_by(3).map(|i| &digits[i..i + 3]));
    let grouped = groups.into_iter().join(",");
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole-dollar currency with separators: `$10,000`.
pub fn format_currency(value: i64) -> String {
    if value < 0 {
        format!("-${}", format_thousands(-value))
    } else {
        format!("${}", format_thousands(value))
    }
}

/// Two-decimal currency: `$120.00`.
pub fn format_amount(value: f64) -> String {
    format!("${:.2}", value)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Rounds to one decimal place, half away from zero.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
