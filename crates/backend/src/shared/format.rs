/// Форматирует целое число с разделителями тысяч (запятыми)
///
/// ```text
/// format_thousands(1234567) == "1,234,567"
/// format_thousands(-4200)   == "-4,200"
/// ```
pub fn format_thousands(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// GP amount for display, fractional part truncated: `1234567.9` -> `"1,234,567 gp"`.
/// NaN and infinities render as `"0 gp"`.
pub fn format_gp(value: f64) -> String {
    if !value.is_finite() {
        return "0 gp".to_string();
    }
    format!("{} gp", format_thousands(value.trunc() as i64))
}
