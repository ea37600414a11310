//! Number formatting for user-facing messages.

/// Format an amount with `,` thousands separators and at most three
/// fractional digits (trailing zeros dropped): `30000.0` → `"30,000"`.
pub fn grouped(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }
    let negative = amount < 0.0;
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
