//! Display formatting for board values.

/// Pipeline total in thousands: `1_055_000.0` -> `"$1055K"`.
///
/// Halves round away from zero.
pub fn format_thousands(value: f64, symbol: &str) -> String {
    format!("{symbol}{:.0}K", (value / 1000.0).round())
}

/// Full currency amount with thousands separators: `450000.0` -> `"$450,000"`.
///
/// Keeps up to three fraction digits and drops trailing zeros.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}{value}");
    }

    // Whole thousandths, ties rounded away from zero.
    let thousandths = (value.abs() * 1000.0).round();
    let digits = format!("{thousandths:04.0}");
    let (int_part, frac_part) = digits.split_at(digits.len() - 3);
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + symbol.len() + 2);
    out.push_str(symbol);
    if value < 0.0 && thousandths > 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Score badge shown on a lead card.
pub fn star_rating(score: i32) -> String {
    format!("★ {score}")
}
