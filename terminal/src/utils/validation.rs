//! Validation utilities for user input

/// Parse a withdrawal amount typed by the user.
///
/// Accepts `,` or `.` as the decimal separator. Returns `None` for anything
/// that is not a finite amount greater than zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }

    let amount: f64 = normalized.parse().ok()?;
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }

    Some(amount)
}

/// Parse an on/off flag
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "sim" | "yes" => Some(true),
        "false" | "0" | "off" | "nao" | "não" | "no" => Some(false),
        _ => None,
    }
}
