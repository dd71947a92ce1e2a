//! # Shared Utility Functions
//!
//! Formatting helpers used by every view that prints money.
//!
//! ## Currency Formatting
//!
//! Amounts are printed the way Brazilian Portuguese writes them: `.` groups
//! thousands and `,` separates decimals.
//!
//! ```rust
//! use shared::utils::format_brl;
//!
//! assert_eq!(format_brl(1234.5, 2), "1.234,50");
//! assert_eq!(format_brl(0.01, 3), "0,010");
//! ```

/// Format `value` with exactly `decimals` fraction digits in pt-BR style.
///
/// Non-finite values are treated as zero.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_brl;
///
/// assert_eq!(format_brl(-5.0, 2), "-5,00");
/// assert_eq!(format_brl(f64::NAN, 2), "0,00");
/// ```
pub fn format_brl(value: f64, decimals: usize) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    // "-0,00" would read as a debt
    let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{sign}{grouped},{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `R$ ` prefixed [`format_brl`]
pub fn format_reais(value: f64, decimals: usize) -> String {
    format!("R$ {}", format_brl(value, decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl_groups_thousands() {
        assert_eq!(format_brl(0.0, 2), "0,00");
        assert_eq!(format_brl(12.3, 2), "12,30");
        assert_eq!(format_brl(1_000.0, 2), "1.000,00");
        assert_eq!(format_brl(1_234_567.891, 2), "1.234.567,89");
    }

    #[test]
    fn test_format_brl_decimals() {
        assert_eq!(format_brl(0.01, 3), "0,010");
        assert_eq!(format_brl(7.0, 0), "7");
    }

    #[test]
    fn test_format_brl_negative_and_rounding() {
        assert_eq!(format_brl(-1500.5, 2), "-1.500,50");
        assert_eq!(format_brl(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_reais() {
        assert_eq!(format_reais(5.5, 2), "R$ 5,50");
    }
}
