//! Amount text handling.

/// Display text for a missing or unreadable amount.
pub const ZERO_AMOUNT: &str = "$0.00";

/// Reduce typed text to a plain decimal number.
///
/// Every character other than ASCII digits and `.` is dropped. If more than
/// one `.` remains, the first is kept and the rest removed.
///
/// ```
/// use tally::form::sanitize_amount;
///
/// assert_eq!(sanitize_amount("1a2.3.4"), "12.34");
/// assert_eq!(sanitize_amount("$ 9.99"), "9.99");
/// ```
pub fn sanitize_amount(text: &str) -> String {
    let mut seen_point = false;
    text.chars()
        .filter(|&c| match c {
            '0'..='9' => true,
            '.' if !seen_point => {
                seen_point = true;
                true
            }
            _ => false,
        })
        .collect()
}

/// Read the leading decimal number of `text`, ignoring anything after it.
///
/// Leading whitespace, a sign, a fraction and an exponent are accepted.
/// Returns `None` when no digits lead the text.
pub fn parse_amount(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Format amount text as dollars with two decimals.
///
/// Text with no leading number formats as `$0.00`.
///
/// ```
/// use tally::form::format_currency;
///
/// assert_eq!(format_currency("50.5"), "$50.50");
/// assert_eq!(format_currency("abc"), "$0.00");
/// ```
pub fn format_currency(text: &str) -> String {
    match parse_amount(text) {
        Some(value) if value.is_finite() => format_dollars(value),
        _ => ZERO_AMOUNT.to_string(),
    }
}

/// Format a numeric amount as dollars with two decimals.
pub fn format_dollars(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize_amount("1a2.3.4"), "12.34");
        assert_eq!(sanitize_amount("..5"), ".5");
        assert_eq!(sanitize_amount("-12,50"), "1250");
        assert_eq!(sanitize_amount(""), "");
        assert_eq!(sanitize_amount("abc"), "");
        assert_eq!(sanitize_amount("٣.5"), ".5");
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_amount("12.34"), Some(12.34));
        assert_eq!(parse_amount("  7abc"), Some(7.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("5."), Some(5.0));
        assert_eq!(parse_amount("-3.25"), Some(-3.25));
        assert_eq!(parse_amount("1e2x"), Some(100.0));
        assert_eq!(parse_amount("1e"), Some(1.0));
        assert_eq!(parse_amount("12.34.56"), Some(12.34));
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("50.5"), "$50.50");
        assert_eq!(format_currency("0.00"), "$0.00");
        assert_eq!(format_currency("9.999"), "$10.00");
        assert_eq!(format_currency("12"), "$12.00");
        assert_eq!(format_currency(""), "$0.00");
        assert_eq!(format_currency("abc"), "$0.00");
        assert_eq!(format_currency("1e999"), "$0.00");
    }
}
