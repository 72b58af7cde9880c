// src/model_config/normalize.rs
// Coercion of raw form strings into typed values at render time.

/// Parse `raw` as a finite number, or return `fallback`.
///
/// Empty input, non-numeric text, infinities and NaN all yield `fallback`, so
/// the result is always finite when `fallback` is.
pub fn to_number(raw: &str, fallback: f64) -> f64 {
    parse_finite(raw).unwrap_or(fallback)
}

/// Split a comma separated field into trimmed, non-empty pieces.
///
/// Order is preserved and duplicates are kept.
pub fn to_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`to_list`], keeping only the pieces that parse as finite numbers.
pub fn to_number_list(raw: &str) -> Vec<f64> {
    to_list(raw)
        .iter()
        .filter_map(|piece| parse_finite(piece))
        .collect()
}

/// Render a number the way the editor displays it.
///
/// Integral values carry no fractional part, negative zero prints as `0`, and
/// very large or very small magnitudes switch to exponent notation (`1e+21`).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        };
    }

    value.to_string()
}

fn parse_finite(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(value) = parse_radix_literal(trimmed) {
        return value.filter(|n| n.is_finite());
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `0x`, `0o` and `0b` integer literals. Returns `None` when `text` has no such
/// prefix, and `Some(None)` when the prefix is there but the digits are bad.
/// A sign in front of the prefix is not a literal and falls through to the
/// float parser, which rejects it.
fn parse_radix_literal(text: &str) -> Option<Option<f64>> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_falls_back_on_bad_input() {
        assert_eq!(to_number("", 20.0), 20.0);
        assert_eq!(to_number("   ", 20.0), 20.0);
        assert_eq!(to_number("abc", 0.7), 0.7);
        assert_eq!(to_number("inf", 1.0), 1.0);
        assert_eq!(to_number("NaN", 1.0), 1.0);
        assert_eq!(to_number("1e400", 5.0), 5.0);
    }

    #[test]
    fn test_to_number_parses_numbers() {
        assert_eq!(to_number("3.5", 0.0), 3.5);
        assert_eq!(to_number(" 42 ", 0.0), 42.0);
        assert_eq!(to_number("-0.25", 0.0), -0.25);
        assert_eq!(to_number("6000000000", 0.0), 6_000_000_000.0);
    }

    #[test]
    fn test_to_number_accepts_radix_literals() {
        assert_eq!(to_number("0x10", 0.0), 16.0);
        assert_eq!(to_number(" 0XfF ", 0.0), 255.0);
        assert_eq!(to_number("0o7", 0.0), 7.0);
        assert_eq!(to_number("0b101", 0.0), 5.0);
        assert_eq!(to_number_list("0x1000, 8"), vec![4096.0, 8.0]);
    }

    #[test]
    fn test_to_number_rejects_malformed_radix_literals() {
        assert_eq!(to_number("0x", 20.0), 20.0);
        assert_eq!(to_number("0b102", 20.0), 20.0);
        assert_eq!(to_number("0o8", 20.0), 20.0);
        assert_eq!(to_number("-0x10", 20.0), 20.0);
        assert_eq!(to_number("+0x10", 20.0), 20.0);
        assert_eq!(to_number("0x1.8", 20.0), 20.0);
    }

    #[test]
    fn test_to_list_trims_and_drops_empty() {
        assert_eq!(to_list("a, b ,,c"), vec!["a", "b", "c"]);
        assert_eq!(to_list("gguf,gguf"), vec!["gguf", "gguf"]);
        assert!(to_list("").is_empty());
        assert!(to_list("  , ,").is_empty());
    }

    #[test]
    fn test_to_number_list_drops_invalid() {
        assert_eq!(to_number_list("1, x, 3"), vec![1.0, 3.0]);
        assert_eq!(to_number_list("256000"), vec![256000.0]);
        assert!(to_number_list("x,y").is_empty());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(256000.0), "256000");
        assert_eq!(format_number(6_000_000_000.0), "6000000000");
        assert_eq!(format_number(0.7), "0.7");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e-7), "1e-7");
    }
}
