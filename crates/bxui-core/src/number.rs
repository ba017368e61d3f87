#![forbid(unsafe_code)]

//! Form-field number coercion and fixed-decimal formatting.
//!
//! Generator pages read every input as text. Two coercions are in play:
//!
//! - [`form_number`]: whole-string conversion. Surrounding whitespace is
//!   ignored, the empty string is `0`, and anything else that is not a
//!   complete numeric literal is `NaN`.
//! - [`parse_float`]: prefix conversion. Leading whitespace is skipped and the
//!   longest numeric prefix is used (`"12mm"` is `12`); no prefix is `NaN`.
//!
//! Neither function fails: `NaN` is the "not a number" signal and flows into
//! downstream arithmetic and output unchanged.

/// Convert a whole field value to a number.
///
/// # Example
///
/// ```
/// use bxui_core::form_number;
///
/// assert_eq!(form_number(" 42 "), 42.0);
/// assert_eq!(form_number(""), 0.0);
/// assert_eq!(form_number("0x10"), 16.0);
/// assert!(form_number("12mm").is_nan());
/// ```
#[must_use]
pub fn form_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(value) = infinity_literal(trimmed) {
        return value;
    }
    if let Some(value) = radix_literal(trimmed) {
        return value;
    }
    // `str::parse` also accepts "inf" and "nan", which are not numbers here.
    let plain = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !plain {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Convert the longest numeric prefix of a field value.
///
/// # Example
///
/// ```
/// use bxui_core::parse_float;
///
/// assert_eq!(parse_float("  12.5mm"), 12.5);
/// assert_eq!(parse_float("3e2x"), 300.0);
/// assert!(parse_float("").is_nan());
/// assert!(parse_float("mm").is_nan());
/// ```
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    if let Some(rest) = trimmed.strip_prefix('-') {
        if rest.starts_with("Infinity") {
            return f64::NEG_INFINITY;
        }
    } else if trimmed.strip_prefix('+').unwrap_or(trimmed).starts_with("Infinity") {
        return f64::INFINITY;
    }

    let end = numeric_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return f64::NAN;
    }
    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits after the point in the exact expansion of any `f64`; the smallest
/// subnormal needs 1074.
const EXACT_DECIMALS: usize = 1100;

/// Largest number of decimals accepted by [`format_fixed`].
pub const MAX_DECIMALS: usize = 100;

/// Format with a fixed number of decimals.
///
/// Rounding is half-up in magnitude on the exact binary value, so `0.125`
/// gives `0.13` while `1.005` (stored just below) gives `1.00`. `NaN` formats
/// as `NaN`, infinities as `Infinity` / `-Infinity`, and negative zero as
/// positive zero. Magnitudes of `1e21` and above use exponent notation.
/// `decimals` is clamped to [`MAX_DECIMALS`].
///
/// # Example
///
/// ```
/// use bxui_core::format_fixed;
///
/// assert_eq!(format_fixed(3.125, 2), "3.13");
/// assert_eq!(format_fixed(-0.125, 2), "-0.13");
/// assert_eq!(format_fixed(1.005, 2), "1.00");
/// ```
#[must_use]
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value.abs() >= 1e21 {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => text,
        };
    }
    let decimals = decimals.min(MAX_DECIMALS);
    let digits = round_half_up(value.abs(), decimals);
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}{digits}")
}

/// Round the exact decimal expansion of a finite non-negative value.
fn round_half_up(magnitude: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", EXACT_DECIMALS, magnitude);
    let (int_part, frac) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().take(decimals))
        .collect();
    if frac.as_bytes().get(decimals).is_some_and(|&d| d >= b'5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }
    let int_len = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 1);
    out.extend(digits[..int_len].iter().map(|&d| char::from(d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|&d| char::from(d)));
    }
    out
}

/// Round to `decimals` places the way a displayed value is re-read: format,
/// then parse back.
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format_fixed(value, decimals).parse().unwrap_or(value)
}

fn infinity_literal(text: &str) -> Option<f64> {
    match text {
        "Infinity" | "+Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = if let Some(rest) = text.strip_prefix("0x").or(text.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = text.strip_prefix("0o").or(text.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = text.strip_prefix("0b").or(text.strip_prefix("0B")) {
        (2, rest)
    } else {
        return None;
    };
    Some(
        u64::from_str_radix(digits, radix)
            .map(|v| v as f64)
            .unwrap_or(f64::NAN),
    )
}

/// Length of the longest `[+-]?digits[.digits][(e|E)[+-]?digits]` prefix
/// containing at least one mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        mantissa_digits += j - frac_start;
        if mantissa_digits > 0 {
            i = j;
        }
    }
    if mantissa_digits == 0 {
        return 0;
    }
    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}
