//! Numeric coercion with JavaScript-style semantics: invalid input becomes
//! `NaN` rather than an error.

/// Largest integer an `f64` represents exactly, 2^53 - 1.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    // folded into an f64 so literals wider than 64 bits keep their magnitude
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
    .unwrap_or(f64::NAN)
}

/// Converts text to a number.
///
/// Surrounding whitespace is ignored and blank text is `0`. `0b`, `0o` and
/// `0x` prefixes select binary, octal and hexadecimal; a signed prefixed
/// literal is `NaN`. `Infinity` may carry a sign. Everything else is parsed
/// as a decimal literal, or is `NaN`.
///
/// ```
/// use toolbelt::number::to_number;
/// assert_eq!(to_number(" 3.2 "), 3.2);
/// assert_eq!(to_number("0x1f"), 31.0);
/// assert!(to_number("-0x1f").is_nan());
/// ```
pub fn to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    let lower = text.to_ascii_lowercase();
    if let Some(digits) = lower.strip_prefix("0b") {
        return parse_radix(digits, 2);
    }
    if let Some(digits) = lower.strip_prefix("0o") {
        return parse_radix(digits, 8);
    }
    if let Some(digits) = lower.strip_prefix("0x") {
        return parse_radix(digits, 16);
    }
    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // rust accepts "inf" and "nan" spellings that are not numbers here
    if text
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a number so that [`to_number`] reads it back: infinities are
/// spelled `Infinity` and `-Infinity`.
pub fn to_text(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

/// `NaN` becomes `0`, infinities become the largest finite values.
pub fn to_finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}

/// Finite value truncated toward zero.
pub fn to_integer(value: f64) -> f64 {
    to_finite(value).trunc()
}

/// Integer clamped into `[-MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
pub fn to_safe_integer(value: f64) -> f64 {
    clamp(to_integer(value), -MAX_SAFE_INTEGER, MAX_SAFE_INTEGER)
}

/// Clamps `value` into `[lower, upper]`. `NaN` stays `NaN`; bounds given in
/// the wrong order are swapped.
pub fn clamp(value: f64, lower: f64, upper: f64) -> f64 {
    if value.is_nan() {
        return value;
    }
    let (lower, upper) = if lower > upper { (upper, lower) } else { (lower, upper) };
    value.max(lower).min(upper)
}

/// Whether `value` lies in `[start, end)`. Reversed bounds are swapped.
pub fn in_range(value: f64, start: f64, end: f64) -> bool {
    let (start, end) = if start > end { (end, start) } else { (start, end) };
    value >= start && value < end
}
