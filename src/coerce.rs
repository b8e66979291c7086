//! Lenient number parsing for form input.
//!
//! Form fields are sent to the backend after the same prefix-based coercion a browser applies:
//! leading whitespace is skipped, the longest numeric prefix is taken, and input without one
//! becomes `None` (sent as JSON `null`).

use serde_json::Number;

///Digit runs past `i64` fall back to a float, the way the browser keeps them as large numbers.
pub fn parse_int(input: &str) -> Option<Number> {
    let trimmed = input.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return None;
    }

    let prefix = &trimmed[..sign_len + digits];
    prefix.parse::<i64>().map(Number::from).ok().or_else(|| {
        prefix
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
    })
}

pub fn parse_float(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let digit_run = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(trimmed.starts_with(['+', '-']));
    let integer_digits = digit_run(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digit_run(end + 1);
        if integer_digits > 0 || fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exponent_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent_digits = digit_run(end + 1 + exponent_sign);
        if exponent_digits > 0 {
            end += 1 + exponent_sign + exponent_digits;
        }
    }

    trimmed[..end].parse().ok().filter(|f: &f64| f.is_finite())
}
