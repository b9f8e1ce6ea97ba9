//! Keystroke transforms for the form fields.
//!
//! All of these are pure `&str -> String` functions; the enhancer decides when
//! to run them and writes the result back into the element.

use crate::domain::model::BlurOutcome;

/// Characters a name-like field may hold: ASCII letters and digits, the
/// Latin-1 letter block (U+00C0..=U+00FF), `&`, `.`, `-` and space.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || ('\u{C0}'..='\u{FF}').contains(&c)
        || matches!(c, '&' | '.' | '-' | ' ')
}

/// Filters, collapses spaces and uppercases a name-like value.
///
/// Not trimmed: while typing, the trailing space before the next word has to
/// survive. Characters whose uppercase form falls outside the allowed set
/// (`ÿ` becomes `Ÿ`) are dropped, which keeps the function idempotent.
pub fn normalize_name(value: &str) -> String {
    let mut out = String::with_capacity(value.len());

    for ch in value.chars().filter(|c| is_name_char(*c)) {
        for upper in ch.to_uppercase() {
            if !is_name_char(upper) {
                continue;
            }
            if upper == ' ' && out.ends_with(' ') {
                continue;
            }
            out.push(upper);
        }
    }

    out
}

/// Keeps digits and decimal separators, with `,` read as `.` and only the
/// first `.` kept as the separator.
pub fn format_numeric(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match cleaned.split_once('.') {
        Some((integer, rest)) => format!("{}.{}", integer, rest.replace('.', "")),
        None => cleaned,
    }
}

/// Focus-loss check of a numeric field. Reads the longest numeric prefix the
/// way a browser's `parseFloat` does and reports what it found.
pub fn check_numeric(value: &str) -> BlurOutcome {
    match parse_float_prefix(value) {
        Some(n) if n < 0.0 => BlurOutcome::Negative(n),
        Some(n) => BlurOutcome::Valid(n),
        None => BlurOutcome::NotANumber,
    }
}

fn parse_float_prefix(value: &str) -> Option<f64> {
    let s = value.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Strips everything but `0-9`, then truncates to `max_len` digits.
pub fn digits_only(value: &str, max_len: Option<usize>) -> String {
    let digits = value.chars().filter(char::is_ascii_digit);
    match max_len {
        Some(max) => digits.take(max).collect(),
        None => digits.collect(),
    }
}

pub fn lowercase_email(value: &str) -> String {
    value.to_lowercase()
}
