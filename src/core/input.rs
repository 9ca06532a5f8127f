//! Keystroke shaping for the booking form fields.

const ZIP_LENGTH: usize = 5;
const PHONE_DIGITS: usize = 10;

fn ascii_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keeps the first five ASCII digits of `raw`.
///
/// The result may still be shorter than five digits; the classifier
/// validates it independently.
pub fn sanitize_zip_input(raw: &str) -> String {
    ascii_digits(raw).chars().take(ZIP_LENGTH).collect()
}

/// Formats a partially typed US phone number as `(555) 123-4567`.
///
/// Digits past the tenth are dropped.
pub fn format_phone(raw: &str) -> String {
    let digits: String = ascii_digits(raw).chars().take(PHONE_DIGITS).collect();

    match digits.len() {
        0 => String::new(),
        1..=3 => format!("({}", digits),
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
