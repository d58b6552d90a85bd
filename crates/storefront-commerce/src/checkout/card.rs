//! Input masks for the payment form fields.
//!
//! Each mask is applied to the whole field value after every edit, so it
//! must be idempotent on its own output.

/// Longest card number field value: sixteen digits and three spaces.
pub const CARD_NUMBER_MAX_LEN: usize = 19;

const CARD_DIGITS_MIN: usize = 4;
const CARD_DIGITS_MAX: usize = 16;
const EXPIRY_MAX_LEN: usize = 5;
const CVV_MAX_LEN: usize = 3;

fn digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Group card digits into blocks of four.
///
/// Non-digits are dropped and at most sixteen digits are kept. Until four
/// digits have been typed the value is left as entered.
pub fn format_card_number(input: &str) -> String {
    let digits = digits(input);
    if digits.len() < CARD_DIGITS_MIN {
        return input.chars().take(CARD_NUMBER_MAX_LEN).collect();
    }

    let kept = &digits[..digits.len().min(CARD_DIGITS_MAX)];
    kept.as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render expiry digits as `MM/YY`.
pub fn format_expiry(input: &str) -> String {
    let digits = digits(input);
    if digits.len() <= 2 {
        return digits;
    }
    let year_end = digits.len().min(4);
    let formatted = format!("{}/{}", &digits[..2], &digits[2..year_end]);
    formatted.chars().take(EXPIRY_MAX_LEN).collect()
}

/// Keep up to three CVV digits.
pub fn format_cvv(input: &str) -> String {
    digits(input).chars().take(CVV_MAX_LEN).collect()
}
