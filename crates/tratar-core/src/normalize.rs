//! # Row Functions — Total Nullable-Text Transforms
//!
//! The two normalization functions applied per row by a batch execution
//! engine. Both are total over `Option<&str>`: absent input propagates to
//! absent output, and present input always yields a present output — a
//! malformed value maps to the empty-string sentinel, never to an error.
//!
//! ## Engine Contract
//!
//! Row functions are stateless and deterministic. The engine that invokes
//! them owns all scheduling and partitioning; it may re-execute any call
//! on retry without observable effect. Nothing here locks, allocates
//! shared state, or blocks.

/// Number of digits in a CNPJ registry number.
const CNPJ_LEN: usize = 14;

/// Normalize a raw CNPJ string into the canonical masked form.
///
/// Extracts the digit run (ASCII `0`–`9`, original order, everything else
/// discarded) and, when it is exactly 14 digits long, renders the
/// canonical `DD.DDD.DDD/DDDD-DD` mask. Any other digit count — including
/// zero — yields the empty string: the "present but invalid" sentinel,
/// distinct from `None`.
///
/// Idempotent on its own output: re-extracting digits from the canonical
/// mask recovers the same 14-digit run.
///
/// ```
/// use tratar_core::normalize_cnpj;
///
/// assert_eq!(
///     normalize_cnpj(Some("12345678000195")),
///     Some("12.345.678/0001-95".to_string()),
/// );
/// assert_eq!(normalize_cnpj(Some("123")), Some(String::new()));
/// assert_eq!(normalize_cnpj(None), None);
/// ```
pub fn normalize_cnpj(input: Option<&str>) -> Option<String> {
    let raw = input?;
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() != CNPJ_LEN {
        return Some(String::new());
    }

    Some(format_cnpj_digits(&digits))
}

/// Render a 14-digit run as `DD.DDD.DDD/DDDD-DD`.
///
/// Callers must pass exactly 14 ASCII digits; the slicing below is
/// byte-indexed and relies on it.
pub(crate) fn format_cnpj_digits(digits: &str) -> String {
    debug_assert_eq!(digits.len(), CNPJ_LEN);
    format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14],
    )
}

/// Sanitize a raw text value into uppercase alphanumeric-and-space form.
///
/// Trims surrounding whitespace, uppercases (full Unicode case map, as
/// the source data pipeline did), then retains only ASCII uppercase
/// letters, ASCII digits, and the literal space. Accented letters are not
/// in the retained class and are dropped, not transliterated. A final
/// trim removes any boundary spaces the filter step exposed, so the
/// result never carries leading or trailing whitespace and the function
/// is idempotent.
///
/// ```
/// use tratar_core::sanitize_string;
///
/// assert_eq!(
///     sanitize_string(Some("abc 123 XYZ")),
///     Some("ABC 123 XYZ".to_string()),
/// );
/// assert_eq!(sanitize_string(None), None);
/// ```
pub fn sanitize_string(input: Option<&str>) -> Option<String> {
    let raw = input?;
    let filtered: String = raw
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || *c == ' ')
        .collect();

    Some(filtered.trim().to_string())
}
