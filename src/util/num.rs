/// How a single symbol's text reads as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericText {
    /// The text is a base-10 integer that fits in an `i32`.
    Int(i32),
    /// The text is a base-10 integer that does not fit in an `i32`.
    IntOutOfRange,
    /// The text is a floating literal such as `3.14`, `.5` or `1e-3`.
    Double(f64),
    /// The text is not numeric at all.
    NotNumeric,
}

/// Classifies the text of a symbol token.
///
/// Integers are tried first, so `42` is always an integer and never a double.
/// A floating literal must start with a digit or a `.`; this keeps words that
/// Rust's float parser would accept (`inf`, `NaN`, `infinity`) usable as
/// names.
///
/// # Example
/// ```
/// use bean::util::num::{NumericText, classify};
///
/// assert_eq!(classify("42"), NumericText::Int(42));
/// assert_eq!(classify("2.5"), NumericText::Double(2.5));
/// assert_eq!(classify("99999999999"), NumericText::IntOutOfRange);
/// assert_eq!(classify("inf"), NumericText::NotNumeric);
/// ```
#[must_use]
pub fn classify(text: &str) -> NumericText {
    if is_integer_text(text) {
        return text.parse::<i32>()
                   .map_or(NumericText::IntOutOfRange, NumericText::Int);
    }

    parse_double_text(text).map_or(NumericText::NotNumeric, NumericText::Double)
}

/// Returns `true` if `text` is an optionally signed, non-empty run of ASCII
/// digits.
#[must_use]
pub fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a floating literal, requiring the text to begin like a number.
///
/// # Returns
/// - `Some(f64)` if the full text is a floating literal.
/// - `None` otherwise.
#[must_use]
pub fn parse_double_text(text: &str) -> Option<f64> {
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);

    match body.as_bytes().first() {
        Some(b) if b.is_ascii_digit() || *b == b'.' => text.parse().ok(),
        _ => None,
    }
}
