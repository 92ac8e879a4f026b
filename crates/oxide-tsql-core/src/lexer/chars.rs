//! Character classification used by the scanner.
//!
//! All predicates are total: every `char` maps to exactly one class.

/// Broad lexical class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Letters (any alphabetic character) and `_`.
    Letter,
    /// ASCII digits.
    Digit,
    /// Operators and punctuation that end an identifier run.
    Delimiter,
    /// `'`, `"` and `[`.
    Quote,
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// Anything else.
    Other,
}

/// Returns true for characters that may start an identifier.
#[must_use]
pub fn is_letter(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Returns true for ASCII digits.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns true for characters allowed after the first character of an
/// identifier.
#[must_use]
pub fn is_identifier_char(c: char) -> bool {
    is_letter(c) || is_digit(c) || c == '$' || c == '#' || c == '@'
}

/// Returns true for whitespace.
#[must_use]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Returns true for characters that open a quoted literal or identifier.
#[must_use]
pub const fn is_quote(c: char) -> bool {
    matches!(c, '\'' | '"' | '[')
}

/// Returns true for operator and punctuation characters.
#[must_use]
pub const fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | ','
            | ';'
            | '.'
            | ':'
            | '+'
            | '-'
            | '*'
            | '/'
            | '%'
            | '&'
            | '|'
            | '^'
            | '~'
            | '='
            | '<'
            | '>'
            | '!'
            | ']'
    )
}

/// Classifies a character.
#[must_use]
pub fn classify(c: char) -> CharClass {
    if is_letter(c) {
        CharClass::Letter
    } else if is_digit(c) {
        CharClass::Digit
    } else if is_whitespace(c) {
        CharClass::Whitespace
    } else if is_quote(c) {
        CharClass::Quote
    } else if is_delimiter(c) {
        CharClass::Delimiter
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert!(is_letter('a'));
        assert!(is_letter('Z'));
        assert!(is_letter('_'));
        assert!(is_letter('é'));
        assert!(!is_letter('1'));
        assert!(!is_letter('@'));
    }

    #[test]
    fn test_digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_digit('٣'));
    }

    #[test]
    fn test_identifier_chars() {
        assert!(is_identifier_char('a'));
        assert!(is_identifier_char('7'));
        assert!(is_identifier_char('$'));
        assert!(!is_identifier_char('.'));
        assert!(!is_identifier_char(' '));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify('x'), CharClass::Letter);
        assert_eq!(classify('4'), CharClass::Digit);
        assert_eq!(classify('\n'), CharClass::Whitespace);
        assert_eq!(classify('\''), CharClass::Quote);
        assert_eq!(classify('['), CharClass::Quote);
        assert_eq!(classify('('), CharClass::Delimiter);
        assert_eq!(classify('?'), CharClass::Other);
    }
}
