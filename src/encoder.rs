//! Percent-encoding and decoding for request URI fragments.
//!
//! The encoder keeps every character on a fixed allow-list as-is and writes
//! everything else as `%` followed by the lowercase hex code point, zero-padded
//! to two digits. Callers narrow the allow-list further with an exclusion set,
//! one per URI region (see [`crate::constants`]).
//!
//! The decoder is the lenient inverse: `%` plus two hex digits becomes the
//! character with that code point and `+` becomes a space. Anything else
//! passes through untouched. It never fails.

/// Returns true if the character may appear unescaped in encoder output.
///
/// The allow-list covers ASCII alphanumerics plus
/// `! $ % & ( ) * + , - . / : ; = ? @ \ [ ] ^ _ { | } ~`.
///
/// # Examples
///
/// ```
/// use request_uri::is_allowed_char;
///
/// assert!(is_allowed_char('a'));
/// assert!(is_allowed_char('/'));
/// assert!(!is_allowed_char(' '));
/// assert!(!is_allowed_char('#'));
/// ```
#[must_use]
pub const fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '$'
                | '%'
                | '&'
                | '('
                | ')'
                | '*'
                | '+'
                | ','
                | '-'
                | '.'
                | '/'
                | ':'
                | ';'
                | '='
                | '?'
                | '@'
                | '\\'
                | '['
                | ']'
                | '^'
                | '_'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

/// Percent-encodes `input` using only the general allow-list.
///
/// Equivalent to [`encode_with_exclusions`] with an empty exclusion set.
/// The encoder does not detect pre-encoded text: `%` is on the allow-list,
/// so encoding is not idempotent under decoding (`encode("%20")` stays
/// `"%20"`, which then decodes to a space).
///
/// # Examples
///
/// ```
/// use request_uri::encode;
///
/// assert_eq!(encode("over there"), "over%20there");
/// assert_eq!(encode("/a/b"), "/a/b");
/// ```
#[must_use]
pub fn encode(input: &str) -> String {
    encode_with_exclusions(input, "")
}

/// Percent-encodes `input`, additionally escaping every character in
/// `excluded`.
///
/// A character is escaped when it falls outside the allow-list or appears
/// in `excluded`; non-ASCII characters are never on the allow-list. Escapes
/// use the character's code point, not its UTF-8 bytes, so code points above
/// `0xff` produce escapes longer than one triple.
///
/// # Examples
///
/// ```
/// use request_uri::encode_with_exclusions;
///
/// assert_eq!(encode_with_exclusions("a?b", "?"), "a%3fb");
/// assert_eq!(encode_with_exclusions("a?b", ""), "a?b");
/// ```
#[must_use]
pub fn encode_with_exclusions(input: &str, excluded: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for c in input.chars() {
        if must_escape(c, excluded) {
            let code = u32::from(c);
            encoded.push_str(&format!("%{code:02x}"));
        } else {
            encoded.push(c);
        }
    }
    encoded
}

/// Decodes percent escapes and form-encoded spaces in `input`.
///
/// `%` followed by two ASCII hex digits becomes the character with that code
/// point and `+` becomes a space. Malformed escapes pass through unchanged;
/// the decoder never fails.
///
/// # Examples
///
/// ```
/// use request_uri::decode_fragment;
///
/// assert_eq!(decode_fragment("over%20there"), "over there");
/// assert_eq!(decode_fragment("a+b"), "a b");
/// assert_eq!(decode_fragment("50%"), "50%");
/// ```
#[must_use]
pub fn decode_fragment(input: &str) -> String {
    let mut decoded = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        match c {
            '+' => decoded.push(' '),
            '%' => {
                let mut lookahead = chars.clone();
                let escaped = match (lookahead.next(), lookahead.next()) {
                    (Some(hi), Some(lo)) => escape_value(hi, lo),
                    _ => None,
                };
                if let Some(escaped) = escaped {
                    decoded.push(escaped);
                    chars = lookahead;
                } else {
                    decoded.push('%');
                }
            }
            _ => decoded.push(c),
        }
    }
    decoded
}

/// Character count of `encode_with_exclusions(input, excluded)` without
/// building the string. Encoder output is pure ASCII, so the count equals
/// the byte length.
pub(crate) fn encoded_len(input: &str, excluded: &str) -> usize {
    input
        .chars()
        .map(|c| {
            if must_escape(c, excluded) {
                escaped_len(c)
            } else {
                1
            }
        })
        .sum()
}

fn must_escape(c: char, excluded: &str) -> bool {
    !is_allowed_char(c) || excluded.contains(c)
}

/// Length of the `%`-escape for `c`: the percent sign plus at least two
/// lowercase hex digits.
fn escaped_len(c: char) -> usize {
    let code = u32::from(c);
    let digits = if code < 0x100 {
        2
    } else if code < 0x1000 {
        3
    } else if code < 0x1_0000 {
        4
    } else if code < 0x10_0000 {
        5
    } else {
        6
    };
    1 + digits
}

/// Value of a two-hex-digit escape, if both digits are valid.
fn escape_value(hi: char, lo: char) -> Option<char> {
    let hi = hi.to_digit(16)?;
    let lo = lo.to_digit(16)?;
    char::from_u32((hi << 4) | lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_space() {
        assert_eq!(encode(" "), "%20");
    }

    #[test]
    fn encode_keeps_allowed_chars() {
        let input = "/path:to@file!(1)~";
        assert_eq!(encode(input), input);
    }

    #[test]
    fn encode_escapes_outside_allow_list() {
        assert_eq!(encode("a\"b"), "a%22b");
        assert_eq!(encode("a#b"), "a%23b");
        assert_eq!(encode("a<b>"), "a%3cb%3e");
    }

    #[test]
    fn encode_pads_low_code_points() {
        assert_eq!(encode("\n"), "%0a");
        assert_eq!(encode("\t"), "%09");
    }

    #[test]
    fn encode_non_ascii_uses_code_point() {
        assert_eq!(encode("é"), "%e9");
        assert_eq!(encode("€"), "%20ac");
        assert_eq!(encode("\u{1f600}"), "%1f600");
    }

    #[test]
    fn encode_with_exclusions_escapes_extra_chars() {
        assert_eq!(encode_with_exclusions("a?b", "?"), "a%3fb");
        assert_eq!(encode_with_exclusions("k=v", " &;="), "k%3dv");
    }

    #[test]
    fn encode_is_not_idempotent() {
        // Pre-encoded text is not detected.
        assert_eq!(encode("%20"), "%20");
        assert_eq!(encode_with_exclusions("%20", "%"), "%2520");
    }

    #[test]
    fn decode_percent_escape() {
        assert_eq!(decode_fragment("%20"), " ");
        assert_eq!(decode_fragment("over%20there"), "over there");
    }

    #[test]
    fn decode_accepts_uppercase_hex() {
        assert_eq!(decode_fragment("%3D"), "=");
        assert_eq!(decode_fragment("%3d"), "=");
    }

    #[test]
    fn decode_plus_as_space() {
        assert_eq!(decode_fragment("a+b+c"), "a b c");
    }

    #[test]
    fn decode_latin1_code_point() {
        assert_eq!(decode_fragment("%e9"), "é");
        assert_eq!(decode_fragment("%ff"), "\u{ff}");
    }

    #[test]
    fn decode_malformed_escape_passes_through() {
        assert_eq!(decode_fragment("%zz"), "%zz");
        assert_eq!(decode_fragment("%4"), "%4");
        assert_eq!(decode_fragment("%"), "%");
        assert_eq!(decode_fragment("100%+done"), "100% done");
    }

    #[test]
    fn decode_does_not_reassemble_long_escapes() {
        // Only two hex digits are consumed per escape.
        assert_eq!(decode_fragment("%20ac"), " ac");
    }

    #[test]
    fn decode_inverts_encode_without_percent_or_plus() {
        let input = "over there/§ draft #2";
        assert_eq!(decode_fragment(&encode(input)), input);
    }

    #[test]
    fn encoded_len_matches_encode() {
        let cases = ["", "/over/there", "a b#c?d", "é€\u{1f600}", "k=v&x;y"];
        for input in cases {
            assert_eq!(
                encoded_len(input, " &;="),
                encode_with_exclusions(input, " &;=").len(),
                "length mismatch for {input:?}"
            );
        }
    }

    #[test]
    fn allow_list_membership() {
        for c in "abcXYZ019!$%&()*+,-./:;=?@\\[]^_{|}~".chars() {
            assert!(is_allowed_char(c), "{c:?} should be allowed");
        }
        for c in " \"#'<>`\u{e9}".chars() {
            assert!(!is_allowed_char(c), "{c:?} should not be allowed");
        }
    }
}
