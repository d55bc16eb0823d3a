//! Incremental UTF-8 decoding for the ANSI stream interpreter: one char at
//! a time, so control bytes (`ESC`, `\n`, `\r`, `SUB`) can be recognized
//! between characters rather than requiring a pre-decoded buffer.

/// Decodes the UTF-8 character starting at `bytes[0]`, returning the char
/// and its encoded length in bytes. `None` means the sequence is malformed
/// or truncated -- per the wire format, that ends all further decoding.
#[must_use]
pub fn decode_one(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    let len = sequence_len(first)?;
    if bytes.len() < len {
        return None;
    }
    let s = std::str::from_utf8(&bytes[..len]).ok()?;
    let ch = s.chars().next()?;
    Some((ch, len))
}

fn sequence_len(first_byte: u8) -> Option<usize> {
    match first_byte {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_ascii() {
        assert_eq!(decode_one(b"hi"), Some(('h', 1)));
    }

    #[test]
    fn decodes_two_byte_sequence() {
        let bytes = "\u{00e9}x".as_bytes();
        assert_eq!(decode_one(bytes), Some(('\u{00e9}', 2)));
    }

    #[test]
    fn truncated_sequence_is_malformed() {
        let full = "\u{00e9}".as_bytes();
        assert_eq!(decode_one(&full[..1]), None);
    }

    #[test]
    fn invalid_leading_byte_is_malformed() {
        assert_eq!(decode_one(&[0xFF]), None);
    }
}
