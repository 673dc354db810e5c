//! Unicode <-> declared-charset transcoding
//!
//! Conversion is delegated to [`encoding_rs`] and is total over the supported
//! tag set: well-formed input round-trips losslessly, malformed input is
//! substituted rather than rejected. Concretely:
//!
//! - decoding a byte sequence that is invalid under the declared charset
//!   yields U+FFFD replacement characters;
//! - encoding a character with no Shift_JIS mapping yields encoding_rs's
//!   numeric character reference substitution (`&#NNNN;`).
//!
//! [`CharsetTag::Auto`] is UTF-8 passthrough in both directions: encode emits
//! the text's UTF-8 bytes unchanged, decode is lossy UTF-8. A message that
//! declares no charset therefore flows through the layer byte-identical when
//! it is already UTF-8/ASCII.

use encoding_rs::SHIFT_JIS;

use crate::CharsetTag;

/// Encode Unicode text into the byte representation of `charset`.
pub fn encode(text: &str, charset: CharsetTag) -> Vec<u8> {
    match charset {
        CharsetTag::ShiftJis => SHIFT_JIS.encode(text).0.into_owned(),
        CharsetTag::Utf8 | CharsetTag::Auto => text.as_bytes().to_vec(),
    }
}

/// Decode bytes in `charset` back into Unicode text.
pub fn decode(bytes: &[u8], charset: CharsetTag) -> String {
    match charset {
        // No BOM handling: SHIORI payloads carry no byte order marks, and
        // BOM sniffing could silently override the declared charset.
        CharsetTag::ShiftJis => SHIFT_JIS.decode_without_bom_handling(bytes).0.into_owned(),
        CharsetTag::Utf8 | CharsetTag::Auto => String::from_utf8_lossy(bytes).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_jis_round_trip() {
        let text = "GET SHIORI/3.0\r\nCharset: Shift_JIS\r\nID: 能勢電鉄の表現\r\n\r\n";
        let bytes = encode(text, CharsetTag::ShiftJis);
        assert_eq!(decode(&bytes, CharsetTag::ShiftJis), text);
    }

    #[test]
    fn test_utf8_round_trip() {
        let text = "SHIORI/3.0 200 OK\r\nCharset: UTF-8\r\nValue: あ\r\n\r\n";
        let bytes = encode(text, CharsetTag::Utf8);
        assert_eq!(bytes, text.as_bytes());
        assert_eq!(decode(&bytes, CharsetTag::Utf8), text);
    }

    #[test]
    fn test_auto_is_utf8_passthrough() {
        let text = "GET Version SHIORI/3.0\r\n\r\n";
        let bytes = encode(text, CharsetTag::Auto);
        assert_eq!(bytes, text.as_bytes());
        assert_eq!(decode(&bytes, CharsetTag::Auto), text);
    }

    #[test]
    fn test_shift_jis_narrows_known_text() {
        // Known vector: "こ" is 0x82 0xB1 in Shift_JIS.
        assert_eq!(encode("こ", CharsetTag::ShiftJis), vec![0x82, 0xB1]);
        assert_eq!(decode(&[0x82, 0xB1], CharsetTag::ShiftJis), "こ");
    }

    #[test]
    fn test_malformed_shift_jis_substitutes_instead_of_failing() {
        // 0x82 is a lead byte with no valid trail byte following.
        let decoded = decode(&[b'o', b'k', 0x82, 0x20], CharsetTag::ShiftJis);
        assert!(decoded.starts_with("ok"));
        assert!(decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn test_malformed_utf8_substitutes_instead_of_failing() {
        let decoded = decode(b"hi\xFFlo", CharsetTag::Utf8);
        assert_eq!(decoded, "hi\u{FFFD}lo");
    }

    #[test]
    fn test_unmappable_character_substitutes_on_encode() {
        // The globe emoji has no Shift_JIS mapping; encoding_rs substitutes
        // a numeric character reference rather than erroring.
        let bytes = encode("x🌍x", CharsetTag::ShiftJis);
        assert_eq!(bytes, b"x&#127757;x".to_vec());
    }

    #[test]
    fn test_empty_input_is_total() {
        assert!(encode("", CharsetTag::ShiftJis).is_empty());
        assert!(decode(b"", CharsetTag::ShiftJis).is_empty());
        assert!(decode(b"", CharsetTag::Auto).is_empty());
    }
}
