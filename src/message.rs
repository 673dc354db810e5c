//! Payload representations at the plugin boundary
//!
//! A SHIORI plugin speaks one of two wire conventions, fixed per deployment:
//!
//! - **raw bytes** ([`Vec<u8>`]) in the declared charset, or
//! - **binary strings** ([`String`]) carrying one `char` per byte, the
//!   decoded-text transport convention where a Shift_JIS byte 0x82 travels
//!   as U+0082.
//!
//! [`Message`] abstracts over both so the charset layer is written once and
//! parameterized by the child plugin's payload type, instead of duplicating
//! the proxy per transport.

use crate::{CharsetTag, detection, transcode};

/// Capability a plugin payload must provide to the charset layer:
/// in-band charset detection plus conversion to and from Unicode text.
pub trait Message: Send {
    /// Detect the charset this payload declares for itself.
    fn charset(&self) -> CharsetTag;

    /// Build a payload by encoding Unicode `text` into `charset`.
    fn from_unicode(text: &str, charset: CharsetTag) -> Self;

    /// Decode this payload from `charset` back into Unicode text.
    fn into_unicode(self, charset: CharsetTag) -> String;
}

/// Raw-byte transport: the payload is the encoded message itself.
impl Message for Vec<u8> {
    fn charset(&self) -> CharsetTag {
        detection::from_bytes(self)
    }

    fn from_unicode(text: &str, charset: CharsetTag) -> Self {
        transcode::encode(text, charset)
    }

    fn into_unicode(self, charset: CharsetTag) -> String {
        transcode::decode(&self, charset)
    }
}

/// Decoded-text transport: the payload is a binary string, one `char` per
/// encoded byte. Header lines are ASCII and thus read the same as in a real
/// Unicode string, so text-mode detection applies directly.
impl Message for String {
    fn charset(&self) -> CharsetTag {
        detection::from_text(self)
    }

    fn from_unicode(text: &str, charset: CharsetTag) -> Self {
        transcode::encode(text, charset)
            .into_iter()
            .map(char::from)
            .collect()
    }

    fn into_unicode(self, charset: CharsetTag) -> String {
        // Chars above U+00FF cannot have come from a byte-widening child;
        // substitute them the same way the transcoder substitutes.
        let bytes: Vec<u8> = self
            .chars()
            .map(|c| {
                let code = u32::from(c);
                if code <= 0xFF { code as u8 } else { b'?' }
            })
            .collect();
        transcode::decode(&bytes, charset)
    }
}
