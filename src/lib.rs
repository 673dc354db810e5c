//! # ShioriCharset - Charset Detection and Transcoding Layer for SHIORI Plugins
//!
//! A middleware layer that sits between a Unicode caller and a SHIORI plugin
//! speaking a legacy Japanese charset. The layer reads the `Charset:` header
//! declared inside each protocol message, transcodes outbound requests from
//! Unicode into the declared charset before delegating to the plugin, and
//! transcodes the plugin's responses back into Unicode.
//!
//! ## Features
//!
//! - **In-band charset detection** over decoded text and raw byte buffers
//! - **Total transcoding** between Unicode and Shift_JIS / UTF-8: malformed
//!   input substitutes, it never errors
//! - **Transport-agnostic proxy** generic over byte-buffer and binary-string
//!   plugin boundaries
//! - **Transparent delegation** of `load`/`unload` and of plugin failures
//!
//! ## Quick Start
//!
//! ```rust
//! use shiori_charset::{detection, CharsetTag};
//!
//! let request = "GET SHIORI/3.0\r\nCharset: Shift_JIS\r\nID: OnBoot\r\n\r\n";
//! assert_eq!(detection::from_text(request), CharsetTag::ShiftJis);
//!
//! let bytes = shiori_charset::transcode::encode(request, CharsetTag::ShiftJis);
//! assert_eq!(detection::from_bytes(&bytes), CharsetTag::ShiftJis);
//! ```

#![deny(missing_docs)]

pub mod detection;
pub mod layer;
pub mod message;
pub mod transcode;

pub use layer::{CharsetLayer, Shiori};
pub use message::Message;

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, ShioriError>;

/// Failures surfaced by a SHIORI plugin implementation.
///
/// The charset layer never constructs these itself; whatever the wrapped
/// plugin returns is forwarded to the caller unchanged. Integer statuses
/// (including failure statuses) are return values, not errors.
#[derive(Debug, thiserror::Error)]
pub enum ShioriError {
    /// The plugin has not been loaded, or was already unloaded.
    #[error("plugin is not loaded")]
    NotLoaded,

    /// The plugin failed while servicing a request.
    #[error("plugin request failed: {0}")]
    Request(String),

    /// An I/O failure in the plugin's own transport (pipe, socket, FFI).
    #[error("plugin transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// A charset declared (or not) by a protocol message.
///
/// `Auto` is the absence of a recognizable declaration. It is a normal value,
/// not an error: the protocol permits charset omission, in which case the
/// layer falls back to UTF-8 passthrough (see [`transcode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharsetTag {
    /// Shift_JIS, the legacy Japanese single/double-byte encoding
    /// (also declared as `CP932`).
    ShiftJis,
    /// UTF-8.
    Utf8,
    /// No declaration found, or the declared name was not recognized.
    #[default]
    Auto,
}

impl CharsetTag {
    /// Resolve a declared charset name to a tag.
    ///
    /// Names are matched case-insensitively against a fixed alias table;
    /// this table is the only place new charset support is added. Unknown
    /// or malformed names resolve to [`CharsetTag::Auto`], never an error.
    pub fn resolve(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "shift_jis" | "cp932" => CharsetTag::ShiftJis,
            "utf-8" => CharsetTag::Utf8,
            _ => CharsetTag::Auto,
        }
    }

    /// Get the canonical name of this charset
    pub fn name(self) -> &'static str {
        match self {
            CharsetTag::ShiftJis => "Shift_JIS",
            CharsetTag::Utf8 => "UTF-8",
            CharsetTag::Auto => "AUTO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shift_jis_aliases() {
        for name in ["shift_jis", "Shift_JIS", "SHIFT_JIS", "cp932", "CP932", "Cp932"] {
            assert_eq!(CharsetTag::resolve(name), CharsetTag::ShiftJis, "{name}");
        }
    }

    #[test]
    fn test_resolve_utf8_aliases() {
        for name in ["utf-8", "UTF-8", "Utf-8"] {
            assert_eq!(CharsetTag::resolve(name), CharsetTag::Utf8, "{name}");
        }
    }

    #[test]
    fn test_resolve_unknown_names_fall_back_to_auto() {
        for name in [
            "EBCDIC",
            "euc-jp",
            "utf8",       // no hyphen: not a recognized token
            "shift-jis",  // hyphen variant: not a recognized token
            "sjis",
            "",
            " shift_jis", // leading space: values are not trimmed
            "shift_jis ", // trailing space
            "Charset",
        ] {
            assert_eq!(CharsetTag::resolve(name), CharsetTag::Auto, "{name:?}");
        }
    }

    #[test]
    fn test_resolve_never_panics_on_non_ascii() {
        assert_eq!(CharsetTag::resolve("能勢電鉄"), CharsetTag::Auto);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(CharsetTag::ShiftJis.name(), "Shift_JIS");
        assert_eq!(CharsetTag::Utf8.name(), "UTF-8");
        assert_eq!(CharsetTag::Auto.name(), "AUTO");
    }

    #[test]
    fn test_default_tag_is_auto() {
        assert_eq!(CharsetTag::default(), CharsetTag::Auto);
    }
}
