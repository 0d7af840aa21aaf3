//! Characters that shape the `key:value` display form of a label.
//!
//! Both the encoder and the decoder in [`crate::codec`] read these, so the
//! token grammar is defined in exactly one place.

/// Separator between the key and the value of a [`crate::DisplayToken`].
///
/// Only the first unescaped occurrence is significant: everything after it
/// belongs to the value.
pub const LABEL_SEPARATOR: char = ':';

/// Escape prefix used inside the key segment of a token.
///
/// A key containing [`LABEL_SEPARATOR`] or `ESCAPE_CHAR` itself is written with
/// this prefix in front of the offending character.
pub const ESCAPE_CHAR: char = '\\';
