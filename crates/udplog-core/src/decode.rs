//! Datagram payload decoding.
//!
//! Every received datagram is treated as an opaque text blob and decoded
//! against an ordered list of candidate encodings; no syslog grammar is
//! validated.

use encoding_rs::{Encoding, UTF_8_INIT, WINDOWS_1252_INIT};

/// Candidate encodings tried, in order, for every received datagram.
///
/// Strict ASCII is subsumed by UTF-8. windows-1252 maps every byte, so with
/// this chain only empty or whitespace-only payloads are dropped; a custom
/// chain can be stricter. The `_INIT` statics are referenced directly
/// because a static initializer cannot read `UTF_8`/`WINDOWS_1252`.
pub static DEFAULT_ENCODINGS: &[&Encoding] = &[&UTF_8_INIT, &WINDOWS_1252_INIT];

/// Decode a raw datagram as text.
///
/// The first candidate that decodes losslessly wins; the result is
/// whitespace-trimmed. Returns `None` when every candidate mangles the
/// payload or the trimmed text is empty - callers drop the datagram in
/// that case rather than store a placeholder.
#[must_use]
pub fn decode_payload(raw: &[u8], encodings: &[&'static Encoding]) -> Option<String> {
    for encoding in encodings {
        let (text, _, had_errors) = encoding.decode(raw);
        if had_errors {
            continue;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(trimmed.to_owned());
    }
    None
}
