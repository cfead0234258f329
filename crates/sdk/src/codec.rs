//! Condition codec
//!
//! Reversible encode/decode of a boolean condition into an opaque token.
//! This is an obfuscating encoding, not encryption: the marker prefix plus a
//! base64 transform of the boolean's textual form. It stands in for a real
//! homomorphic scheme and is preserved as-is for wire compatibility.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Marker prefix identifying codec-produced tokens
const MARKER: &str = "FHE-";

/// Encode a boolean condition into an opaque token
pub fn encode_condition(value: bool) -> String {
    let text = if value { "true" } else { "false" };
    format!("{}{}", MARKER, BASE64.encode(text))
}

/// Decode a codec token back into its boolean condition
///
/// Tokens without the marker prefix are treated as already-literal
/// `"true"`/`"false"` strings, for records written before the codec existed.
/// Any malformed input decodes to `false`; no error is signaled. This
/// permissive default is preserved from the deployed format and needs
/// product sign-off before it can be tightened.
pub fn decode_condition(token: &str) -> bool {
    match token.strip_prefix(MARKER) {
        Some(body) => BASE64
            .decode(body)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map(|text| text == "true")
            .unwrap_or(false),
        None => token == "true",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        assert!(decode_condition(&encode_condition(true)));
        assert!(!decode_condition(&encode_condition(false)));
    }

    #[test]
    fn test_token_format_matches_deployed_records() {
        // btoa("true") / btoa("false") as written by the deployed web client
        assert_eq!(encode_condition(true), "FHE-dHJ1ZQ==");
        assert_eq!(encode_condition(false), "FHE-ZmFsc2U=");
    }

    #[test]
    fn test_bare_literal_fallback() {
        assert!(decode_condition("true"));
        assert!(!decode_condition("false"));
    }

    #[test]
    fn test_malformed_tokens_decode_to_false() {
        assert!(!decode_condition(""));
        assert!(!decode_condition("FHE-"));
        assert!(!decode_condition("FHE-not!base64"));
        assert!(!decode_condition("FHE-AAAA"));
        assert!(!decode_condition("TRUE"));
        assert!(!decode_condition("garbage"));
    }
}
