use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::CodecError;

/// Base64-encode `bytes`.
///
/// With `url_safe`, the output uses the Castway URL-safe alphabet:
/// `+` becomes `-`, `/` becomes `_`, and the padding `=` becomes `.`,
/// so the result can be embedded in a URL without percent-escaping.
/// Padding is substituted, never stripped.
pub fn encode(bytes: &[u8], url_safe: bool) -> String {
    let encoded = STANDARD.encode(bytes);
    if url_safe {
        encoded
            .chars()
            .map(|c| match c {
                '+' => '-',
                '/' => '_',
                '=' => '.',
                other => other,
            })
            .collect()
    } else {
        encoded
    }
}

/// Decode base64 produced by [`encode`] with either alphabet.
///
/// URL-safe characters are normalized back to the standard alphabet
/// before decoding, so both encodings of the same bytes decode to the
/// same result.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            '.' => '=',
            other => other,
        })
        .collect();

    STANDARD
        .decode(normalized.as_bytes())
        .map_err(|e| CodecError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_standard_alphabet() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let encoded = encode(&bytes, false);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn round_trips_url_safe_alphabet() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let encoded = encode(&bytes, true);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn url_safe_output_avoids_reserved_characters() {
        // 0xfb 0xef forces '+' and '/' into the standard encoding
        let encoded = encode(&[0xfb, 0xef, 0xbe, 0xfb, 0xef], true);
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn url_safe_substitutes_padding() {
        // One input byte produces two padding characters
        let encoded = encode(&[1], true);
        assert!(encoded.ends_with(".."));

        let standard = encode(&[1], false);
        assert!(standard.ends_with("=="));
    }

    #[test]
    fn both_alphabets_decode_to_same_bytes() {
        let bytes = b"castway payload \xfb\xef\x00";
        let standard = encode(bytes, false);
        let url_safe = encode(bytes, true);
        assert_ne!(standard, url_safe);
        assert_eq!(decode(&standard).unwrap(), decode(&url_safe).unwrap());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(decode("not base64!!!"), Err(CodecError::Decode(_))));
        // Bad length once normalized
        assert!(decode("abcde").is_err());
    }

    #[test]
    fn empty_input_round_trips() {
        assert_eq!(encode(&[], true), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }
}
