// (c) Cartesi and individual authors (see AUTHORS)
// SPDX-License-Identifier: Apache-2.0 (see LICENSE)

/// Strip the optional Ethereum `0x` prefix from a hex binary string
fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

/// Convert a payload in hex binary format (with or without `0x`) to text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. A string that is
/// not hex at all is returned unchanged, so this never fails.
pub fn decode_payload(payload: &str) -> String {
    match hex::decode(strip_hex_prefix(payload)) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::debug!(payload, %e, "payload is not hex, keeping it as is");
            payload.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_without_prefix() {
        assert_eq!(decode_payload("68656c6c6f"), "hello");
    }

    #[test]
    fn test_decode_with_prefix() {
        assert_eq!(decode_payload("0x68656c6c6f"), "hello");
    }

    #[test]
    fn test_decode_with_uppercase() {
        assert_eq!(decode_payload("0X68656C6C6F"), "hello");
    }

    #[test]
    fn test_decode_with_empty() {
        assert_eq!(decode_payload(""), "");
        assert_eq!(decode_payload("0x"), "");
    }

    #[test]
    fn test_decode_multibyte_utf8() {
        // "olá"
        assert_eq!(decode_payload("0x6f6cc3a1"), "olá");
    }

    #[test]
    fn test_decode_invalid_utf8_is_lossy() {
        assert_eq!(decode_payload("0x61ff62"), "a\u{FFFD}b");
        assert_eq!(decode_payload("c3"), "\u{FFFD}");
    }

    #[test]
    fn test_decode_with_odd_length() {
        assert_eq!(decode_payload("0x123"), "0x123");
    }

    #[test]
    fn test_decode_with_invalid_digits() {
        assert_eq!(decode_payload("zz"), "zz");
    }

    #[test]
    fn test_decode_every_byte() {
        let payload: String =
            (0..=255u8).map(|b| format!("{:02x}", b)).collect();
        let decoded = decode_payload(&payload);
        assert!(decoded.starts_with('\0'));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
