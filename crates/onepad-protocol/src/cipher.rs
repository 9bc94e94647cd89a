//! Modular substitution cipher over the 27-symbol alphabet.
//!
//! One key symbol per text symbol. Encrypting adds ranks mod 27, decrypting
//! subtracts, so the two directions invert each other under the same key.

use crate::alphabet::{self, RADIX};
use crate::ProtocolError;

/// Which way to shift the text under the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Apply the pad to `text`.
///
/// The key must cover the text and both must be alphabet-only. Output
/// length equals text length.
pub fn transform(text: &[u8], key: &[u8], direction: Direction) -> Result<Vec<u8>, ProtocolError> {
    if key.len() < text.len() {
        return Err(ProtocolError::KeyTooShort {
            text: text.len(),
            key: key.len(),
        });
    }

    let mut out = Vec::with_capacity(text.len());
    for (pos, (&t, &k)) in text.iter().zip(key).enumerate() {
        let t = alphabet::rank(t).ok_or(ProtocolError::InvalidSymbol {
            symbol: t as char,
            byte: t,
            pos,
        })?;
        let k = alphabet::rank(k).ok_or(ProtocolError::InvalidSymbol {
            symbol: k as char,
            byte: k,
            pos,
        })?;
        let r = match direction {
            Direction::Encrypt => (t + k) % RADIX,
            Direction::Decrypt => (t + RADIX - k) % RADIX,
        };
        out.push(alphabet::symbol(r));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_vector() {
        let cipher = transform(b"HELLO", b"WORLD", Direction::Encrypt).unwrap();
        assert_eq!(cipher, b"CSBWR");

        let plain = transform(b"CSBWR", b"WORLD", Direction::Decrypt).unwrap();
        assert_eq!(plain, b"HELLO");
    }

    #[test]
    fn test_space_wraps_through_rank_26() {
        // space + A = space, space + B = A
        assert_eq!(transform(b" ", b"A", Direction::Encrypt).unwrap(), b" ");
        assert_eq!(transform(b" ", b"B", Direction::Encrypt).unwrap(), b"A");
        assert_eq!(transform(b"A", b"B", Direction::Decrypt).unwrap(), b" ");
    }

    #[test]
    fn test_key_may_exceed_text() {
        let out = transform(b"AB", b"AAAAAAA", Direction::Encrypt).unwrap();
        assert_eq!(out, b"AB");
    }

    #[test]
    fn test_key_too_short_rejected() {
        let err = transform(b"ABCDEFGHIJ", b"ABCDE", Direction::Encrypt).unwrap_err();
        match err {
            ProtocolError::KeyTooShort { text, key } => {
                assert_eq!(text, 10);
                assert_eq!(key, 5);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_alphabet_byte_rejected() {
        assert!(transform(b"he", b"AB", Direction::Encrypt).is_err());
        assert!(transform(b"HE", b"a!", Direction::Encrypt).is_err());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(transform(b"", b"", Direction::Encrypt).unwrap(), b"");
        assert_eq!(transform(b"", b"KEY", Direction::Decrypt).unwrap(), b"");
    }

    fn alphabet_string(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(0u8..RADIX, 0..max_len)
            .prop_map(|ranks| ranks.into_iter().map(alphabet::symbol).collect())
    }

    proptest! {
        #[test]
        fn prop_round_trip(text in alphabet_string(200), pad in alphabet_string(64)) {
            // Extend the pad so it always covers the text.
            let mut key = pad;
            while key.len() < text.len() {
                key.push(b'Q');
            }

            let cipher = transform(&text, &key, Direction::Encrypt).unwrap();
            prop_assert_eq!(cipher.len(), text.len());
            prop_assert!(cipher.iter().all(|&b| alphabet::rank(b).is_some()));

            let plain = transform(&cipher, &key, Direction::Decrypt).unwrap();
            prop_assert_eq!(plain, text);
        }
    }
}
