//! The 27-symbol alphabet: uppercase A-Z plus space, ranks 0-26.

use crate::ProtocolError;

/// Number of symbols in the alphabet.
pub const RADIX: u8 = 27;

/// Rank assigned to the space symbol.
pub const SPACE_RANK: u8 = 26;

/// The alphabet in rank order.
pub const SYMBOLS: &[u8; RADIX as usize] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ ";

/// Map a symbol to its rank. `None` for bytes outside the alphabet.
pub fn rank(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b' ' => Some(SPACE_RANK),
        _ => None,
    }
}

/// Map a rank back to its symbol. Ranks only arise from arithmetic mod 27,
/// so values >= RADIX are unreachable.
pub fn symbol(rank: u8) -> u8 {
    SYMBOLS[(rank % RADIX) as usize]
}

/// Check that every byte of `data` is in the alphabet.
pub fn validate(data: &[u8]) -> Result<(), ProtocolError> {
    match data.iter().position(|b| rank(*b).is_none()) {
        Some(pos) => Err(ProtocolError::InvalidSymbol {
            symbol: data[pos] as char,
            byte: data[pos],
            pos,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_letters_and_space() {
        assert_eq!(rank(b'A'), Some(0));
        assert_eq!(rank(b'Z'), Some(25));
        assert_eq!(rank(b' '), Some(26));
        assert_eq!(rank(b'a'), None);
        assert_eq!(rank(b'\n'), None);
        assert_eq!(rank(0), None);
    }

    #[test]
    fn test_symbol_inverts_rank() {
        for &b in SYMBOLS {
            assert_eq!(symbol(rank(b).unwrap()), b);
        }
    }

    #[test]
    fn test_validate_reports_first_offender() {
        assert!(validate(b"HELLO WORLD").is_ok());
        assert!(validate(b"").is_ok());

        let err = validate(b"HEL!O").unwrap_err();
        match err {
            ProtocolError::InvalidSymbol { symbol, byte, pos } => {
                assert_eq!(symbol, '!');
                assert_eq!(byte, b'!');
                assert_eq!(pos, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
