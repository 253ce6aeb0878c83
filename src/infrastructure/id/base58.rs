//! Base58 codec
//!
//! Bitcoin alphabet, no padding. Leading zero bytes are rendered as leading
//! `1` characters so the encoding stays injective over byte length.

use crate::domain::id::IdError;

/// The 58 characters in digit order. Excludes `0`, `O`, `I` and `l`.
pub const ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode bytes as base58
pub fn encode(bytes: &[u8]) -> String {
    bs58::encode(bytes)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_string()
}

/// Decode base58 text back into the exact original bytes
pub fn decode(text: &str) -> Result<Vec<u8>, IdError> {
    if let Some((index, character)) = text.chars().enumerate().find(|(_, c)| !is_alphabet_char(*c))
    {
        return Err(IdError::InvalidCharacter { character, index });
    }

    bs58::decode(text)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| IdError::malformed(e.to_string()))
}

/// Longest encoding of `byte_length` bytes (log(256) / log(58) < 1.38)
pub fn max_encoded_length(byte_length: usize) -> usize {
    byte_length * 138 / 100 + 1
}

/// Whether every character of `text` belongs to the alphabet
pub fn is_base58(text: &str) -> bool {
    text.chars().all(is_alphabet_char)
}

fn is_alphabet_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.as_bytes().contains(&(c as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.len(), 58);
        for excluded in ['0', 'O', 'I', 'l'] {
            assert!(!ALPHABET.contains(excluded));
        }
    }

    #[test]
    fn test_max_encoded_length_bounds_output() {
        for length in [0, 1, 16, 64, 256] {
            assert!(encode(&vec![0xff; length]).len() <= max_encoded_length(length));
            assert!(encode(&vec![0x00; length]).len() <= max_encoded_length(length));
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_leading_zero_bytes() {
        assert_eq!(encode(&[0x00]), "1");
        assert_eq!(encode(&[0x00, 0x01]), "12");
        assert_eq!(encode(&[0x00, 0x00, 0xff]), "115Q");
        assert_eq!(decode("12").unwrap(), vec![0x00, 0x01]);
        assert_eq!(decode("111").unwrap(), vec![0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(decode("StV1DL6CwTryKyV").unwrap(), b"hello world".to_vec());
    }

    #[test]
    fn test_round_trip() {
        let samples: [&[u8]; 6] = [
            &[],
            &[0],
            &[0, 0, 1, 2, 3],
            &[255; 16],
            &[1, 0, 0, 0],
            &[0x7f, 0x80, 0x00, 0xde, 0xad, 0xbe, 0xef],
        ];

        for sample in samples {
            assert_eq!(decode(&encode(sample)).unwrap(), sample.to_vec());
        }
    }

    #[test]
    fn test_output_stays_in_alphabet() {
        for seed in 0u8..=255 {
            let bytes: Vec<u8> = (0..12).map(|i| seed.wrapping_mul(31).wrapping_add(i * 7)).collect();
            let encoded = encode(&bytes);
            assert!(is_base58(&encoded), "{} left the alphabet", encoded);
        }
    }

    #[test]
    fn test_rejects_excluded_characters() {
        assert_eq!(
            decode("0OIl"),
            Err(IdError::InvalidCharacter {
                character: '0',
                index: 0
            })
        );
        assert_eq!(
            decode("abcO"),
            Err(IdError::InvalidCharacter {
                character: 'O',
                index: 3
            })
        );
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert_eq!(
            decode("2é"),
            Err(IdError::InvalidCharacter {
                character: 'é',
                index: 1
            })
        );
        assert!(!is_base58("ws_abc"));
    }
}
