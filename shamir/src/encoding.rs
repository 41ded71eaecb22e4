//! Portable textual encoding of big integers.
//!
//! A value is rendered as base-36 digits and the digit string is wrapped in
//! URL-safe base-64 without padding, producing a single line that survives
//! URLs, shell arguments and config files unescaped.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use num_bigint::BigUint;
use num_traits::Num;

use crate::error::{Result, SharingError};

/// Encode a value into its portable form.
pub fn encode_biguint(value: &BigUint) -> String {
    URL_SAFE_NO_PAD.encode(value.to_str_radix(36))
}

/// Decode a portable string back into a value.
///
/// Empty input, invalid base-64, payloads that decode to an empty byte
/// sequence, and payloads that are not base-36 digits all fail with
/// [`SharingError::InvalidEncoding`].
pub fn decode_biguint(encoded: &str) -> Result<BigUint> {
    if encoded.is_empty() {
        return Err(SharingError::InvalidEncoding);
    }

    let payload = URL_SAFE_NO_PAD
        .decode(encoded)
        .map_err(|_| SharingError::InvalidEncoding)?;
    if payload.is_empty() {
        return Err(SharingError::InvalidEncoding);
    }

    let digits = std::str::from_utf8(&payload).map_err(|_| SharingError::InvalidEncoding)?;
    BigUint::from_str_radix(digits, 36).map_err(|_| SharingError::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_round_trip() {
        for value in [0u64, 1, 35, 36, 12_345, u64::MAX] {
            let value = BigUint::from(value);
            let encoded = encode_biguint(&value);
            assert_eq!(decode_biguint(&encoded).unwrap(), value);
        }
    }

    #[test]
    fn test_round_trip_wide_value() {
        let value = (BigUint::from(1u32) << 4096) - 1u32;
        assert_eq!(decode_biguint(&encode_biguint(&value)).unwrap(), value);
    }

    #[test]
    fn test_output_is_single_line_without_padding() {
        let encoded = encode_biguint(&((BigUint::from(1u32) << 1024) - 1u32));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('='));
    }

    #[test]
    fn test_known_vector() {
        // 12345 in base 36 is "9ix"; "9ix" in URL-safe base64 is "OWl4".
        let value = BigUint::from(12_345u32);
        assert_eq!(encode_biguint(&value), "OWl4");
        assert_eq!(decode_biguint("OWl4").unwrap(), value);
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(matches!(
            decode_biguint(""),
            Err(SharingError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_rejects_invalid_base64() {
        assert!(matches!(
            decode_biguint("!!!"),
            Err(SharingError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_rejects_non_base36_payload() {
        // "_-" is valid URL-safe base64 input characters but decodes to
        // bytes that are not base-36 digits.
        let garbage = URL_SAFE_NO_PAD.encode([0xFFu8, 0x00]);
        assert!(matches!(
            decode_biguint(&garbage),
            Err(SharingError::InvalidEncoding)
        ));
    }

    #[quickcheck]
    fn prop_round_trip(bytes: Vec<u8>) -> bool {
        let value = BigUint::from_bytes_be(&bytes);
        matches!(decode_biguint(&encode_biguint(&value)), Ok(decoded) if decoded == value)
    }

    #[test]
    fn test_zero_round_trips() {
        let encoded = encode_biguint(&BigUint::zero());
        assert_eq!(decode_biguint(&encoded).unwrap(), BigUint::zero());
    }
}
