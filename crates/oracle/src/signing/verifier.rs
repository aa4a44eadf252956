use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::Verifier;

use super::keys::PublicKey;
use crate::error::OracleError;

/// Decodes a signature from its standard padded base64 transport form.
///
/// Line breaks are skipped so MIME-wrapped input still decodes.
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, OracleError> {
    let unwrapped: String = encoded.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    Ok(STANDARD.decode(unwrapped)?)
}

/// Checks `signature` over `message` under `public_key`.
///
/// A signature of the wrong length, or one that does not verify, is simply
/// `false`.
pub fn verify(public_key: &PublicKey, message: &[u8], signature: &[u8]) -> bool {
    let Ok(signature) = ed25519_dalek::Signature::from_slice(signature) else {
        return false;
    };
    public_key.verifying_key().verify(message, &signature).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::{PrivateKey, sign};
    use ed25519_dalek::SigningKey;

    fn test_key() -> PrivateKey {
        PrivateKey::from_signing_key(SigningKey::from_bytes(&[9u8; 32]))
    }

    #[test]
    fn valid_signature_verifies() {
        let key = test_key();
        let signature = sign(&key, b"verify me");
        assert!(verify(&key.public_key(), b"verify me", signature.as_bytes()));
    }

    #[test]
    fn altered_message_fails() {
        let key = test_key();
        let signature = sign(&key, b"hello");
        assert!(!verify(&key.public_key(), b"hellp", signature.as_bytes()));
    }

    #[test]
    fn flipped_bit_fails() {
        let key = test_key();
        let mut signature = *sign(&key, b"hello").as_bytes();
        signature[10] ^= 0x01;
        assert!(!verify(&key.public_key(), b"hello", &signature));
    }

    #[test]
    fn wrong_length_is_false_not_error() {
        let key = test_key();
        assert!(!verify(&key.public_key(), b"hello", &[0u8; 63]));
        assert!(!verify(&key.public_key(), b"hello", &[]));
    }

    #[test]
    fn decodes_padded_base64() {
        assert_eq!(decode_signature("aGk=").unwrap(), b"hi");
    }

    #[test]
    fn decodes_line_wrapped_base64() {
        assert_eq!(decode_signature("aGVs\nbG8=").unwrap(), b"hello");
        assert_eq!(decode_signature("aGVs\r\nbG8=\r\n").unwrap(), b"hello");
    }

    #[test]
    fn other_whitespace_is_still_invalid() {
        let err = decode_signature("aGVs bG8=").unwrap_err();
        assert!(matches!(err, OracleError::Encoding(_)));
    }

    #[test]
    fn rejects_invalid_base64() {
        let err = decode_signature("%%%").unwrap_err();
        assert!(matches!(err, OracleError::Encoding(_)));
    }
}
