use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::{SigningKey, VerifyingKey};

use crate::error::KeyError;

pub const PRIVATE_KEY_LENGTH: usize = ed25519_dalek::KEYPAIR_LENGTH;
pub const PUBLIC_KEY_LENGTH: usize = ed25519_dalek::PUBLIC_KEY_LENGTH;
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// An Ed25519 private key: 32-byte seed followed by the 32-byte public half.
///
/// Lives for one request. The inner key is zeroized on drop and `Debug`
/// never prints key material.
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    pub(crate) fn from_signing_key(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Seed-then-public-key form, 64 bytes.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LENGTH] {
        self.signing_key.to_keypair_bytes()
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            verifying_key: self.signing_key.verifying_key(),
        }
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    verifying_key: VerifyingKey,
}

impl PublicKey {
    /// Accepts a raw 32-byte compressed Edwards point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        let bytes: &[u8; PUBLIC_KEY_LENGTH] = bytes.try_into().map_err(|_| {
            KeyError::KeyFormat(format!(
                "public key must be {PUBLIC_KEY_LENGTH} bytes, got {}",
                bytes.len()
            ))
        })?;
        let verifying_key = VerifyingKey::from_bytes(bytes)
            .map_err(|e| KeyError::KeyFormat(format!("invalid public key: {e}")))?;
        Ok(Self { verifying_key })
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.verifying_key.to_bytes()
    }

    pub(crate) fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&STANDARD.encode(self.verifying_key.as_bytes()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_LENGTH]);

impl Signature {
    pub(crate) fn from_dalek(signature: ed25519_dalek::Signature) -> Self {
        Self(signature.to_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Standard padded base64, the transport form.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> PrivateKey {
        PrivateKey::from_signing_key(SigningKey::from_bytes(&[7u8; 32]))
    }

    #[test]
    fn private_key_is_seed_then_public_half() {
        let key = test_key();
        let bytes = key.to_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..32], &[7u8; 32]);
        assert_eq!(&bytes[32..], &key.public_key().to_bytes());
    }

    #[test]
    fn debug_does_not_print_seed() {
        let key = test_key();
        let rendered = format!("{key:?}");
        assert!(rendered.starts_with("PrivateKey"));
        assert!(!rendered.contains(&STANDARD.encode([7u8; 32])));
    }

    #[test]
    fn public_key_from_bytes_round_trips() {
        let public = test_key().public_key();
        let parsed = PublicKey::from_bytes(&public.to_bytes()).unwrap();
        assert_eq!(parsed, public);
    }

    #[test]
    fn public_key_rejects_wrong_length() {
        let err = PublicKey::from_bytes(&[1u8; 31]).unwrap_err();
        assert!(matches!(err, KeyError::KeyFormat(_)));
    }
}
