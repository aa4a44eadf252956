use ed25519_dalek::Signer;

use super::keys::{PrivateKey, Signature};

/// Signs `message` verbatim with Ed25519.
///
/// Deterministic and infallible: the same key and message always produce the
/// same 64-byte signature, and any message (including an empty one) is
/// accepted.
pub fn sign(key: &PrivateKey, message: &[u8]) -> Signature {
    Signature::from_dalek(key.signing_key().sign(message))
}
