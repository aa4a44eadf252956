mod codec;
mod keys;
mod signer;
mod verifier;

pub use codec::{KeyAlgorithm, normalize_envelope, parse_private_key};
pub use keys::{PRIVATE_KEY_LENGTH, PUBLIC_KEY_LENGTH, PrivateKey, PublicKey, SIGNATURE_LENGTH, Signature};
pub use signer::sign;
pub use verifier::{decode_signature, verify};
