use serde::{Deserialize, Serialize};

/// Body of `/sign`. `message` is signed as its UTF-8 bytes.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct SignRequest {
    pub message: String,
    /// PKCS#8 private key, full PEM or bare base64 payload.
    pub key: String,
}

#[derive(Default, Deserialize)]
#[serde(default)]
pub struct VerifyRequest {
    pub message: String,
    /// Standard padded base64.
    pub signature: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub valid: bool,
}
