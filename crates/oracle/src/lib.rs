pub mod server;
pub mod error;
pub mod signing;

pub use server::{router, run};
pub use error::{KeyError, OracleError};
pub use signing::{PrivateKey, PublicKey, Signature, parse_private_key, sign, verify};
