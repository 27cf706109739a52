//! AccessTokenIssuer port - signs room access grants.

use crate::domain::access::{AccessGrant, TokenError};

/// Port for minting signed access tokens.
///
/// Signing is CPU-only, so the port is synchronous.
pub trait AccessTokenIssuer: Send + Sync {
    /// Returns the encoded token for `grant`.
    fn issue(&self, grant: &AccessGrant) -> Result<String, TokenError>;
}
