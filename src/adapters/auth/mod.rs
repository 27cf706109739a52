//! Authentication adapters.
//!
//! - `JwtAccessTokenIssuer` - signs room access tokens (HS256)

mod jwt_issuer;

pub use jwt_issuer::{AccessClaims, JwtAccessTokenIssuer};
