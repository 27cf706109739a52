//! HS256 access-token issuer.
//!
//! Produces room access tokens in the format hosted real-time servers accept:
//! a JWT signed with the API secret whose issuer is the API key and whose
//! `video` claim carries the room grant.
//!
//! ```text
//! {
//!   "iss": "<api key>",
//!   "sub": "<participant>", "name": "<participant>",
//!   "nbf": 1700000000, "exp": 1700021600,
//!   "video": {"roomJoin": true, "room": "voice_7_1700000000",
//!             "canPublish": true, "canSubscribe": true}
//! }
//! ```

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::domain::access::{AccessGrant, TokenError, TransportCredentials, VideoGrant};
use crate::ports::AccessTokenIssuer;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub iss: String,
    pub sub: String,
    pub name: String,
    pub nbf: i64,
    pub exp: i64,
    pub video: VideoGrant,
}

/// Signs grants with the transport API secret.
pub struct JwtAccessTokenIssuer {
    credentials: TransportCredentials,
}

impl JwtAccessTokenIssuer {
    pub fn new(credentials: TransportCredentials) -> Self {
        Self { credentials }
    }

    fn claims(&self, grant: &AccessGrant, now: i64) -> AccessClaims {
        let ttl = i64::try_from(grant.ttl.as_secs()).unwrap_or(i64::MAX);
        AccessClaims {
            iss: self.credentials.api_key.clone(),
            sub: grant.identity.to_string(),
            name: grant.identity.to_string(),
            nbf: now,
            exp: now.saturating_add(ttl),
            video: grant.video.clone(),
        }
    }
}

impl AccessTokenIssuer for JwtAccessTokenIssuer {
    fn issue(&self, grant: &AccessGrant) -> Result<String, TokenError> {
        if !self.credentials.is_complete() {
            return Err(TokenError::MissingCredentials);
        }

        let claims = self.claims(grant, Utc::now().timestamp());
        let key = EncodingKey::from_secret(self.credentials.api_secret.expose_secret().as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            tracing::error!("Failed to sign access token: {}", e);
            TokenError::Signing(e.to_string())
        })
    }
}
