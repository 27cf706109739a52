//! IssueAccessTokenHandler - mints a room token for a host-application user.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::domain::access::{AccessGrant, IssuedAccessToken, TokenError};
use crate::domain::foundation::{ParticipantIdentity, RoomName};
use crate::ports::AccessTokenIssuer;

/// Command to issue a token for one user.
#[derive(Debug, Clone)]
pub struct IssueAccessTokenCommand {
    pub user_id: String,
    pub user_name: Option<String>,
}

/// Handler for issuing access tokens.
///
/// Each call creates a fresh room named after the user and the current time,
/// so a browser reload never lands in a stale room.
pub struct IssueAccessTokenHandler {
    issuer: Arc<dyn AccessTokenIssuer>,
    /// Returned to the client exactly as configured.
    transport_url: String,
    ttl: Duration,
}

impl IssueAccessTokenHandler {
    pub fn new(
        issuer: Arc<dyn AccessTokenIssuer>,
        transport_url: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            issuer,
            transport_url: transport_url.into(),
            ttl,
        }
    }

    pub fn handle(&self, cmd: IssueAccessTokenCommand) -> Result<IssuedAccessToken, TokenError> {
        self.handle_at(cmd, Utc::now().timestamp())
    }

    fn handle_at(
        &self,
        cmd: IssueAccessTokenCommand,
        unix_seconds: i64,
    ) -> Result<IssuedAccessToken, TokenError> {
        let room = RoomName::for_user(&cmd.user_id, unix_seconds)?;
        let identity = ParticipantIdentity::for_user(&cmd.user_id, cmd.user_name.as_deref())?;

        let grant = AccessGrant::new(identity.clone(), room.clone(), self.ttl);
        let token = self.issuer.issue(&grant)?;

        tracing::info!(room = %room, participant = %identity, "Issued access token");

        Ok(IssuedAccessToken {
            token,
            url: self.transport_url.clone(),
            room: room.to_string(),
            participant: identity.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ErrorCode, ValidationError};
    use std::sync::Mutex;

    /// Issuer that records grants and returns a fixed token.
    struct RecordingIssuer {
        grants: Mutex<Vec<AccessGrant>>,
        fail: bool,
    }

    impl RecordingIssuer {
        fn new() -> Self {
            Self {
                grants: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                grants: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl AccessTokenIssuer for RecordingIssuer {
        fn issue(&self, grant: &AccessGrant) -> Result<String, TokenError> {
            if self.fail {
                return Err(TokenError::MissingCredentials);
            }
            self.grants.lock().unwrap().push(grant.clone());
            Ok("signed.token.value".to_string())
        }
    }

    fn handler(issuer: Arc<RecordingIssuer>) -> IssueAccessTokenHandler {
        IssueAccessTokenHandler::new(
            issuer,
            "wss://rtc.example.com",
            Duration::from_secs(3600),
        )
    }

    fn command(user_id: &str, user_name: Option<&str>) -> IssueAccessTokenCommand {
        IssueAccessTokenCommand {
            user_id: user_id.to_string(),
            user_name: user_name.map(str::to_string),
        }
    }

    #[test]
    fn issues_token_for_named_user() {
        let issuer = Arc::new(RecordingIssuer::new());
        let issued = handler(issuer.clone())
            .handle_at(command("7", Some("Mitchell Admin")), 1_700_000_000)
            .unwrap();

        assert_eq!(issued.token, "signed.token.value");
        assert_eq!(issued.room, "voice_7_1700000000");
        assert_eq!(issued.participant, "Mitchell Admin");
        assert_eq!(issued.url, "wss://rtc.example.com");

        let grants = issuer.grants.lock().unwrap();
        assert_eq!(grants[0].video.room, "voice_7_1700000000");
        assert!(grants[0].video.room_join);
        assert_eq!(grants[0].ttl, Duration::from_secs(3600));
    }

    #[test]
    fn falls_back_to_user_id_identity() {
        let issuer = Arc::new(RecordingIssuer::new());
        let issued = handler(issuer)
            .handle_at(command("42", None), 1_700_000_000)
            .unwrap();
        assert_eq!(issued.participant, "User42");
    }

    #[test]
    fn blank_user_id_is_invalid() {
        let issuer = Arc::new(RecordingIssuer::new());
        let err = handler(issuer.clone())
            .handle(command("  ", None))
            .unwrap_err();

        assert!(matches!(err, TokenError::InvalidRequest(ValidationError::EmptyField { .. })));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(issuer.grants.lock().unwrap().is_empty());
    }

    #[test]
    fn issuer_failure_propagates() {
        let issuer = Arc::new(RecordingIssuer::failing());
        let err = handler(issuer).handle(command("7", None)).unwrap_err();
        assert_eq!(err, TokenError::MissingCredentials);
    }
}
