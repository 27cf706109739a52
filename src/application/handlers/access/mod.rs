//! Access handlers.

mod issue_access_token;

pub use issue_access_token::{IssueAccessTokenCommand, IssueAccessTokenHandler};
