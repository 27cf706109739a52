//! SessionConfig - explicit connection settings for one agent session.

use url::Url;

use crate::domain::access::TransportCredentials;

/// Where the agent connects and which host application it drives.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Real-time transport endpoint, e.g. `wss://example.livekit.cloud`.
    pub transport_url: Url,

    /// API key/secret for the transport.
    pub credentials: TransportCredentials,

    /// Base URL of the host application, e.g. `http://localhost:8069`.
    pub host_base_url: Url,
}

impl SessionConfig {
    pub fn new(
        transport_url: Url,
        credentials: TransportCredentials,
        host_base_url: Url,
    ) -> Self {
        Self {
            transport_url,
            credentials,
            host_base_url,
        }
    }
}
