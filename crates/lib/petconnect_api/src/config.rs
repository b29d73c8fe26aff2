//! API server configuration.

use crate::services::google::GoogleConfig;

/// Configuration for the API server. Built by the server binary from its
/// CLI arguments and environment; tests construct it directly.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:4000").
    pub bind_addr: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Google OAuth client settings.
    pub google: GoogleConfig,
}
