//! Client configuration bridge.
//!
//! Computes the read-only view the front end consumes: the browser-safe
//! configuration slice plus derived readiness flags. The view is computed
//! once per fetch; environment state never changes within a process, so
//! there is nothing to subscribe to.

use crate::config::{ClientConfig, Config};
use crate::validation::is_configured;
use serde::Serialize;

/// Per-field presence checks for the client-visible values.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigStatus {
    pub has_valid_daily_domain: bool,
    pub has_valid_app_url: bool,
    pub has_valid_websocket_url: bool,
    pub is_development: bool,
}

/// The read-only triple handed to UI code.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfigView {
    pub config: ClientConfig,
    pub status: ClientConfigStatus,
    pub is_ready: bool,
    pub has_errors: bool,
}

impl ClientConfigView {
    /// Build the view from the full configuration.
    ///
    /// Development is usable without a Daily.co domain (room creation fails
    /// later with a clear error); production readiness requires it.
    pub fn new(config: &Config) -> Self {
        let status = ClientConfigStatus {
            has_valid_daily_domain: is_configured(&config.daily.domain),
            has_valid_app_url: !config.app.url.is_empty(),
            has_valid_websocket_url: !config.app.websocket_url.is_empty(),
            is_development: config.app.mode.is_development(),
        };

        let is_ready =
            status.has_valid_app_url && (status.is_development || status.has_valid_daily_domain);
        let has_errors = !status.has_valid_app_url;

        Self {
            config: config.client_config(),
            status,
            is_ready,
            has_errors,
        }
    }
}
