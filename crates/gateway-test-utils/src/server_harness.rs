//! Test server harness for E2E testing
//!
//! Provides `TestServer` for spawning real gateway instances in tests.

use interview_gateway::config::Config;
use interview_gateway::routes::{self, AppState};
use interview_gateway::services::DailyClient;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Environment snapshot with every credential configured, development mode.
///
/// Tests override or remove entries to exercise specific configurations.
pub fn base_vars() -> HashMap<String, String> {
    HashMap::from([
        ("DAILY_API_KEY".to_string(), "test-daily-key".to_string()),
        ("DAILY_DOMAIN".to_string(), "test.daily.co".to_string()),
        ("DEEPGRAM_API_KEY".to_string(), "test-deepgram-key".to_string()),
        ("ANTHROPIC_API_KEY".to_string(), "test-anthropic-key".to_string()),
        (
            "ELEVENLABS_API_KEY".to_string(),
            "test-elevenlabs-key".to_string(),
        ),
    ])
}

/// Test harness for spawning the interview gateway in E2E tests.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_health_flow_e2e() -> Result<(), anyhow::Error> {
///     let server = TestServer::spawn().await?;
///     let client = reqwest::Client::new();
///
///     let response = client
///         .get(format!("{}/health", server.url()))
///         .send()
///         .await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestServer {
    addr: SocketAddr,
    config: Config,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Spawn a server with the default development configuration.
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        Self::spawn_with_vars(base_vars()).await
    }

    /// Spawn a server with an explicit environment snapshot.
    ///
    /// The server will:
    /// - Build its configuration from `vars` (never the real environment)
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn_with_vars(vars: HashMap<String, String>) -> Result<Self, anyhow::Error> {
        let config = Config::from_vars(&vars)
            .map_err(|e| anyhow::anyhow!("Failed to create config: {}", e))?;

        let daily = DailyClient::new(config.daily.api_url.clone())
            .map_err(|e| anyhow::anyhow!("Failed to build Daily client: {}", e))?;

        let state = Arc::new(AppState {
            config: config.clone(),
            daily,
        });

        // Build routes using the gateway's real route builder
        let app = routes::build_routes(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            config,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Get reference to the server configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so the port is released as soon as the
        // test completes.
        self._handle.abort();
    }
}
