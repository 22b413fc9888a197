//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `maya-server`
//! integration tests. `TestApp` spawns a real server on a random port,
//! configured to call an `httpmock::MockServer` standing in for the AI
//! provider, so tests can exercise the API end to end.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use maya_server::{
    config::Config,
    router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};

// --- Full Application Test Harness ---

/// A harness for end-to-end testing of the Axum server.
///
/// This struct spawns the server on a random available port and configures
/// the `AppState` to use the OpenAI-compatible provider pointed at an
/// `httpmock::MockServer` instance.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let mock_server = MockServer::start();
        let config = Config {
            ai_provider: "local".to_string(),
            ai_api_url: mock_server.url("/v1/chat/completions"),
            ai_api_key: None,
            ai_model: Some("mock-chat-model".to_string()),
            port: 0,
        };

        let app_state = build_app_state(config)?;
        TestApp::spawn_with_state(app_state, mock_server).await
    }

    /// Spawns the server with a provider URL nothing is listening on, so
    /// every generation attempt fails at the transport level.
    pub async fn spawn_with_unreachable_provider() -> Result<Self> {
        let mock_server = MockServer::start();

        // Bind a listener to reserve a free port, then drop it so connections
        // to that port are refused.
        let reserved = std::net::TcpListener::bind("127.0.0.1:0")?;
        let dead_addr = reserved.local_addr()?;
        drop(reserved);
        let config = Config {
            ai_provider: "local".to_string(),
            ai_api_url: format!("http://{dead_addr}/v1/chat/completions"),
            ai_api_key: None,
            ai_model: None,
            port: 0,
        };

        let app_state = build_app_state(config)?;
        TestApp::spawn_with_state(app_state, mock_server).await
    }

    pub async fn spawn_with_state(app_state: AppState, mock_server: MockServer) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
