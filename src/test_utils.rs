//! Test utilities and fixtures for folk-catalog tests.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{MockServer, mock_entry};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let server = MockServer::respond(200, r#"{"artists": []}"#).await;
//!     let client = MusicBrainzClient::with_base_url(server.base_url());
//!     // ... test logic
//! }
//! ```

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::catalog::domain::{Entry, Era, Region};

/// Creates an Entry with sensible defaults.
///
/// Customize using struct update syntax:
///
/// ```ignore
/// let entry = Entry {
///     year: Some(1931),
///     ..mock_entry("id", "Title", "Artist")
/// };
/// ```
pub fn mock_entry(id: &str, title: &str, artist: &str) -> Entry {
    Entry {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        region: Region::Global,
        country: "Unknown".to_string(),
        era: Era::Traditional,
        year: None,
        tags: vec!["folk".to_string(), "traditional".to_string()],
        description: format!("{} by {}", title, artist),
        audio: None,
        media: vec![],
        image_url: None,
    }
}

/// Minimal HTTP server on 127.0.0.1 that answers every request with one canned response.
///
/// The raw request head of each request is forwarded to [`MockServer::next_request`]
/// so tests can assert on the path, query string and headers.
pub struct MockServer {
    base_url: String,
    requests: mpsc::UnboundedReceiver<String>,
}

impl MockServer {
    /// Start a server that answers with `status` and a JSON `body`.
    pub async fn respond(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 16 * 1024];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let _ = tx.send(String::from_utf8_lossy(&buf[..n]).into_owned());

                let response = format!(
                    "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests: rx,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw head of the next request the server received
    pub async fn next_request(&mut self) -> String {
        self.requests
            .recv()
            .await
            .expect("Mock server closed before a request arrived")
    }
}

/// A base URL nothing listens on, for transport-failure tests.
///
/// Binds an ephemeral port and drops the listener so connections are refused.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}
