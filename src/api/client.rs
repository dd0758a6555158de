//! HTTP client for the QuizAI game server.
//!
//! Every call follows the same failure policy: transport errors and non-2xx
//! responses are logged and collapsed into an absent result. Nothing retries
//! and nothing propagates a typed failure to the caller.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::types::{ClientConfig, LeaderboardEntry, UserRecord};

// ============================================================================
// Constants
// ============================================================================

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// ApiClient
// ============================================================================

/// REST client for the game server.
pub struct ApiClient {
    /// Shared HTTP client
    http: reqwest::Client,
    /// Server base URL, no trailing slash
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the configured server.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Authenticates and returns the hydrated user record.
    ///
    /// The returned record carries the freshly issued session token.
    pub async fn login(&self, username: &str, password: &str) -> Option<UserRecord> {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let result = self
            .http
            .post(self.url("/api/auth/login"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        parse_json(result, "login").await
    }

    /// Revokes the session on the server. Returns false on any failure.
    pub async fn logout(&self, token: &str) -> bool {
        let body = serde_json::json!({ "session": token });

        let result = self
            .http
            .post(self.url("/api/auth/logout"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        check_success(result, "logout")
    }

    /// Fetches the profile of the session owner.
    pub async fn fetch_profile(&self, token: &str) -> Option<UserRecord> {
        let result = self
            .http
            .get(self.url("/api/users/profile"))
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        parse_json(result, "profile fetch").await
    }

    /// Sends a partial profile update and returns the updated record.
    pub async fn update_profile(&self, token: &str, patch: &UserRecord) -> Option<UserRecord> {
        let result = self
            .http
            .put(self.url("/api/users/profile"))
            .bearer_auth(token)
            .json(patch)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        parse_json(result, "profile update").await
    }

    /// Selects an avatar by id. Returns false on any failure.
    ///
    /// This endpoint predates bearer authentication and still takes the
    /// session token in the body.
    pub async fn set_profile_pic(&self, token: &str, pic_id: u32) -> bool {
        let body = serde_json::json!({
            "session": token,
            "picId": pic_id,
        });

        let result = self
            .http
            .post(self.url("/api/users/set/profile_pic"))
            .json(&body)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        check_success(result, "avatar update")
    }

    /// Fetches the global leaderboard.
    pub async fn fetch_global_leaderboard(&self, token: &str) -> Option<Vec<LeaderboardEntry>> {
        let result = self
            .http
            .get(self.url("/api/leaderboard/global"))
            .bearer_auth(token)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await;

        parse_json(result, "leaderboard fetch").await
    }

    /// Joins a path onto the base URL.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

// ============================================================================
// Response handling
// ============================================================================

/// Collapses a response into a parsed payload or an absent result.
async fn parse_json<T: DeserializeOwned>(
    result: Result<reqwest::Response, reqwest::Error>,
    what: &str,
) -> Option<T> {
    match result {
        Ok(response) if response.status().is_success() => match response.json::<T>().await {
            Ok(payload) => Some(payload),
            Err(e) => {
                tracing::warn!("failed to parse {what} response: {e}");
                None
            }
        },
        Ok(response) => {
            tracing::warn!("{what} request rejected with status {}", response.status());
            None
        }
        Err(e) => {
            tracing::warn!("{what} request failed: {e}");
            None
        }
    }
}

/// Collapses a response into a plain success flag.
fn check_success(result: Result<reqwest::Response, reqwest::Error>, what: &str) -> bool {
    match result {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            tracing::warn!("{what} request rejected with status {}", response.status());
            false
        }
        Err(e) => {
            tracing::warn!("{what} request failed: {e}");
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    // ------------------------------------------------------------------------
    // Mock server helpers
    // ------------------------------------------------------------------------

    /// Reads one HTTP request (head plus declared body) off the stream.
    async fn read_http_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut chunk = vec![0u8; 4096];

        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&raw);
            let Some(head_end) = text.find("\r\n\r\n") else {
                continue;
            };

            let content_length = text
                .to_ascii_lowercase()
                .lines()
                .find_map(|line| line.strip_prefix("content-length:").map(str::trim)?.parse::<usize>().ok())
                .unwrap_or(0);

            if raw.len() >= head_end + 4 + content_length {
                break;
            }
        }

        String::from_utf8_lossy(&raw).to_string()
    }

    /// Serves a single canned response, returning the captured request text.
    async fn serve_one(
        listener: TcpListener,
        status_line: &'static str,
        body: &'static str,
    ) -> tokio::task::JoinHandle<String> {
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let request = read_http_request(&mut stream).await;

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.flush().await.unwrap();

            request
        })
    }

    async fn create_client() -> (ApiClient, TcpListener) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let client = ApiClient::new(&ClientConfig::default().with_base_url(base_url));
        (client, listener)
    }

    // ------------------------------------------------------------------------
    // ApiClient Tests
    // ------------------------------------------------------------------------

    mod client_tests {
        use super::*;

        #[tokio::test]
        async fn test_fetch_profile_success() {
            let (client, listener) = create_client().await;
            let server = serve_one(
                listener,
                "200 OK",
                r#"{"username":"ada","globalPoints":42,"picId":2}"#,
            )
            .await;

            let user = client.fetch_profile("tok-1").await.unwrap();
            assert_eq!(user.username.as_deref(), Some("ada"));
            assert_eq!(user.global_points, Some(42));

            let request = server.await.unwrap();
            assert!(request.starts_with("GET /api/users/profile"));
            assert!(request.to_ascii_lowercase().contains("authorization: bearer tok-1"));
        }

        #[tokio::test]
        async fn test_fetch_profile_server_error_is_absent() {
            let (client, listener) = create_client().await;
            let server = serve_one(listener, "500 Internal Server Error", "boom").await;

            assert!(client.fetch_profile("tok-1").await.is_none());
            server.await.unwrap();
        }

        #[tokio::test]
        async fn test_connection_failure_is_absent() {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let base_url = format!("http://{}", listener.local_addr().unwrap());
            drop(listener);

            let client = ApiClient::new(&ClientConfig::default().with_base_url(base_url));
            assert!(client.fetch_profile("tok-1").await.is_none());
            assert!(client.fetch_global_leaderboard("tok-1").await.is_none());
            assert!(!client.set_profile_pic("tok-1", 3).await);
        }

        #[tokio::test]
        async fn test_login_returns_session_token() {
            let (client, listener) = create_client().await;
            let server = serve_one(
                listener,
                "200 OK",
                r#"{"username":"ada","session":"tok-fresh","userId":7}"#,
            )
            .await;

            let user = client.login("ada", "secret").await.unwrap();
            assert_eq!(user.session.as_deref(), Some("tok-fresh"));

            let request = server.await.unwrap();
            assert!(request.starts_with("POST /api/auth/login"));
            assert!(request.contains(r#""username":"ada""#));
            assert!(request.contains(r#""password":"secret""#));
        }

        #[tokio::test]
        async fn test_login_rejected_is_absent() {
            let (client, listener) = create_client().await;
            let server = serve_one(listener, "401 Unauthorized", "bad credentials").await;

            assert!(client.login("ada", "wrong").await.is_none());
            server.await.unwrap();
        }

        #[tokio::test]
        async fn test_update_profile_sends_bearer_put() {
            let (client, listener) = create_client().await;
            let server = serve_one(
                listener,
                "200 OK",
                r#"{"username":"ada","description":"hi"}"#,
            )
            .await;

            let patch = UserRecord {
                description: Some("hi".to_string()),
                ..Default::default()
            };
            let updated = client.update_profile("tok-1", &patch).await.unwrap();
            assert_eq!(updated.description.as_deref(), Some("hi"));

            let request = server.await.unwrap();
            assert!(request.starts_with("PUT /api/users/profile"));
            assert!(request.to_ascii_lowercase().contains("authorization: bearer tok-1"));
            assert!(request.contains(r#""description":"hi""#));
        }

        #[tokio::test]
        async fn test_set_profile_pic_sends_session_body() {
            let (client, listener) = create_client().await;
            let server = serve_one(listener, "200 OK", "{}").await;

            assert!(client.set_profile_pic("tok-1", 5).await);

            let request = server.await.unwrap();
            assert!(request.starts_with("POST /api/users/set/profile_pic"));
            assert!(request.contains(r#""session":"tok-1""#));
            assert!(request.contains(r#""picId":5"#));
        }

        #[tokio::test]
        async fn test_leaderboard_fetch() {
            let (client, listener) = create_client().await;
            let server = serve_one(
                listener,
                "200 OK",
                r#"[{"username":"ada","globalPoints":300},{"username":"bob","globalPoints":1}]"#,
            )
            .await;

            let entries = client.fetch_global_leaderboard("tok-1").await.unwrap();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].username, "ada");

            let request = server.await.unwrap();
            assert!(request.starts_with("GET /api/leaderboard/global"));
        }

        #[tokio::test]
        async fn test_malformed_payload_is_absent() {
            let (client, listener) = create_client().await;
            let server = serve_one(listener, "200 OK", "[not json").await;

            assert!(client.fetch_global_leaderboard("tok-1").await.is_none());
            server.await.unwrap();
        }
    }
}
