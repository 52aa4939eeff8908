//! Local stand-in for the Medium API used by unit tests.

use crate::config::{Config, HttpConfig};
use std::collections::HashMap;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// One request as the server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// e.g. `GET /v1/me HTTP/1.1`
    pub request_line: String,
    /// Header names are lowercased
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Serves one canned `(status, body)` reply per connection, in order, then stops listening.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl StubServer {
    pub async fn start(replies: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut recorded = Vec::new();
            for (status, body) in replies {
                let (stream, _) = listener.accept().await.unwrap();
                let mut reader = BufReader::new(stream);

                let mut request_line = String::new();
                reader.read_line(&mut request_line).await.unwrap();

                let mut headers = HashMap::new();
                loop {
                    let mut line = String::new();
                    reader.read_line(&mut line).await.unwrap();
                    let line = line.trim_end();
                    if line.is_empty() {
                        break;
                    }
                    if let Some((name, value)) = line.split_once(':') {
                        headers.insert(name.trim().to_lowercase(), value.trim().to_string());
                    }
                }

                let length: usize = headers
                    .get("content-length")
                    .map(|v| v.parse().unwrap())
                    .unwrap_or(0);
                let mut payload = vec![0u8; length];
                reader.read_exact(&mut payload).await.unwrap();

                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let mut stream = reader.into_inner();
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.unwrap();

                recorded.push(RecordedRequest {
                    request_line: request_line.trim_end().to_string(),
                    headers,
                    body: String::from_utf8(payload).unwrap(),
                });
            }
            recorded
        });

        Self { base_url, handle }
    }

    /// Config pointing at this server.
    pub fn config(&self, token: &str) -> Config {
        Config::builder()
            .token(token)
            .http(HttpConfig::builder().base_url(self.base_url.clone()).build())
            .build()
    }

    /// Waits for every canned reply to be served and returns the requests.
    pub async fn requests(self) -> Vec<RecordedRequest> {
        self.handle.await.unwrap()
    }
}

pub const ME_OK: &str = r#"{"data": {"id": "u1", "username": "writer", "name": "A Writer", "url": "https://medium.com/@writer"}}"#;

pub const TOKEN_INVALID: &str =
    r#"{"errors": [{"message": "Token was invalid.", "code": 6003}]}"#;
