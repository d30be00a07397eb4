//! Minimal HTTP/1.1 server standing in for the Mikrus API

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A request as seen by the stub
#[derive(Debug)]
pub struct Captured {
    pub request_line: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Serves exactly one HTTP/1.1 request with the given status and body
pub async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];

        let header_end = loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending headers");
            raw.extend_from_slice(&buf[..n]);
            if let Some(pos) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
        let header = |name: &str| {
            head.lines().find_map(|line| {
                let (key, value) = line.split_once(':')?;
                key.eq_ignore_ascii_case(name).then(|| value.trim().to_string())
            })
        };
        let content_length: usize = header("content-length").map_or(0, |v| v.parse().unwrap());
        while raw.len() < header_end + content_length {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "client closed before sending body");
            raw.extend_from_slice(&buf[..n]);
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();

        Captured {
            request_line: head.lines().next().unwrap_or_default().to_string(),
            content_type: header("content-type"),
            body: String::from_utf8_lossy(&raw[header_end..header_end + content_length])
                .to_string(),
        }
    });

    (base_url, handle)
}
