//! Local stand-in for the YouTube Data API, answering canned responses in order.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;
use url::Url;

pub struct FakeYouTube {
    pub base_url: Url,
    request_lines: mpsc::Receiver<String>,
}

impl FakeYouTube {
    /// Serves one connection per `(status, body)` pair, then stops.
    pub fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = stream.read(&mut buf).unwrap();
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }
                let request_line = String::from_utf8_lossy(&request)
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .to_string();
                tx.send(request_line).ok();

                let response = format!(
                    "HTTP/1.1 {status} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).unwrap();
            }
        });

        FakeYouTube {
            base_url: Url::parse(&format!("http://127.0.0.1:{port}/youtube/v3/")).unwrap(),
            request_lines: rx,
        }
    }

    /// Request lines received so far, e.g. `GET /youtube/v3/search?... HTTP/1.1`.
    pub fn request_lines(&self) -> Vec<String> {
        self.request_lines.try_iter().collect()
    }
}
