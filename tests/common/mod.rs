#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Document written to a scratch file, removed when dropped.
    pub fn create_temp_document(content: &str, ext: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .prefix("hateoas_test_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_document(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_document(content, "json")
    }

    /// Location string as the CLI and `DocumentSource::parse` take it.
    pub fn location(file: &NamedTempFile) -> &str {
        file.path().to_str().unwrap()
    }
}

pub mod http {
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    /// Send a raw HTTP request and read until the server goes quiet.
    pub fn send_request(addr: &SocketAddr, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(300)))
            .unwrap();
        let mut buf = Vec::new();
        loop {
            let mut tmp = [0u8; 1024];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {:?}", e),
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    pub fn parse_response(resp: &str) -> (u16, serde_json::Value) {
        let mut parts = resp.splitn(2, "\r\n\r\n");
        let headers = parts.next().unwrap_or("");
        let body = parts.next().unwrap_or("");
        let mut status = 0;
        for line in headers.lines() {
            if line.starts_with("HTTP/1.1") {
                status = line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("0")
                    .parse()
                    .unwrap();
            }
        }
        let json = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }
}

/// Document used across the integration tests.
pub const USERS_DOC: &str = r#"
swagger: "2.0"
info:
  title: Users API
  description: Users and their posts
  version: "2.1"
paths:
  "/":
    get:
      summary: API root
  /users:
    get:
      summary: List users
      operationId: list_users
    post:
      summary: Create user
  /users/{id}:
    get:
      summary: Get user
    delete:
      summary: Delete user
  /users/{id}/posts:
    get:
      summary: List posts
  /users/{id}/avatar:
    put:
      summary: Upload avatar
  /users/{id}/posts/{post_id}:
    get:
      summary: Get post
  /health/status:
    get:
      summary: Service status
"#;
