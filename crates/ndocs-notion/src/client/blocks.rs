//! Block operations for Notion API.

use tracing::{debug, info};

use super::NotionClient;
use crate::auth::ApiToken;
use crate::error::NotionError;
use crate::source::BlockSource;
use crate::types::PageResult;

impl NotionClient {
    /// Get the direct children of a page or block.
    ///
    /// Reads a single page of results; pagination cursors are not followed.
    /// Empty IDs and the dot segments `.` and `..` are rejected before any
    /// request is made.
    pub fn get_block_children(
        &self,
        block_id: &str,
        token: &ApiToken,
    ) -> Result<PageResult, NotionError> {
        if matches!(block_id, "" | "." | "..") {
            return Err(NotionError::InvalidPageId(block_id.to_owned()));
        }

        let url = self.children_url(block_id);
        info!("Getting children for block {}", block_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &token.bearer())
            .header("Notion-Version", &self.notion_version)
            .header("Content-Type", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(NotionError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        let page: PageResult = serde_json::from_str(&body)?;

        if page.has_more {
            debug!(
                block_id,
                next_cursor = ?page.next_cursor,
                "More children available; only the first page is used"
            );
        }
        info!(
            "Found {} blocks for block {} (request {})",
            page.blocks().len(),
            block_id,
            page.request_id
        );
        Ok(page)
    }
}

impl BlockSource for NotionClient {
    fn fetch(&self, page_id: &str, token: &ApiToken) -> Result<PageResult, NotionError> {
        self.get_block_children(page_id, token)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use pretty_assertions::assert_eq;

    use super::*;

    /// Serve one canned response on a local port.
    ///
    /// Returns the API base URL and a handle yielding the raw request head.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            write!(
                stream,
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            String::from_utf8(head).unwrap()
        });

        (base_url, handle)
    }

    fn token() -> ApiToken {
        ApiToken::new("secret").unwrap()
    }

    #[test]
    fn test_empty_block_id_rejected_without_request() {
        // Unroutable base URL: the call must fail before any I/O happens.
        let client = NotionClient::new("http://127.0.0.1:9", "2022-06-28");
        let err = client.get_block_children("", &token()).unwrap_err();
        assert!(matches!(err, NotionError::InvalidPageId(_)));
    }

    #[test]
    fn test_dot_segments_rejected_without_request() {
        let client = NotionClient::new("http://127.0.0.1:9", "2022-06-28");
        for id in [".", ".."] {
            let err = client.get_block_children(id, &token()).unwrap_err();
            assert!(matches!(err, NotionError::InvalidPageId(_)));
        }
    }

    #[test]
    fn test_request_line_and_headers() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"object":"list","results":[{"id":"b1","type":"paragraph","paragraph":{"rich_text":[{"type":"text","text":{"content":"hi"}}]}}],"has_more":false,"request_id":"req-9"}"#,
        );
        let client = NotionClient::new(&base_url, "2022-06-28");

        let page = client.get_block_children("abc123", &token()).unwrap();
        let head = server.join().unwrap();

        assert!(head.starts_with("GET /v1/blocks/abc123/children HTTP/1.1\r\n"));
        let head = head.to_ascii_lowercase();
        assert!(head.contains("\r\nauthorization: bearer secret\r\n"));
        assert!(head.contains("\r\nnotion-version: 2022-06-28\r\n"));
        assert!(head.contains("\r\ncontent-type: application/json\r\n"));

        assert_eq!(page.request_id, "req-9");
        assert_eq!(page.blocks().len(), 1);
        assert_eq!(page.blocks()[0].rich_text()[0].content(), "hi");
    }

    #[test]
    fn test_id_with_path_characters_stays_on_children_endpoint() {
        let (base_url, server) = serve_once("200 OK", r#"{"results":[]}"#);
        let client = NotionClient::new(&base_url, "2022-06-28");

        client.get_block_children("x/../../users?q=", &token()).unwrap();
        let head = server.join().unwrap();

        assert!(
            head.starts_with("GET /v1/blocks/x%2F..%2F..%2Fusers%3Fq%3D/children HTTP/1.1\r\n")
        );
    }

    #[test]
    fn test_error_status_returns_body() {
        let (base_url, server) = serve_once(
            "404 Not Found",
            r#"{"object":"error","status":404,"code":"object_not_found"}"#,
        );
        let client = NotionClient::new(&base_url, "2022-06-28");

        let err = client.get_block_children("missing", &token()).unwrap_err();
        server.join().unwrap();

        match err {
            NotionError::HttpResponse { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("object_not_found"));
            }
            other => panic!("expected HttpResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_body_is_json_error() {
        let (base_url, server) = serve_once("200 OK", "<html>gateway</html>");
        let client = NotionClient::new(&base_url, "2022-06-28");

        let err = client.get_block_children("abc", &token()).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, NotionError::Json(_)));
    }
}
