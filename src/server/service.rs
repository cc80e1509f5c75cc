use super::request::{parse_request, ParsedRequest};
use super::response::{write_json, write_json_error};
use crate::engine::LinkEngine;
use may_minihttp::{HttpService, Request, Response};
use serde_json::json;
use std::io;
use std::time::Instant;
use tracing::{info, warn};

/// Answers every `GET` with the document metadata and the links below the
/// requested path.
#[derive(Clone)]
pub struct LinkService {
    engine: LinkEngine,
}

impl LinkService {
    #[must_use]
    pub fn new(engine: LinkEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &LinkEngine {
        &self.engine
    }
}

/// Basic health check endpoint returning `{ "status": "ok" }`.
pub fn health_endpoint(res: &mut Response) -> io::Result<()> {
    write_json(res, 200, &json!({ "status": "ok" }));
    Ok(())
}

impl HttpService for LinkService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let ParsedRequest { method, path } = parse_request(&req);

        if method != "GET" {
            write_json_error(
                res,
                405,
                json!({ "error": "Method Not Allowed", "method": method, "path": path }),
            );
            return Ok(());
        }
        if path == "/health" {
            return health_endpoint(res);
        }

        let start = Instant::now();
        match self.engine.root_for_request(&path) {
            Ok(root) => {
                info!(
                    path = %path,
                    links = root.links.len(),
                    duration_us = start.elapsed().as_micros(),
                    "Links served"
                );
                write_json(res, 200, &root);
            }
            Err(err) => {
                warn!(path = %path, error = %err, "Link synthesis failed");
                write_json_error(
                    res,
                    400,
                    json!({ "error": format!("An error occurred: {err}") }),
                );
            }
        }
        Ok(())
    }
}
