//! # Server Module
//!
//! HTTP front end for the link engine, built on `may_minihttp` coroutines.
//!
//! | Request            | Response                                        |
//! |--------------------|-------------------------------------------------|
//! | `GET /health`      | `200 {"status":"ok"}`                           |
//! | `GET <any path>`   | `200` document metadata plus links for the path |
//! | link error         | `400 {"error":"An error occurred: ..."}`        |
//! | any other method   | `405`                                           |
//!
//! A request only carries the values of its own path. Under
//! [`SubstitutionMode::Strict`](crate::links::SubstitutionMode::Strict) a path
//! whose children add a placeholder therefore always answers 400; the server
//! is normally run in positional or template mode.
//!
//! ```rust,ignore
//! use hateoas_links::server::{HttpServer, LinkService};
//!
//! let service = LinkService::new(engine);
//! let handle = HttpServer(service).start("0.0.0.0:8080")?;
//! handle.join().ok();
//! ```

pub mod http_server;
pub mod request;
pub mod response;
pub mod service;

pub use http_server::{HttpServer, ServerHandle};
pub use request::{parse_request, ParsedRequest};
pub use service::{health_endpoint, LinkService};
