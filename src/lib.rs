//! # hateoas-links
//!
//! **hateoas-links** derives HATEOAS navigation links from the path catalog of
//! an OpenAPI/Swagger document and serves them over a `may` coroutine HTTP
//! server.
//!
//! ## Overview
//!
//! Given a request path such as `/users/:id` and its parameter values, the
//! crate finds every catalog path exactly one segment below it that has a read
//! (`GET`) operation, fills in the parameter values, and returns one link per
//! child with the operation summary as its `rel`. The document's title,
//! description and version are returned alongside as root metadata.
//!
//! ## Architecture
//!
//! - **[`path`]** - Placeholder translation (`:id` to `{id}`) and the interleaver
//! - **[`document`]** - Loading, parsing and hot-swappable snapshots of the API document
//! - **[`router`]** - Resolves live request paths (`/users/42`) to catalog templates
//! - **[`links`]** - Child matching, link synthesis and root metadata
//! - **[`engine`]** - Snapshot-consistent link computation over a [`document::DocumentStore`]
//! - **[`server`]** - HTTP service on `may_minihttp`
//! - **[`hot_reload`]** - Reload the document when its file changes
//! - **[`cli`]** - `links`, `inspect` and `serve` commands
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as server::LinkService
//!     participant Engine as engine::LinkEngine
//!     participant Store as document::DocumentStore
//!     participant Resolver as router::PathResolver
//!     participant Links as links::synthesize_links
//!
//!     Client->>Server: GET /users/42
//!     Server->>Engine: root_for_request("/users/42")
//!     Engine->>Store: snapshot()
//!     Store-->>Engine: Arc<Snapshot>
//!     Engine->>Resolver: resolve("/users/42")
//!     Resolver-->>Engine: /users/{id}, ["42"]
//!     Engine->>Links: catalog, "/users/{id}", ["42"]
//!     Links-->>Engine: Vec<Link>
//!     Engine-->>Server: RootMetadata
//!     Server-->>Client: 200 OK + JSON body
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use hateoas_links::document::{load_document, DocumentSource, DEFAULT_FETCH_TIMEOUT};
//! use hateoas_links::links::{synthesize_links, SubstitutionMode};
//!
//! let source = DocumentSource::parse("openapi.yaml");
//! let document = load_document(&source, DEFAULT_FETCH_TIMEOUT).expect("Failed to load document");
//! let links = synthesize_links(&document.paths, "/users/:id", &["42"], SubstitutionMode::Positional)
//!     .expect("Failed to synthesize links");
//! for link in links {
//!     println!("{} -> {}", link.rel, link.href);
//! }
//! ```
//!
//! ## Runtime Considerations
//!
//! The server runs on the `may` coroutine runtime, not tokio. Coroutine stack
//! size is configurable via the `HATEOAS_STACK_SIZE` environment variable.

pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod hot_reload;
pub mod links;
pub mod otel;
pub mod path;
pub mod router;
pub mod runtime_config;
pub mod server;

pub use document::{load_document, ApiDocument, DocumentSource, DocumentStore};
pub use engine::LinkEngine;
pub use links::{synthesize_links, Link, LinkError, RootMetadata, SubstitutionMode};
