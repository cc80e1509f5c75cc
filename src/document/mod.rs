//! # Document Module
//!
//! Loading and publishing of the API description document (Swagger 2.0 or
//! OpenAPI 3.x). Only the parts the link engine reads are modelled: the `info`
//! block and, per path, the optional `get` operation.
//!
//! ## Lifecycle
//!
//! 1. A [`DocumentSource`] names a local file or an HTTP(S) URL.
//! 2. [`load_document`] reads and parses it (YAML or JSON).
//! 3. [`DocumentStore`] publishes the result as an immutable [`Snapshot`].
//!    Reloads build a complete new snapshot and swap it in atomically; a failed
//!    reload leaves the previous snapshot authoritative.
//!
//! ```rust,ignore
//! use hateoas_links::document::{DocumentSource, DocumentStore};
//!
//! let store = DocumentStore::open(DocumentSource::parse("doc/openapi.yaml"))?;
//! let snapshot = store.snapshot();
//! println!("{} paths", snapshot.document.paths.len());
//! ```

mod error;
mod load;
mod store;
mod types;

pub use error::DocumentError;
pub use load::{
    fetch_document, load_document, load_document_file, parse_document, DocumentSource,
    DEFAULT_FETCH_TIMEOUT,
};
pub use store::{DocumentStore, Snapshot};
pub use types::{ApiDocument, Info, Operation, OperationSet, PathCatalog};
