//! # Hot Reload Module
//!
//! Live reloading of the API document without restarting the server.
//!
//! ## Overview
//!
//! [`watch_document`] watches the document file and, on every modification:
//! - reloads and parses the document through [`DocumentStore::reload`]
//! - swaps the new snapshot in atomically (catalog and resolver together)
//! - calls the supplied hook with the new snapshot
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hateoas_links::hot_reload::watch_document;
//!
//! let store = Arc::new(DocumentStore::open(DocumentSource::parse("openapi.yaml"))?);
//! let watcher = watch_document("openapi.yaml", store.clone(), |snapshot| {
//!     println!("Reloaded {} paths", snapshot.catalog().len());
//! })?;
//!
//! // Keep watcher alive for as long as reloads are wanted
//! ```
//!
//! ## Error Handling
//!
//! If the new document fails to load or parse, the error is logged, the hook
//! is not called, and the previous snapshot keeps serving requests. Saving a
//! half-edited file therefore never takes links offline.
//!
//! Only file sources can be watched; a store backed by a URL is reloaded by
//! calling [`DocumentStore::reload`] directly.

use crate::document::{DocumentStore, Snapshot};
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Watch a document file and reload `store` when it changes.
///
/// `store` should have been opened from the same file; the watcher only
/// triggers reloads, the store decides what to read.
pub fn watch_document<P, F>(
    document_path: P,
    store: Arc<DocumentStore>,
    mut on_reload: F,
) -> notify::Result<RecommendedWatcher>
where
    P: AsRef<Path>,
    F: FnMut(&Snapshot) + Send + 'static,
{
    let path: PathBuf = document_path.as_ref().to_path_buf();

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    if let Ok(snapshot) = store.reload() {
                        info!(
                            paths = snapshot.catalog().len(),
                            "hot-reload: applying document update"
                        );
                        on_reload(&snapshot);
                    }
                }
            }
            Err(e) => warn!(error = ?e, "hot-reload: watch error"),
        },
        Config::default(),
    )?;

    watcher.watch(&path, RecursiveMode::NonRecursive)?;
    info!(path = %path.display(), "hot-reload: watching API document");
    Ok(watcher)
}
