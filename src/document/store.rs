use super::load::{load_document, DocumentSource, DEFAULT_FETCH_TIMEOUT};
use super::{ApiDocument, DocumentError, Info, PathCatalog};
use crate::router::PathResolver;
use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// One immutable view of the loaded document.
///
/// The resolver is compiled together with the catalog so that both always
/// describe the same set of paths.
#[derive(Debug)]
pub struct Snapshot {
    pub document: ApiDocument,
    pub resolver: PathResolver,
}

impl Snapshot {
    #[must_use]
    pub fn new(document: ApiDocument) -> Self {
        let resolver = PathResolver::new(&document.paths);
        Self { document, resolver }
    }

    #[must_use]
    pub fn info(&self) -> &Info {
        &self.document.info
    }

    #[must_use]
    pub fn catalog(&self) -> &PathCatalog {
        &self.document.paths
    }
}

/// Owner of the current document snapshot.
///
/// Readers call [`snapshot`](Self::snapshot) once per request and work on the
/// returned `Arc` for the rest of it. Writers replace the whole snapshot with a
/// single atomic swap, so a reader never observes a partially updated catalog.
pub struct DocumentStore {
    source: Option<DocumentSource>,
    fetch_timeout: Duration,
    current: ArcSwap<Snapshot>,
}

impl DocumentStore {
    /// Load the document from `source` and publish it.
    pub fn open(source: DocumentSource) -> Result<Self, DocumentError> {
        Self::open_with_timeout(source, DEFAULT_FETCH_TIMEOUT)
    }

    /// Like [`open`](Self::open) with an explicit timeout for remote sources.
    pub fn open_with_timeout(
        source: DocumentSource,
        fetch_timeout: Duration,
    ) -> Result<Self, DocumentError> {
        let document = load_document(&source, fetch_timeout)?;
        Ok(Self {
            source: Some(source),
            fetch_timeout,
            current: ArcSwap::from_pointee(Snapshot::new(document)),
        })
    }

    /// Publish an already parsed document. Such a store has no source, so
    /// [`reload`](Self::reload) fails with [`DocumentError::NoSource`].
    #[must_use]
    pub fn from_document(document: ApiDocument) -> Self {
        Self {
            source: None,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            current: ArcSwap::from_pointee(Snapshot::new(document)),
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }

    /// The snapshot currently in effect.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.load_full()
    }

    /// Swap in `document` unconditionally.
    pub fn replace(&self, document: ApiDocument) -> Arc<Snapshot> {
        let snapshot = Arc::new(Snapshot::new(document));
        self.current.store(Arc::clone(&snapshot));
        snapshot
    }

    /// Re-read the configured source and swap in the result.
    ///
    /// The new snapshot is fully built before the swap; on error the previous
    /// snapshot stays in effect.
    pub fn reload(&self) -> Result<Arc<Snapshot>, DocumentError> {
        let source = self.source.as_ref().ok_or(DocumentError::NoSource)?;
        match load_document(source, self.fetch_timeout) {
            Ok(document) => {
                let snapshot = self.replace(document);
                info!(
                    source = %source,
                    paths = snapshot.catalog().len(),
                    "API document reloaded"
                );
                Ok(snapshot)
            }
            Err(err) => {
                warn!(
                    source = %source,
                    error = %err,
                    "API document reload failed; keeping previous snapshot"
                );
                Err(err)
            }
        }
    }
}
