//! # Engine Module
//!
//! [`LinkEngine`] ties the link functions to a [`DocumentStore`]. Every call
//! takes exactly one snapshot from the store and works on it to completion, so
//! a reload that lands mid-request cannot mix two catalogs in one response.

use crate::document::DocumentStore;
use crate::links::{self, Link, LinkError, RootMetadata, SubstitutionMode};
use crate::router::ParamVec;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone)]
pub struct LinkEngine {
    store: Arc<DocumentStore>,
    mode: SubstitutionMode,
}

impl LinkEngine {
    #[must_use]
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self {
            store,
            mode: SubstitutionMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: SubstitutionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn mode(&self) -> SubstitutionMode {
        self.mode
    }

    #[must_use]
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// Links below `request_path`, given in router notation (`/users/:id`).
    pub fn synthesize_links<S: AsRef<str>>(
        &self,
        request_path: &str,
        params: &[S],
    ) -> Result<Vec<Link>, LinkError> {
        let snapshot = self.store.snapshot();
        links::synthesize_links(snapshot.catalog(), request_path, params, self.mode)
    }

    /// Document metadata plus the links below `request_path`.
    pub fn root_response<S: AsRef<str>>(
        &self,
        request_path: &str,
        params: &[S],
    ) -> Result<RootMetadata, LinkError> {
        let snapshot = self.store.snapshot();
        let links = links::synthesize_links(snapshot.catalog(), request_path, params, self.mode)?;
        Ok(RootMetadata::assemble(snapshot.info(), links))
    }

    /// Like [`root_response`](Self::root_response) for a live request path
    /// (`/users/42`).
    ///
    /// The path is first resolved to its catalog template and parameter
    /// values. The template is already in brace notation, so it is matched
    /// without router translation. A path that resolves to nothing is used
    /// as-is with no values, which usually produces an empty link list.
    pub fn root_for_request(&self, path: &str) -> Result<RootMetadata, LinkError> {
        let snapshot = self.store.snapshot();
        let (template, params) = match snapshot.resolver.resolve(path) {
            Some(resolved) => (resolved.template, resolved.params),
            None => (path.to_string(), ParamVec::new()),
        };
        debug!(path = %path, template = %template, params = ?params, "Synthesizing links for request");

        let links =
            links::synthesize_catalog_links(snapshot.catalog(), &template, &params, self.mode)?;
        Ok(RootMetadata::assemble(snapshot.info(), links))
    }
}
