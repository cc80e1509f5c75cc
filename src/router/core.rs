//! Path resolver core - compiled catalog templates and request matching.

use crate::document::PathCatalog;
use crate::path::{interleave, normalize_path, split_placeholders};
use regex::Regex;
use smallvec::SmallVec;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/{id}/posts/{postId}).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Parameter values extracted from a request path, in template order.
pub type ParamVec = SmallVec<[String; MAX_INLINE_PARAMS]>;

/// Capture group substituted for every placeholder of a template.
const SEGMENT_CAPTURE: &str = "([^/]+)";

/// A request path resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    /// Catalog path in brace notation (e.g. `/users/{id}`)
    pub template: String,
    /// Values for the template's placeholders, left to right
    pub params: ParamVec,
}

#[derive(Debug, Clone)]
struct CompiledPath {
    template: Arc<str>,
    regex: Regex,
    param_count: usize,
}

/// Matches concrete request paths to catalog templates.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    routes: Vec<CompiledPath>,
}

impl PathResolver {
    /// Compile every path of `catalog`.
    ///
    /// Templates whose pattern fails to compile are skipped with a warning; the
    /// resolver then simply never returns them.
    #[must_use]
    pub fn new(catalog: &PathCatalog) -> Self {
        let mut routes: Vec<CompiledPath> = catalog
            .keys()
            .filter_map(|template| match Self::path_to_regex(template) {
                Ok((regex, param_count)) => Some(CompiledPath {
                    template: Arc::from(template.as_str()),
                    regex,
                    param_count,
                }),
                Err(err) => {
                    warn!(template = %template, error = %err, "Skipping uncompilable catalog path");
                    None
                }
            })
            .collect();

        routes.sort_by(|a, b| {
            a.param_count
                .cmp(&b.param_count)
                .then_with(|| a.template.cmp(&b.template))
        });

        info!(templates = routes.len(), "Path resolver compiled");
        Self { routes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve `path` to the most specific matching template.
    ///
    /// Any query string is ignored and a trailing slash (other than the root)
    /// is tolerated. Returns `None` when no template matches.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<ResolvedPath> {
        let path = normalize_path(path);

        for route in &self.routes {
            if let Some(caps) = route.regex.captures(path) {
                let params: ParamVec = caps
                    .iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().to_owned())
                    .collect();
                debug!(
                    path = %path,
                    template = %route.template,
                    params = ?params,
                    "Request path resolved"
                );
                return Some(ResolvedPath {
                    template: route.template.to_string(),
                    params,
                });
            }
        }

        debug!(path = %path, "Request path matched no catalog template");
        None
    }

    /// Convert a catalog template into an anchored regex.
    ///
    /// Literal fragments are escaped and each placeholder becomes a capture of
    /// one non-empty segment, so `/files/{name}.json` matches `/files/a.json`.
    /// Returns the regex and the number of captures.
    pub(crate) fn path_to_regex(path: &str) -> Result<(Regex, usize), regex::Error> {
        let literals: Vec<String> = split_placeholders(path)
            .iter()
            .map(|fragment| regex::escape(fragment))
            .collect();
        let param_count = literals.len().saturating_sub(1);
        let captures = vec![SEGMENT_CAPTURE; param_count];

        let mut pattern = String::with_capacity(path.len() + param_count * 8 + 2);
        pattern.push('^');
        pattern.push_str(&interleave(&literals, &captures));
        pattern.push('$');

        Ok((Regex::new(&pattern)?, param_count))
    }
}
