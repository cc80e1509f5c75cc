use crate::document::{Operation, PathCatalog};
use crate::path::{placeholders, split_placeholders, Fragments};
use regex::Regex;
use tracing::{debug, warn};

/// One final segment: letters and/or braces, nothing else.
const CHILD_SEGMENT: &str = "[A-Za-z{}]+";

/// A catalog path exactly one segment below the requested path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildMatch<'a> {
    /// The catalog path, brace notation
    pub path: &'a str,
    /// Literal fragments between placeholders (`/users/{id}` → `["/users/", ""]`)
    pub fragments: Fragments,
    /// Placeholders in order, braces included
    pub placeholders: Fragments,
    /// The path's read operation
    pub operation: &'a Operation,
}

/// Build the pattern matching direct children of `path` (brace notation).
///
/// The root gets `^/[A-Za-z{}]+$`; any other path is escaped and followed by
/// one `/segment`. Because the segment class excludes `/`, deeper descendants
/// never match, and because it is non-empty, `path` itself never matches.
pub fn child_pattern(path: &str) -> Result<Regex, regex::Error> {
    let pattern = if path == "/" {
        format!("^/{CHILD_SEGMENT}$")
    } else {
        format!("^{}/{CHILD_SEGMENT}$", regex::escape(path))
    };
    Regex::new(&pattern)
}

/// Catalog paths one segment below `path` that define a read operation.
///
/// Results follow catalog order (lexicographic by path). A pattern that fails
/// to compile yields no matches rather than an error.
#[must_use]
pub fn match_children<'a>(catalog: &'a PathCatalog, path: &str) -> Vec<ChildMatch<'a>> {
    let pattern = match child_pattern(path) {
        Ok(re) => re,
        Err(err) => {
            warn!(path = %path, error = %err, "Child pattern failed to compile; no links produced");
            return Vec::new();
        }
    };

    let children: Vec<ChildMatch<'a>> = catalog
        .iter()
        .filter(|(candidate, _)| pattern.is_match(candidate))
        .filter_map(|(candidate, operations)| {
            let operation = operations.read()?;
            Some(ChildMatch {
                path: candidate.as_str(),
                fragments: split_placeholders(candidate),
                placeholders: placeholders(candidate),
                operation,
            })
        })
        .collect();

    debug!(
        path = %path,
        pattern = %pattern,
        children = children.len(),
        "Child paths matched"
    );
    children
}
