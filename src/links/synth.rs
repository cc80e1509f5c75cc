use super::matcher::{match_children, ChildMatch};
use crate::document::PathCatalog;
use crate::path::{interleave, normalize_path, router_to_catalog};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A navigation link: relation name plus target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

/// How supplied parameter values are substituted into child paths.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SubstitutionMode {
    /// Fill placeholders left to right; unresolved placeholders vanish
    /// (`/users/{id}` with no values becomes `/users/`).
    #[default]
    Positional,
    /// Fill placeholders left to right; unresolved placeholders stay as
    /// `{name}` so the href remains a usable template.
    Template,
    /// Require exactly one value per placeholder.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("parameter count mismatch for {path}: expected {expected} values, got {supplied}")]
    ParameterCountMismatch {
        path: String,
        expected: usize,
        supplied: usize,
    },
}

/// Build the link for one matched child path.
pub fn synthesize<S: AsRef<str>>(
    child: &ChildMatch<'_>,
    params: &[S],
    mode: SubstitutionMode,
) -> Result<Link, LinkError> {
    let href = match mode {
        SubstitutionMode::Positional => interleave(&child.fragments, params),
        SubstitutionMode::Template => {
            let values: SmallVec<[&str; 4]> = child
                .placeholders
                .iter()
                .enumerate()
                .map(|(i, placeholder)| {
                    params
                        .get(i)
                        .map_or(placeholder.as_str(), |value| value.as_ref())
                })
                .collect();
            interleave(&child.fragments, &values)
        }
        SubstitutionMode::Strict => {
            if params.len() != child.placeholders.len() {
                return Err(LinkError::ParameterCountMismatch {
                    path: child.path.to_string(),
                    expected: child.placeholders.len(),
                    supplied: params.len(),
                });
            }
            interleave(&child.fragments, params)
        }
    };

    Ok(Link {
        rel: child.operation.summary.clone(),
        href,
    })
}

/// Links to every child of `request_path` (router notation) in `catalog`.
///
/// The path is translated to brace notation and handed to
/// [`synthesize_catalog_links`]. Only [`SubstitutionMode::Strict`] can fail.
pub fn synthesize_links<S: AsRef<str>>(
    catalog: &PathCatalog,
    request_path: &str,
    params: &[S],
    mode: SubstitutionMode,
) -> Result<Vec<Link>, LinkError> {
    synthesize_catalog_links(catalog, &router_to_catalog(request_path), params, mode)
}

/// Links to every child of `catalog_path`, which is already in brace notation
/// (`/users/{id}`, `/v1/{name}:publish`) and is not translated again.
///
/// Any query string and trailing slash are stripped before matching.
pub fn synthesize_catalog_links<S: AsRef<str>>(
    catalog: &PathCatalog,
    catalog_path: &str,
    params: &[S],
    mode: SubstitutionMode,
) -> Result<Vec<Link>, LinkError> {
    match_children(catalog, normalize_path(catalog_path))
        .iter()
        .map(|child| synthesize(child, params, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Operation, OperationSet};
    use crate::path::{placeholders, split_placeholders};

    const NONE: &[&str] = &[];

    fn get(summary: &str) -> OperationSet {
        OperationSet {
            get: Some(Operation {
                summary: summary.to_string(),
                ..Operation::default()
            }),
        }
    }

    fn users() -> PathCatalog {
        [
            ("/", get("Root")),
            ("/users", get("List users")),
            ("/users/{id}", get("Get user")),
            ("/users/{id}/posts", get("List posts")),
            ("/users/{id}/posts/{post}", get("Get post")),
        ]
        .into_iter()
        .map(|(p, ops)| (p.to_string(), ops))
        .collect()
    }

    fn child<'a>(path: &'a str, operation: &'a Operation) -> ChildMatch<'a> {
        ChildMatch {
            path,
            fragments: split_placeholders(path),
            placeholders: placeholders(path),
            operation,
        }
    }

    #[test]
    fn test_substitutes_supplied_value() {
        let op = Operation {
            summary: "Get user".into(),
            ..Operation::default()
        };
        let link = synthesize(&child("/users/{id}", &op), &["42"], SubstitutionMode::Positional)
            .unwrap();
        assert_eq!(
            link,
            Link {
                rel: "Get user".into(),
                href: "/users/42".into()
            }
        );
    }

    #[test]
    fn test_positional_without_values_drops_placeholder() {
        let op = Operation::default();
        let link = synthesize(&child("/users/{id}", &op), NONE, SubstitutionMode::Positional)
            .unwrap();
        assert_eq!(link.href, "/users/");
    }

    #[test]
    fn test_template_mode_keeps_unresolved_placeholders() {
        let op = Operation::default();
        let c = child("/users/{id}/posts/{post}", &op);
        assert_eq!(
            synthesize(&c, NONE, SubstitutionMode::Template).unwrap().href,
            "/users/{id}/posts/{post}"
        );
        assert_eq!(
            synthesize(&c, &["7"], SubstitutionMode::Template).unwrap().href,
            "/users/7/posts/{post}"
        );
    }

    #[test]
    fn test_strict_mode_rejects_arity_mismatch() {
        let op = Operation::default();
        let err = synthesize(&child("/users/{id}", &op), NONE, SubstitutionMode::Strict)
            .unwrap_err();
        assert_eq!(
            err,
            LinkError::ParameterCountMismatch {
                path: "/users/{id}".into(),
                expected: 1,
                supplied: 0
            }
        );
        assert!(synthesize(&child("/users", &op), NONE, SubstitutionMode::Strict).is_ok());
    }

    #[test]
    fn test_synthesize_links_from_router_path() {
        let catalog = users();
        let links =
            synthesize_links(&catalog, "/users/:id", &["42"], SubstitutionMode::Positional)
                .unwrap();
        assert_eq!(
            links,
            vec![Link {
                rel: "List posts".into(),
                href: "/users/42/posts".into()
            }]
        );
    }

    #[test]
    fn test_synthesize_links_root_and_leaf() {
        let catalog = users();
        let root = synthesize_links(&catalog, "/", NONE, SubstitutionMode::Positional).unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root[0].href, "/users");

        let leaf = synthesize_links(
            &catalog,
            "/users/:id/posts/:post",
            &["1", "2"],
            SubstitutionMode::Strict,
        )
        .unwrap();
        assert!(leaf.is_empty());
    }

    #[test]
    fn test_trailing_slash_and_query_are_ignored() {
        let catalog = users();
        let links =
            synthesize_links(&catalog, "/users/?page=2", NONE, SubstitutionMode::Template)
                .unwrap();
        assert_eq!(links[0].href, "/users/{id}");
    }

    #[test]
    fn test_strict_error_propagates_from_synthesize_links() {
        let catalog = users();
        let result = synthesize_links(&catalog, "/users", NONE, SubstitutionMode::Strict);
        assert!(matches!(
            result,
            Err(LinkError::ParameterCountMismatch { expected: 1, .. })
        ));
    }

    #[test]
    fn test_catalog_path_with_colon_suffix_is_not_retranslated() {
        let catalog: PathCatalog = [
            ("/v1/{name}:publish", get("Publish")),
            ("/v1/{name}:publish/status", get("Publish status")),
        ]
        .into_iter()
        .map(|(p, ops)| (p.to_string(), ops))
        .collect();

        let links = synthesize_catalog_links(
            &catalog,
            "/v1/{name}:publish",
            &["abc"],
            SubstitutionMode::Positional,
        )
        .unwrap();
        assert_eq!(
            links,
            vec![Link {
                rel: "Publish status".into(),
                href: "/v1/abc:publish/status".into()
            }]
        );
    }
}
