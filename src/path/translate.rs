#![allow(clippy::expect_used)]

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::interleave;

/// Literal fragments of a path template. Most catalog paths have three or
/// fewer placeholders, so four fragments stay inline.
pub type Fragments = SmallVec<[String; 4]>;

/// Router parameter token: a colon followed by ASCII word characters.
static ROUTER_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("valid router parameter regex"));

/// Catalog placeholder: anything enclosed in braces (non-greedy).
static CATALOG_PARAM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("valid catalog placeholder regex"));

/// Convert a router-notation path (`/users/:id`) into catalog notation
/// (`/users/{id}`).
///
/// Total over any input: a path without tokens is returned unchanged.
#[must_use]
pub fn router_to_catalog(path: &str) -> String {
    let literals: Fragments = ROUTER_PARAM.split(path).map(str::to_owned).collect();
    let tokens: SmallVec<[String; 4]> = ROUTER_PARAM
        .captures_iter(path)
        .map(|caps| format!("{{{}}}", &caps[1]))
        .collect();

    interleave(&literals, &tokens)
}

/// Split a catalog path on its placeholders, keeping the literal fragments.
///
/// `/users/{id}` yields `["/users/", ""]`; a path with no placeholders yields
/// a single fragment equal to the path.
#[must_use]
pub fn split_placeholders(path: &str) -> Fragments {
    CATALOG_PARAM.split(path).map(str::to_owned).collect()
}

/// Ordered placeholders of a catalog path, braces included (`{id}`).
#[must_use]
pub fn placeholders(path: &str) -> Fragments {
    CATALOG_PARAM
        .find_iter(path)
        .map(|m| m.as_str().to_owned())
        .collect()
}

/// Drop any query string or fragment and a trailing slash (except on `/`).
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/users/?limit=5"), "/users");
        assert_eq!(normalize_path("/users#top"), "/users");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/?x=1"), "/");
        assert_eq!(normalize_path("/v1/{name}:publish"), "/v1/{name}:publish");
    }

    #[test]
    fn test_path_without_tokens_is_unchanged() {
        for path in ["/", "/users", "/users/all/", "", "no-slash"] {
            assert_eq!(router_to_catalog(path), path);
        }
    }

    #[test]
    fn test_single_token() {
        assert_eq!(router_to_catalog("/users/:id"), "/users/{id}");
    }

    #[test]
    fn test_multiple_tokens_keep_literals_in_order() {
        let translated = router_to_catalog("/users/:user_id/posts/:postId2");
        assert_eq!(translated, "/users/{user_id}/posts/{postId2}");
        assert_eq!(placeholders(&translated).len(), 2);
        assert_eq!(
            split_placeholders(&translated).as_slice(),
            ["/users/", "/posts/", ""]
        );
    }

    #[test]
    fn test_token_stops_at_segment_boundary() {
        assert_eq!(router_to_catalog("/a/:b.json"), "/a/{b}.json");
        assert_eq!(router_to_catalog("/a/:b/c"), "/a/{b}/c");
    }

    #[test]
    fn test_bare_colon_is_literal() {
        assert_eq!(router_to_catalog("/time/12:/x"), "/time/12:/x");
    }

    #[test]
    fn test_split_placeholders() {
        assert_eq!(split_placeholders("/users/{id}").as_slice(), ["/users/", ""]);
        assert_eq!(split_placeholders("/users").as_slice(), ["/users"]);
        assert_eq!(split_placeholders("/{a}{b}").as_slice(), ["/", "", ""]);
    }

    #[test]
    fn test_placeholders_keep_braces() {
        assert_eq!(
            placeholders("/users/{id}/posts/{post}").as_slice(),
            ["{id}", "{post}"]
        );
        assert!(placeholders("/users").is_empty());
    }
}
