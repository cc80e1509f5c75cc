use super::PathResolver;
use crate::document::{OperationSet, PathCatalog};

fn catalog(paths: &[&str]) -> PathCatalog {
    paths
        .iter()
        .map(|p| ((*p).to_string(), OperationSet::default()))
        .collect()
}

#[test]
fn test_root_path() {
    let (re, params) = PathResolver::path_to_regex("/").unwrap();
    assert!(re.is_match("/"));
    assert!(!re.is_match("/x"));
    assert_eq!(params, 0);
}

#[test]
fn test_parameterized_path() {
    let (re, params) = PathResolver::path_to_regex("/items/{id}").unwrap();
    assert!(re.is_match("/items/123"));
    assert!(!re.is_match("/items/"));
    assert!(!re.is_match("/items/1/2"));
    assert_eq!(params, 1);
}

#[test]
fn test_nested_path() {
    let (re, params) = PathResolver::path_to_regex("/a/{b}/c").unwrap();
    assert!(re.is_match("/a/1/c"));
    assert_eq!(params, 1);
}

#[test]
fn test_literal_metacharacters_are_escaped() {
    let (re, _) = PathResolver::path_to_regex("/v1.0/{file}.json").unwrap();
    assert!(re.is_match("/v1.0/report.json"));
    assert!(!re.is_match("/v1x0/report.json"));
}

#[test]
fn test_resolve_extracts_params_in_order() {
    let resolver = PathResolver::new(&catalog(&["/users/{id}/posts/{post}"]));
    let resolved = resolver.resolve("/users/42/posts/abc").unwrap();
    assert_eq!(resolved.template, "/users/{id}/posts/{post}");
    assert_eq!(resolved.params.as_slice(), ["42", "abc"]);
}

#[test]
fn test_literal_beats_placeholder() {
    let resolver = PathResolver::new(&catalog(&["/users/{id}", "/users/me"]));
    assert_eq!(resolver.resolve("/users/me").unwrap().template, "/users/me");
    assert_eq!(resolver.resolve("/users/7").unwrap().template, "/users/{id}");
}

#[test]
fn test_query_and_trailing_slash_are_ignored() {
    let resolver = PathResolver::new(&catalog(&["/", "/users"]));
    assert_eq!(resolver.resolve("/users?limit=10").unwrap().template, "/users");
    assert_eq!(resolver.resolve("/users/").unwrap().template, "/users");
    assert_eq!(resolver.resolve("/?x=1").unwrap().template, "/");
}

#[test]
fn test_unknown_path() {
    let resolver = PathResolver::new(&catalog(&["/users"]));
    assert!(resolver.resolve("/pets").is_none());
    assert!(PathResolver::default().resolve("/").is_none());
    assert_eq!(resolver.len(), 1);
}
