//! # Router Module
//!
//! Resolves a live request path (`/users/42/posts`) to the catalog template it
//! belongs to (`/users/{id}/posts`) and the ordered parameter values taken
//! from it (`["42"]`). The link engine works on templates; this module is the
//! bridge between what a client requests and what the catalog describes.
//!
//! ## Architecture
//!
//! 1. **Compilation**: when a document snapshot is built, every catalog path is
//!    turned into an anchored regex (`/users/{id}` becomes `^/users/([^/]+)$`).
//! 2. **Matching**: a request path is tested against the compiled patterns in
//!    specificity order (fewest placeholders first, then by template), and the
//!    first match wins. Literal routes therefore shadow parameterised siblings:
//!    `/users/me` resolves to `/users/me`, not `/users/{id}`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use hateoas_links::router::PathResolver;
//!
//! let resolver = PathResolver::new(&document.paths);
//! if let Some(resolved) = resolver.resolve("/users/42") {
//!     assert_eq!(resolved.template, "/users/{id}");
//!     assert_eq!(resolved.params.as_slice(), ["42"]);
//! }
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use self::core::{ParamVec, PathResolver, ResolvedPath, MAX_INLINE_PARAMS};
