//! # Path Module
//!
//! Pure string primitives shared by the link engine and the path resolver.
//!
//! A path is treated as an ordered sequence of literal fragments separated by
//! parameter placeholders. Two notations exist:
//!
//! - **Router notation** - colon-prefixed tokens, e.g. `/users/:id/posts`
//! - **Catalog notation** - brace-delimited tokens, e.g. `/users/{id}/posts`
//!
//! Both are handled by splitting on a token pattern and recombining the pieces
//! with [`interleave`]:
//!
//! ```rust
//! use hateoas_links::path::{interleave, router_to_catalog};
//!
//! assert_eq!(router_to_catalog("/users/:id"), "/users/{id}");
//! assert_eq!(interleave(&["/users/", ""], &["42"]), "/users/42");
//! ```

mod interleave;
mod translate;

pub use interleave::interleave;
pub use translate::{
    normalize_path, placeholders, router_to_catalog, split_placeholders, Fragments,
};
