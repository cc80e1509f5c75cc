//! # Links Module
//!
//! The link engine proper: find the catalog paths directly below a requested
//! path and turn each into a [`Link`] whose relation name is the operation
//! summary and whose target is the child path with parameter values filled in.
//!
//! ```mermaid
//! flowchart LR
//!     A["/users/:id"] -->|router_to_catalog| B["/users/{id}"]
//!     B -->|match_children| C["/users/{id}/posts"]
//!     C -->|synthesize + params ['42']| D["rel: List posts<br/>href: /users/42/posts"]
//! ```
//!
//! Everything here is a pure function of the catalog and its inputs; no state
//! is kept between calls.

mod matcher;
mod root;
mod synth;

pub use matcher::{child_pattern, match_children, ChildMatch};
pub use root::RootMetadata;
pub use synth::{
    synthesize, synthesize_catalog_links, synthesize_links, Link, LinkError, SubstitutionMode,
};
