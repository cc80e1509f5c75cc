//! # CLI Module
//!
//! Command-line front end for the link engine.
//!
//! ## Commands
//!
//! ### `links`
//!
//! Print the metadata and links below a path, as the server would return them:
//!
//! ```bash
//! hateoas-links links --document doc/openapi.yaml --path /users/:id --param 42
//! ```
//!
//! ### `inspect`
//!
//! List the catalog paths with their read-operation summaries:
//!
//! ```bash
//! hateoas-links inspect --document https://api.example.com/swagger.yaml
//! ```
//!
//! ### `serve`
//!
//! Serve links over HTTP, optionally reloading the document on change:
//!
//! ```bash
//! hateoas-links serve --document doc/openapi.yaml --addr 0.0.0.0:8080 --watch
//! hateoas-links serve --config config/config.yaml
//! ```

mod commands;


pub use commands::{inspect_catalog, links_for, run_cli, Cli, Commands, InspectRow};
