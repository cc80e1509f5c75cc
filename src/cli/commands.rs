use crate::config::AppConfig;
use crate::document::{load_document, ApiDocument, DocumentSource, DocumentStore, DEFAULT_FETCH_TIMEOUT};
use crate::engine::LinkEngine;
use crate::hot_reload::watch_document;
use crate::links::{self, LinkError, RootMetadata, SubstitutionMode};
use crate::runtime_config::RuntimeConfig;
use crate::server::{HttpServer, LinkService};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Command-line interface for HATEOAS link synthesis
#[derive(Parser)]
#[command(name = "hateoas-links")]
#[command(about = "HATEOAS links from an OpenAPI/Swagger path catalog", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print metadata and links for one path
    Links {
        /// API document: file path or http(s) URL
        #[arg(short, long)]
        document: String,

        /// Path in router notation (e.g. /users/:id)
        #[arg(short, long, default_value = "/")]
        path: String,

        /// Parameter value, repeated in placeholder order
        #[arg(long = "param")]
        params: Vec<String>,

        /// How parameter values are substituted into child paths
        #[arg(long, value_enum, default_value_t = SubstitutionMode::Positional)]
        mode: SubstitutionMode,

        /// Timeout for remote documents, in milliseconds
        #[arg(long, default_value_t = 10_000)]
        fetch_timeout_ms: u64,
    },
    /// List catalog paths and their read operations
    Inspect {
        /// API document: file path or http(s) URL
        #[arg(short, long)]
        document: String,
    },
    /// Serve links over HTTP
    Serve {
        /// API document: file path or http(s) URL (overrides the config file)
        #[arg(short, long)]
        document: Option<String>,

        /// Listen address (overrides the config file)
        #[arg(long)]
        addr: Option<String>,

        /// Reload the document file when it changes
        #[arg(long, default_value_t = false)]
        watch: bool,

        /// Substitution mode (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<SubstitutionMode>,

        /// YAML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// One line of `inspect` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectRow {
    pub path: String,
    pub readable: bool,
    pub summary: Option<String>,
    pub operation_id: Option<String>,
}

/// Catalog overview in path order.
#[must_use]
pub fn inspect_catalog(document: &ApiDocument) -> Vec<InspectRow> {
    document
        .paths
        .iter()
        .map(|(path, operations)| {
            let read = operations.read();
            InspectRow {
                path: path.clone(),
                readable: read.is_some(),
                summary: read.map(|op| op.summary.clone()),
                operation_id: read.and_then(|op| op.operation_id.clone()),
            }
        })
        .collect()
}

/// Root metadata plus links for `path` in an already loaded document.
pub fn links_for(
    document: &ApiDocument,
    path: &str,
    params: &[String],
    mode: SubstitutionMode,
) -> Result<RootMetadata, LinkError> {
    let links = links::synthesize_links(&document.paths, path, params, mode)?;
    Ok(RootMetadata::assemble(&document.info, links))
}

/// Execute a parsed command line.
pub fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Links {
            document,
            path,
            params,
            mode,
            fetch_timeout_ms,
        } => {
            let source = DocumentSource::parse(&document);
            let document = load_document(&source, Duration::from_millis(fetch_timeout_ms))
                .with_context(|| format!("failed to load API document from {source}"))?;
            let root = links_for(&document, &path, &params, mode)?;
            println!("{}", serde_json::to_string_pretty(&root)?);
            Ok(())
        }
        Commands::Inspect { document } => {
            let source = DocumentSource::parse(&document);
            let document = load_document(&source, DEFAULT_FETCH_TIMEOUT)
                .with_context(|| format!("failed to load API document from {source}"))?;
            println!(
                "{} {} ({} paths)",
                document.info.title,
                document.info.version,
                document.paths.len()
            );
            for row in inspect_catalog(&document) {
                match (&row.summary, &row.operation_id) {
                    (Some(summary), Some(id)) => println!("[path] {} -> {summary} ({id})", row.path),
                    (Some(summary), None) => println!("[path] {} -> {summary}", row.path),
                    _ => println!("[path] {} (no read operation)", row.path),
                }
            }
            Ok(())
        }
        Commands::Serve {
            document,
            addr,
            watch,
            mode,
            config,
        } => {
            let file_config = match &config {
                Some(path) => AppConfig::load(path)?,
                None => AppConfig::default(),
            };
            serve(file_config, document, addr, watch, mode)
        }
    }
}

fn serve(
    file_config: AppConfig,
    document: Option<String>,
    addr: Option<String>,
    watch: bool,
    mode: Option<SubstitutionMode>,
) -> Result<()> {
    let source = match document {
        Some(location) => DocumentSource::parse(&location),
        None => file_config.document_source().context(
            "no API document given; pass --document or set `document` in the config file",
        )?,
    };
    let store = Arc::new(
        DocumentStore::open_with_timeout(source.clone(), file_config.fetch_timeout())
            .with_context(|| format!("failed to load API document from {source}"))?,
    );

    let mode = mode.unwrap_or(file_config.links.substitution);
    if mode == SubstitutionMode::Strict {
        warn!("Strict substitution over HTTP answers 400 for any path whose children add a placeholder");
    }
    let engine = LinkEngine::new(Arc::clone(&store)).with_mode(mode);

    RuntimeConfig::from_env().apply();

    let _watcher = if watch || file_config.watch {
        match source.as_file() {
            Some(path) => Some(watch_document(path, Arc::clone(&store), |_| {})?),
            None => {
                warn!(source = %source, "Watching is only supported for file documents; ignoring");
                None
            }
        }
    } else {
        None
    };

    let addr = addr.unwrap_or(file_config.http.addr);
    info!(addr = %addr, source = %source, mode = ?mode, "Starting link service");
    let handle = HttpServer(LinkService::new(engine)).start(addr.as_str())?;
    handle
        .join()
        .map_err(|e| anyhow!("server terminated abnormally: {e:?}"))
}
