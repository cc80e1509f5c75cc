use std::path::PathBuf;

/// Failure to obtain or parse the API description document.
///
/// Transport problems ([`is_unavailable`](Self::is_unavailable)) are kept
/// apart from content problems ([`is_malformed`](Self::is_malformed)) so that
/// callers can decide whether a retry makes sense.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("failed to read API document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("API document source unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),
    #[error("received HTTP code {status} when attempting to retrieve API document from {url}")]
    Status { url: String, status: u16 },
    #[error("malformed API document (yaml): {0}")]
    MalformedYaml(#[from] serde_yaml::Error),
    #[error("malformed API document (json): {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("no document source configured")]
    NoSource,
}

impl DocumentError {
    /// The source could not be reached or refused to serve the document.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            DocumentError::Io { .. } | DocumentError::Unavailable(_) | DocumentError::Status { .. }
        )
    }

    /// The document was retrieved but could not be parsed.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            DocumentError::MalformedYaml(_) | DocumentError::MalformedJson(_)
        )
    }
}
