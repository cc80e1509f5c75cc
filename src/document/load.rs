use super::{ApiDocument, DocumentError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Timeout applied to remote document fetches unless configured otherwise.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the API document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Url(Url),
}

impl DocumentSource {
    /// Interpret `location` as an HTTP(S) URL when it parses as one, otherwise
    /// as a filesystem path.
    #[must_use]
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => DocumentSource::Url(url),
            _ => DocumentSource::File(PathBuf::from(location)),
        }
    }

    /// The local file behind this source, if any.
    #[must_use]
    pub fn as_file(&self) -> Option<&Path> {
        match self {
            DocumentSource::File(path) => Some(path),
            DocumentSource::Url(_) => None,
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Parse document text, choosing JSON when the first non-blank character
/// opens an object and YAML otherwise.
pub fn parse_document(text: &str) -> Result<ApiDocument, DocumentError> {
    if text.trim_start().starts_with('{') {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Read and parse a document from disk.
///
/// `.json` files are parsed as JSON and `.yaml`/`.yml` files as YAML; any
/// other extension is sniffed by [`parse_document`].
pub fn load_document_file(path: &Path) -> Result<ApiDocument, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let document = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)?,
        Some("yaml" | "yml") => serde_yaml::from_str(&content)?,
        _ => parse_document(&content)?,
    };
    Ok(document)
}

/// Fetch and parse a document over HTTP(S).
///
/// Any non-success status aborts the load with [`DocumentError::Status`].
pub fn fetch_document(url: &Url, timeout: Duration) -> Result<ApiDocument, DocumentError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let response = client.get(url.as_str()).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocumentError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    debug!(url = %url, bytes = body.len(), "Fetched API document");
    parse_document(&body)
}

/// Load a document from either kind of source.
pub fn load_document(
    source: &DocumentSource,
    timeout: Duration,
) -> Result<ApiDocument, DocumentError> {
    let document = match source {
        DocumentSource::File(path) => load_document_file(path)?,
        DocumentSource::Url(url) => fetch_document(url, timeout)?,
    };

    info!(
        source = %source,
        title = %document.info.title,
        version = %document.info.version,
        paths = document.paths.len(),
        "API document loaded"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_source_parse() {
        assert!(matches!(
            DocumentSource::parse("https://api.example.com/swagger.yaml"),
            DocumentSource::Url(_)
        ));
        assert_eq!(
            DocumentSource::parse("doc/openapi.yaml"),
            DocumentSource::File(PathBuf::from("doc/openapi.yaml"))
        );
        // Windows drive letters parse as URLs with a one-letter scheme
        assert!(matches!(
            DocumentSource::parse("C:/specs/api.json"),
            DocumentSource::File(_)
        ));
    }

    #[test]
    fn test_parse_document_sniffs_json() {
        let doc = parse_document(r#"  {"info": {"title": "J"}, "paths": {"/x": {"get": {"summary": "X"}}}}"#)
            .unwrap();
        assert_eq!(doc.info.title, "J");
        assert_eq!(doc.paths["/x"].read().unwrap().summary, "X");
    }

    #[test]
    fn test_parse_document_reports_malformed() {
        let err = parse_document("paths: [unclosed").unwrap_err();
        assert!(err.is_malformed());
        assert!(!err.is_unavailable());

        let err = parse_document("{ not json").unwrap_err();
        assert!(matches!(err, DocumentError::MalformedJson(_)));
    }

    #[test]
    fn test_load_document_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "info:\n  title: From Disk\npaths: {{}}").unwrap();
        let doc = load_document_file(file.path()).unwrap();
        assert_eq!(doc.info.title, "From Disk");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let err = load_document_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
