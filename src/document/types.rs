use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog paths in brace notation mapped to their operations.
///
/// Ordered by path so that link output is reproducible across runs.
pub type PathCatalog = BTreeMap<String, OperationSet>;

/// The subset of a Swagger/OpenAPI document used for link synthesis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub info: Info,
    #[serde(default)]
    pub paths: PathCatalog,
}

/// Top-level descriptive metadata (`info` block).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
}

/// Operations defined on a single path item.
///
/// Only the read operation participates in link synthesis; every other key of
/// the path item (`post`, `parameters`, `x-*`, ...) is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
}

impl OperationSet {
    /// The read operation, if the path defines one.
    #[must_use]
    pub fn read(&self) -> Option<&Operation> {
        self.get.as_ref()
    }
}

/// A single operation. `summary` becomes the link relation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub summary: String,
    #[serde(
        default,
        rename = "operationId",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_item_keys_are_ignored() {
        let yaml = r#"
info:
  title: Pets
  version: "2.1"
paths:
  /pets:
    parameters: []
    x-internal: true
    post:
      summary: Create pet
    get:
      summary: List pets
      operationId: list_pets
      responses:
        "200": { description: OK }
"#;
        let doc: ApiDocument = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(doc.info.title, "Pets");
        assert_eq!(doc.info.description, "");
        let pets = &doc.paths["/pets"];
        let get = pets.read().unwrap();
        assert_eq!(get.summary, "List pets");
        assert_eq!(get.operation_id.as_deref(), Some("list_pets"));
    }

    #[test]
    fn test_path_without_get_has_no_read_operation() {
        let doc: ApiDocument =
            serde_yaml::from_str("paths:\n  /jobs:\n    delete:\n      summary: Purge\n").unwrap();
        assert!(doc.paths["/jobs"].read().is_none());
    }

    #[test]
    fn test_catalog_iterates_in_path_order() {
        let yaml = "paths:\n  /b: {}\n  /a: {}\n  /a/{id}: {}\n";
        let doc: ApiDocument = serde_yaml::from_str(yaml).unwrap();
        let keys: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, ["/a", "/a/{id}", "/b"]);
    }
}
