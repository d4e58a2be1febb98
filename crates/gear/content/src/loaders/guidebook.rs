//! Guidebook document loader.

use std::path::Path;

use crate::guidebook::{AreaDocument, BookPath};
use crate::loaders::{LoadResult, read_file};

/// Loader for guidebook area documents from JSON files.
pub struct GuidebookLoader;

impl GuidebookLoader {
    /// Load the document for one position in the guidebook tree.
    ///
    /// # Arguments
    ///
    /// * `root` - Guidebook root directory
    /// * `path` - Position below the root; [`BookPath::root`] loads the top-level listing
    ///
    /// # Returns
    ///
    /// Returns the parsed AreaDocument. A missing or malformed document is an error.
    pub fn load(root: &Path, path: &BookPath) -> LoadResult<AreaDocument> {
        let file = path.document(root);
        let content = read_file(&file)?;
        let document = Self::parse(&content)
            .map_err(|e| e.context(format!("Guidebook area '{}'", path)))?;

        tracing::debug!(
            area = %path,
            name = document.name.as_deref().unwrap_or(""),
            areas = document.areas.len(),
            "Loaded guidebook area"
        );
        Ok(document)
    }

    /// Parse a guidebook document held in memory.
    pub fn parse(content: &str) -> LoadResult<AreaDocument> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse guidebook JSON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let doc = GuidebookLoader::parse("{}").unwrap();
        assert_eq!(doc, AreaDocument::default());

        let doc = GuidebookLoader::parse(r#"{"areas": [{"name": "Index"}]}"#).unwrap();
        assert_eq!(doc.name, None);
        assert_eq!(doc.areas[0].link(), None);
    }

    #[test]
    fn loads_nested_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("cascades")).unwrap();
        std::fs::write(
            dir.path().join("data.json"),
            r#"{"name": "Book", "areas": [{"name": "Cascades", "child": "cascades"}]}"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("cascades").join("data.json"),
            r#"{"name": "Cascades", "areas": []}"#,
        )
        .unwrap();

        let root = GuidebookLoader::load(dir.path(), &BookPath::root()).unwrap();
        let link = root.areas[0].link().unwrap();
        let child = BookPath::root().child(link).unwrap();
        let doc = GuidebookLoader::load(dir.path(), &child).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Cascades"));
        assert!(doc.areas.is_empty());
    }

    #[test]
    fn missing_document_names_the_area() {
        let dir = tempfile::tempdir().unwrap();
        let path = BookPath::parse("nowhere").unwrap();
        let err = GuidebookLoader::load(dir.path(), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("data.json"), "{\"areas\": 3}").unwrap();
        let err = GuidebookLoader::load(dir.path(), &BookPath::root()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse guidebook JSON"));
    }
}
