use crate::catalog::{load_catalog, Catalog};
use crate::error::{CatalogError, Result};
use crate::schema_validation::validate_against_schema;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file
pub fn load_catalog_file<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let raw = read_json(path.as_ref())?;
    load_catalog(raw)
}

/// Load a catalog from a JSON file after checking it against a JSON Schema
pub fn load_catalog_file_with_schema<P: AsRef<Path>, S: AsRef<Path>>(
    path: P,
    schema_path: S,
) -> Result<Catalog> {
    let schema = read_json(schema_path.as_ref())?;
    let raw = read_json(path.as_ref())?;

    validate_against_schema(&schema, &raw).map_err(CatalogError::Schema)?;

    load_catalog(raw)
}

fn read_json(path: &Path) -> Result<Value> {
    tracing::debug!(path = %path.display(), "reading json");
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_catalog_file() {
        let file = write_temp(r#"{"items": [{"id": "a", "label": "A", "status": "retired"}]}"#);
        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.items()[0].collection, "retired");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_catalog_file("/definitely/not/here/shoes.json");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }

    #[test]
    fn test_schema_rejects_document() {
        let schema = write_temp(
            r#"{"type": "array", "items": {"type": "object", "required": ["id", "label", "brand"]}}"#,
        );
        let data = write_temp(r#"[{"id": "a", "label": "A"}]"#);

        let result = load_catalog_file_with_schema(data.path(), schema.path());
        assert!(matches!(result, Err(CatalogError::Schema(_))));
    }

    #[test]
    fn test_schema_accepts_document() {
        let schema = write_temp(r#"{"type": "array"}"#);
        let data = write_temp(r#"[{"id": "a", "label": "A", "brand": "Nike"}]"#);

        let catalog = load_catalog_file_with_schema(data.path(), schema.path()).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
