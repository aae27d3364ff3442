use shoebox_core::{load_catalog_file, load_catalog_file_with_schema, Catalog, CatalogError};
use std::path::{Path, PathBuf};

/// Where the catalog comes from, remembered so it can be reloaded
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSource {
    /// Path to the catalog JSON file
    pub path: PathBuf,
    /// Optional JSON Schema the raw file is checked against first
    pub schema: Option<PathBuf>,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>, schema: Option<PathBuf>) -> Self {
        Self {
            path: path.into(),
            schema,
        }
    }

    /// Read and validate a fresh catalog from disk
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        let catalog = match self.schema {
            Some(ref schema) => load_catalog_file_with_schema(&self.path, schema)?,
            None => load_catalog_file(&self.path)?,
        };

        tracing::info!(
            path = %self.path.display(),
            items = catalog.len(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// File name shown in headers, falling back to the full path
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
