use shoebox_core::{CatalogError, FilterParseError, SearchError};
use std::io::ErrorKind;
use std::path::Path;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_load_error(error: &anyhow::Error, path: &Path) -> (String, String, String) {
    let Some(catalog_error) = error.downcast_ref::<CatalogError>() else {
        return map_other_error(error);
    };

    match catalog_error {
        CatalogError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The catalog file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        ),
        CatalogError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        CatalogError::Json(_) => (
            "Invalid JSON".to_string(),
            "The catalog file is not valid JSON.".to_string(),
            catalog_error.to_string(),
        ),
        CatalogError::DataShape(_) | CatalogError::Record { .. } => (
            "Unexpected Catalog Format".to_string(),
            "The catalog file does not contain a list of items.".to_string(),
            catalog_error.to_string(),
        ),
        CatalogError::Validation(_) => (
            "Validation Error".to_string(),
            "The catalog has validation errors.".to_string(),
            catalog_error.to_string(),
        ),
        CatalogError::Schema(_) => (
            "Schema Validation Error".to_string(),
            "The catalog does not match the JSON Schema.".to_string(),
            catalog_error.to_string(),
        ),
        CatalogError::Io(_) => (
            "Error Loading File".to_string(),
            "Failed to load catalog file.".to_string(),
            catalog_error.to_string(),
        ),
    }
}

/// Map errors from command-line filters and search options
/// Returns (title, message, details)
pub fn map_other_error(error: &anyhow::Error) -> (String, String, String) {
    if let Some(filter_error) = error.downcast_ref::<FilterParseError>() {
        (
            "Invalid Filter".to_string(),
            "A facet filter could not be understood.".to_string(),
            filter_error.to_string(),
        )
    } else if let Some(search_error) = error.downcast_ref::<SearchError>() {
        (
            "Invalid Search Options".to_string(),
            "The search index could not be configured.".to_string(),
            search_error.to_string(),
        )
    } else {
        (
            "Error".to_string(),
            error.to_string(),
            format!("{:#}", error),
        )
    }
}
