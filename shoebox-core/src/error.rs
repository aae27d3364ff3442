use thiserror::Error;

/// Reasons a catalog could not be built
///
/// Every variant is fatal to initialization: there is no partially loaded
/// catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog data must be an array of items or an object with an `items` array, found {0}")]
    DataShape(String),

    #[error("item #{index} is not a valid record: {source}")]
    Record {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation failed:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("Schema validation failed:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not read catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems configuring a search index
#[derive(Error, Debug, PartialEq)]
pub enum SearchError {
    #[error("unknown search field '{0}'")]
    UnknownField(String),

    #[error("search threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("search field spec is empty")]
    EmptyFieldSpec,
}

/// Problems turning `name=value` strings into a filter state
#[derive(Error, Debug, PartialEq)]
pub enum FilterParseError {
    #[error("invalid facet filter '{0}', expected 'name=value'")]
    Format(String),

    #[error("unknown facet '{0}' (expected collection, brand, type or tag)")]
    UnknownFacet(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
