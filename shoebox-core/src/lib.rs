// Public modules
pub mod catalog;
pub mod collation;
pub mod error;
pub mod facets;
pub mod filtering;
pub mod io;
pub mod models;
pub mod projection;
pub mod schema_validation;
pub mod search;
pub mod validation;

mod lenient;

// Re-export commonly used types for convenience
pub use catalog::{derive_collection, load_catalog, parse_catalog, Catalog};
pub use collation::{compare_display, sort_display};
pub use error::{CatalogError, FilterParseError, SearchError};
pub use facets::build_facets;
pub use filtering::{apply_filters, has_filters, matches_filters, parse_facet_filters};
pub use io::{load_catalog_file, load_catalog_file_with_schema};
pub use models::{
    Comparison, FacetDimension, FacetFilter, FacetOptions, FilterState, HistoryEntry, ItemRecord,
    Photo, Role, Rotation, COLLECTION_ACTIVE, COLLECTION_RETIRED,
};
pub use projection::{
    display_value, project_card, project_cards, project_detail, CardSummary, DetailView,
    HistoryRow, ResultSummary, SpecRow, PLACEHOLDER,
};
pub use schema_validation::validate_against_schema;
pub use search::{FieldSpec, SearchField, SearchHit, SearchIndex, SearchOptions, Searcher};
pub use validation::validate_items;
