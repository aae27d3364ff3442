use clap::Parser;
use shoebox_core::{parse_facet_filters, FacetDimension, FacetFilter, FilterParseError, FilterState, SearchOptions};
use std::path::PathBuf;

/// Shoebox - Browse a personal footwear catalog with facets and fuzzy search
///
/// Examples:
///   # List every item
///   shoebox shoes.json
///
///   # Fuzzy search, best match first
///   shoebox shoes.json -q "chelsea boot"
///
///   # Narrow by facets (AND between facets)
///   shoebox shoes.json --brand Alden --collection active
///
///   # Same, using name=value filters
///   shoebox shoes.json -f brand=Alden -f tag=winter
///
///   # Show one item in full
///   shoebox shoes.json --show c1
///
///   # Browse interactively
///   shoebox shoes.json --interactive
#[derive(Parser, Debug)]
#[command(name = "shoebox")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Facets are combined with AND; each facet holds one value or 'all'\n  \
    - Brand, type and tag match ignoring case; collection matches exactly\n  \
    - A search query reorders the result by relevance, best match first\n  \
    - Explicit --collection/--brand/--type/--tag win over --facet")]
pub struct Cli {
    /// Path to the catalog JSON file (an array of items or {"items": [...]})
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Free-text fuzzy search query
    #[arg(short, long, value_name = "QUERY")]
    pub query: Option<String>,

    /// Filter by collection (active, retired or all)
    #[arg(long, value_name = "VALUE")]
    pub collection: Option<String>,

    /// Filter by brand
    #[arg(long, value_name = "VALUE")]
    pub brand: Option<String>,

    /// Filter by type
    #[arg(long = "type", value_name = "VALUE")]
    pub kind: Option<String>,

    /// Filter by tag
    #[arg(long, value_name = "VALUE")]
    pub tag: Option<String>,

    /// Filter by facet (format: name=value, can be specified multiple times)
    #[arg(short, long = "facet", value_name = "NAME=VALUE")]
    pub facets: Vec<String>,

    /// Show the full detail of one item
    #[arg(long, value_name = "ID")]
    pub show: Option<String>,

    /// List facet options instead of items
    #[arg(long = "facets")]
    pub list_facets: bool,

    /// Print JSON instead of formatted text
    #[arg(long)]
    pub json: bool,

    /// Start an interactive browsing session
    #[arg(short, long)]
    pub interactive: bool,

    /// Validate the catalog file against this JSON Schema first
    #[arg(long, value_name = "SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Fuzzy match threshold: 0.0 requires a perfect match, 1.0 matches anything
    #[arg(long, value_name = "F")]
    pub threshold: Option<f64>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Search options with any command-line overrides applied
    pub fn search_options(&self) -> SearchOptions {
        let mut options = SearchOptions::default();
        if let Some(threshold) = self.threshold {
            options.threshold = threshold;
        }
        options
    }

    /// Initial filter state from --facet values, then the dedicated flags
    pub fn filter_state(&self) -> Result<FilterState, FilterParseError> {
        let mut filters = parse_facet_filters(&self.facets)?;

        let flags = [
            (FacetDimension::Collection, &self.collection),
            (FacetDimension::Brand, &self.brand),
            (FacetDimension::Type, &self.kind),
            (FacetDimension::Tag, &self.tag),
        ];
        for (dimension, value) in flags {
            if let Some(value) = value {
                filters.set_facet(dimension, FacetFilter::from(value.as_str()));
            }
        }

        if let Some(ref query) = self.query {
            filters.query = query.clone();
        }

        Ok(filters)
    }
}
