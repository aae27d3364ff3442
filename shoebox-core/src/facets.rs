use crate::collation::sort_display;
use crate::models::{FacetDimension, FacetOptions, ItemRecord, COLLECTION_ACTIVE, COLLECTION_RETIRED};
use std::collections::HashSet;

/// Derive the selectable values for brand, type and tag
///
/// Values keep their original case for display; empty values are dropped
/// and duplicates removed. The result does not depend on record order.
pub fn build_facets(items: &[ItemRecord]) -> FacetOptions {
    FacetOptions {
        brands: distinct_sorted(items.iter().filter_map(|item| item.brand.as_deref())),
        types: distinct_sorted(items.iter().filter_map(|item| item.kind.as_deref())),
        tags: distinct_sorted(items.iter().flat_map(|item| item.tags.iter().map(String::as_str))),
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct: Vec<String> = values
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect();

    sort_display(&mut distinct);
    distinct
}

impl FacetOptions {
    /// Option values for one dimension (collection has a fixed pair)
    pub fn options(&self, dimension: FacetDimension) -> Vec<&str> {
        match dimension {
            FacetDimension::Collection => vec![COLLECTION_ACTIVE, COLLECTION_RETIRED],
            FacetDimension::Brand => self.brands.iter().map(String::as_str).collect(),
            FacetDimension::Type => self.types.iter().map(String::as_str).collect(),
            FacetDimension::Tag => self.tags.iter().map(String::as_str).collect(),
        }
    }
}
