use crate::collation::{eq_ignore_case, fold_case};
use crate::error::FilterParseError;
use crate::models::{FacetDimension, FacetFilter, FilterState, ItemRecord};
use crate::search::Searcher;
use std::collections::HashMap;

/// Parse facet filter strings in the format "name=value" into a filter state
/// A later value for the same facet replaces an earlier one
pub fn parse_facet_filters(facet_strings: &[String]) -> Result<FilterState, FilterParseError> {
    let mut state = FilterState::new();

    for facet_str in facet_strings {
        let (key, value) = facet_str
            .split_once('=')
            .ok_or_else(|| FilterParseError::Format(facet_str.clone()))?;

        let dimension: FacetDimension = key
            .parse()
            .map_err(|_| FilterParseError::UnknownFacet(key.trim().to_string()))?;

        state.set_facet(dimension, FacetFilter::from(value.trim()));
    }

    Ok(state)
}

/// Apply filters and text search to the catalog
///
/// Facet constraints are applied in catalog order. With an active query the
/// surviving items are reordered by search relevance, best match first, and
/// anything the searcher did not return is dropped.
pub fn apply_filters<'a>(
    items: &'a [ItemRecord],
    filters: &FilterState,
    searcher: &dyn Searcher,
) -> Vec<&'a ItemRecord> {
    let faceted: Vec<&ItemRecord> = items
        .iter()
        .filter(|item| matches_filters(item, filters))
        .collect();

    let Some(query) = filters.active_query() else {
        return faceted;
    };

    let by_id: HashMap<&str, &ItemRecord> = faceted
        .iter()
        .map(|item| (item.id.as_str(), *item))
        .collect();

    let results: Vec<&ItemRecord> = searcher
        .search(query)
        .iter()
        .filter_map(|hit| by_id.get(hit.id.as_str()).copied())
        .collect();

    tracing::debug!(
        query,
        faceted = faceted.len(),
        results = results.len(),
        "filters applied"
    );

    results
}

/// Check if an item satisfies every facet constraint
/// AND logic between facets; the text query is not considered here
pub fn matches_filters(item: &ItemRecord, filters: &FilterState) -> bool {
    if let Some(collection) = filters.collection.value() {
        if item.collection != collection {
            return false;
        }
    }

    if let Some(brand) = filters.brand.value() {
        if !matches_optional(item.brand.as_deref(), brand) {
            return false;
        }
    }

    if let Some(kind) = filters.kind.value() {
        if !matches_optional(item.kind.as_deref(), kind) {
            return false;
        }
    }

    if let Some(tag) = filters.tag.value() {
        let wanted = fold_case(tag);
        if !item.tags.iter().any(|t| fold_case(t) == wanted) {
            return false;
        }
    }

    true
}

/// A missing value never matches a concrete filter
fn matches_optional(value: Option<&str>, wanted: &str) -> bool {
    value.is_some_and(|v| eq_ignore_case(v, wanted))
}

/// Check if any facet or query is active
pub fn has_filters(filters: &FilterState) -> bool {
    filters.active_query().is_some()
        || FacetDimension::ALL
            .iter()
            .any(|dimension| !filters.facet(*dimension).is_all())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchHit, SearchIndex};

    /// Returns a fixed ranking regardless of the query
    struct FixedRanking(Vec<&'static str>);

    impl Searcher for FixedRanking {
        fn search(&self, query: &str) -> Vec<SearchHit> {
            if query.trim().is_empty() {
                return Vec::new();
            }
            self.0
                .iter()
                .enumerate()
                .map(|(rank, id)| SearchHit {
                    id: id.to_string(),
                    position: rank,
                    score: rank as f64 / 10.0,
                })
                .collect()
        }
    }

    fn item(id: &str, brand: Option<&str>, kind: Option<&str>, tags: &[&str], collection: &str) -> ItemRecord {
        let mut item = ItemRecord::new(id, format!("Item {}", id));
        item.brand = brand.map(str::to_string);
        item.kind = kind.map(str::to_string);
        item.tags = tags.iter().map(|t| t.to_string()).collect();
        item.collection = collection.to_string();
        item
    }

    fn catalog() -> Vec<ItemRecord> {
        vec![
            item("x", Some("Nike"), Some("Runner"), &["trail"], "active"),
            item("y", Some("Nike"), Some("Runner"), &["road"], "retired"),
            item("z", Some("Adidas"), Some("Sneaker"), &["Trail"], "active"),
            item("w", None, None, &[], "active"),
        ]
    }

    fn ids(items: &[&ItemRecord]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_no_filters_keeps_catalog_order() {
        let items = catalog();
        let index = SearchIndex::new(&items);
        let result = apply_filters(&items, &FilterState::new(), &index);
        assert_eq!(ids(&result), vec!["x", "y", "z", "w"]);
    }

    #[test]
    fn test_collection_is_exact() {
        let items = catalog();
        let index = SearchIndex::new(&items);
        let state = FilterState::new().with_facet(FacetDimension::Collection, "retired");
        assert_eq!(ids(&apply_filters(&items, &state, &index)), vec!["y"]);

        let state = FilterState::new().with_facet(FacetDimension::Collection, "Retired");
        assert!(apply_filters(&items, &state, &index).is_empty());
    }

    #[test]
    fn test_brand_and_type_ignore_case() {
        let items = catalog();
        let index = SearchIndex::new(&items);

        let state = FilterState::new().with_facet(FacetDimension::Brand, "nIKE");
        assert_eq!(ids(&apply_filters(&items, &state, &index)), vec!["x", "y"]);

        let state = FilterState::new().with_facet(FacetDimension::Type, "sneaker");
        assert_eq!(ids(&apply_filters(&items, &state, &index)), vec!["z"]);
    }

    #[test]
    fn test_missing_brand_never_matches() {
        let items = catalog();
        let w = &items[3];
        let state = FilterState::new().with_facet(FacetDimension::Brand, "Nike");
        assert!(!matches_filters(w, &state));
        assert!(matches_filters(w, &FilterState::new()));
    }

    #[test]
    fn test_tag_membership_ignores_case() {
        let items = catalog();
        let index = SearchIndex::new(&items);
        let state = FilterState::new().with_facet(FacetDimension::Tag, "trail");
        assert_eq!(ids(&apply_filters(&items, &state, &index)), vec!["x", "z"]);
    }

    #[test]
    fn test_query_orders_by_relevance() {
        let items = catalog();
        let searcher = FixedRanking(vec!["z", "w", "x"]);
        let state = FilterState::new().with_query("anything");
        assert_eq!(ids(&apply_filters(&items, &state, &searcher)), vec!["z", "w", "x"]);
    }

    #[test]
    fn test_query_intersects_with_facets() {
        let items = catalog();
        let searcher = FixedRanking(vec!["z", "y", "x"]);
        let state = FilterState::new()
            .with_query("anything")
            .with_facet(FacetDimension::Brand, "Nike");
        assert_eq!(ids(&apply_filters(&items, &state, &searcher)), vec!["y", "x"]);
    }

    #[test]
    fn test_blank_query_is_no_filter() {
        let items = catalog();
        let searcher = FixedRanking(vec!["z"]);
        let state = FilterState::new().with_query("   ");
        assert_eq!(ids(&apply_filters(&items, &state, &searcher)).len(), 4);
    }

    #[test]
    fn test_unknown_hit_ids_are_ignored() {
        let items = catalog();
        let searcher = FixedRanking(vec!["ghost", "x"]);
        let state = FilterState::new().with_query("q");
        assert_eq!(ids(&apply_filters(&items, &state, &searcher)), vec!["x"]);
    }

    #[test]
    fn test_parse_facet_filters() {
        let state = parse_facet_filters(&[
            "brand=Nike".to_string(),
            " tag = trail ".to_string(),
            "type=all".to_string(),
        ])
        .unwrap();

        assert_eq!(state.brand, FacetFilter::Only("Nike".to_string()));
        assert_eq!(state.tag, FacetFilter::Only("trail".to_string()));
        assert!(state.kind.is_all());
    }

    #[test]
    fn test_parse_facet_filter_errors() {
        assert_eq!(
            parse_facet_filters(&["brand".to_string()]),
            Err(FilterParseError::Format("brand".to_string()))
        );
        assert_eq!(
            parse_facet_filters(&["color=red".to_string()]),
            Err(FilterParseError::UnknownFacet("color".to_string()))
        );
    }

    #[test]
    fn test_has_filters() {
        assert!(!has_filters(&FilterState::new()));
        assert!(!has_filters(&FilterState::new().with_query("  ")));
        assert!(has_filters(&FilterState::new().with_query("nike")));
        assert!(has_filters(&FilterState::new().with_facet(FacetDimension::Tag, "road")));
    }
}
