use serde_json::Value;
use std::collections::HashMap;

use crate::error::{CatalogError, Result};
use crate::models::{ItemRecord, COLLECTION_ACTIVE, COLLECTION_RETIRED};
use crate::validation::validate_items;

/// The normalized, read-only item list for one session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<ItemRecord>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-deserialized records
    ///
    /// Derives missing collections and rejects empty or duplicate ids.
    pub fn from_items(mut items: Vec<ItemRecord>) -> Result<Self> {
        for item in &mut items {
            normalize_collection(item);
        }

        validate_items(&items).map_err(CatalogError::Validation)?;

        let positions = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.id.clone(), position))
            .collect();

        Ok(Self { items, positions })
    }

    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&ItemRecord> {
        self.position(id).map(|position| &self.items[position])
    }

    /// Insertion position of an item
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }
}

/// Build a catalog from a decoded JSON document
///
/// The document is either a bare array of records or an object carrying
/// the array under `items`.
pub fn load_catalog(raw: Value) -> Result<Catalog> {
    let records = match raw {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(records)) => records,
            Some(other) => {
                return Err(CatalogError::DataShape(format!(
                    "an object whose `items` is {}",
                    describe(&other)
                )))
            }
            None => {
                return Err(CatalogError::DataShape(
                    "an object without an `items` field".to_string(),
                ))
            }
        },
        other => return Err(CatalogError::DataShape(describe(&other).to_string())),
    };

    let items = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<ItemRecord>(record)
                .map_err(|source| CatalogError::Record { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    let catalog = Catalog::from_items(items)?;
    tracing::debug!(items = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Parse and load a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let raw: Value = serde_json::from_str(json)?;
    load_catalog(raw)
}

/// Classify an item from its free-text status
///
/// Anything mentioning retiring or selling counts as retired.
pub fn derive_collection(status: Option<&str>) -> &'static str {
    let status = status.unwrap_or_default().to_lowercase();
    if status.contains("retir") || status.contains("sell") {
        COLLECTION_RETIRED
    } else {
        COLLECTION_ACTIVE
    }
}

fn normalize_collection(item: &mut ItemRecord) {
    if item.collection.is_empty() {
        item.collection = derive_collection(item.status.as_deref()).to_string();
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array() {
        let catalog = load_catalog(json!([
            {"id": "a", "label": "A"},
            {"id": "b", "label": "B"}
        ]))
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].id, "b");
    }

    #[test]
    fn test_items_wrapper() {
        let catalog = load_catalog(json!({
            "owner": "someone",
            "items": [{"id": "a", "label": "A"}]
        }))
        .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("a").unwrap().label, "A");
        assert_eq!(catalog.position("a"), Some(0));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_empty_catalog_is_fine() {
        assert!(load_catalog(json!([])).unwrap().is_empty());
        assert!(load_catalog(json!({"items": []})).unwrap().is_empty());
    }

    #[test]
    fn test_data_shape_errors() {
        for raw in [
            json!("shoes"),
            json!(42),
            json!(null),
            json!({"shoes": []}),
            json!({"items": {"id": "a"}}),
        ] {
            let result = load_catalog(raw);
            assert!(matches!(result, Err(CatalogError::DataShape(_))));
        }
    }

    #[test]
    fn test_derived_collection() {
        let catalog = load_catalog(json!([
            {"id": "a", "label": "A", "status": "Sold - retiring"},
            {"id": "b", "label": "B", "status": "In rotation"},
            {"id": "c", "label": "C", "status": "For SELLING"},
            {"id": "d", "label": "D"},
            {"id": "e", "label": "E", "status": "Sold", "collection": "active"},
            {"id": "f", "label": "F", "status": "Retired", "collection": ""}
        ]))
        .unwrap();

        let collections: Vec<_> = catalog.items().iter().map(|i| i.collection.as_str()).collect();
        assert_eq!(
            collections,
            vec!["retired", "active", "retired", "active", "active", "retired"]
        );
    }

    #[test]
    fn test_record_error_reports_index() {
        let result = load_catalog(json!([
            {"id": "a", "label": "A"},
            {"id": "b"}
        ]));

        match result {
            Err(CatalogError::Record { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = load_catalog(json!([
            {"id": "a", "label": "A"},
            {"id": "a", "label": "Again"}
        ]));

        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }

    #[test]
    fn test_parse_catalog_invalid_json() {
        assert!(matches!(parse_catalog("{not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_unknown_fields_are_kept() {
        let catalog = load_catalog(json!([
            {"id": "a", "label": "A", "purchaseDate": "2021-03-01"}
        ]))
        .unwrap();

        assert_eq!(
            catalog.items()[0].extra.get("purchaseDate"),
            Some(&json!("2021-03-01"))
        );
    }
}
