use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::lenient;

/// Collection classifier for items still worn
pub const COLLECTION_ACTIVE: &str = "active";
/// Collection classifier for items sold or retired
pub const COLLECTION_RETIRED: &str = "retired";

/// A single catalog entry as found in the data file
///
/// Only `id` and `label` are required. Scalar fields tolerate numbers and
/// booleans (stored as their string form); list fields tolerate a single
/// scalar in place of an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(deserialize_with = "lenient::string")]
    pub label: String,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub sole: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "purchasePriceRMB", default, deserialize_with = "lenient::opt_number", skip_serializing_if = "Option::is_none")]
    pub purchase_price_rmb: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub orig_currency: Option<String>,
    /// Empty until the catalog store derives it from `status`
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub collection: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ItemRecord {
    /// Minimal record, mostly useful for building fixtures
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            brand: None,
            kind: None,
            model: None,
            color: None,
            material: None,
            line: None,
            last: None,
            size: None,
            country: None,
            sole: None,
            use_case: None,
            notes: None,
            status: None,
            condition: None,
            purchase_price_rmb: None,
            orig_currency: None,
            collection: String::new(),
            tags: Vec::new(),
            rotation: None,
            role: None,
            comparison: None,
            photos: Vec::new(),
            history: Vec::new(),
            extra: HashMap::new(),
        }
    }

    /// Seasons from the rotation sub-record, empty when absent
    pub fn seasons(&self) -> &[String] {
        self.rotation.as_ref().map(|r| r.season.as_slice()).unwrap_or(&[])
    }

    /// Weather conditions from the rotation sub-record, empty when absent
    pub fn weather(&self) -> &[String] {
        self.rotation.as_ref().map(|r| r.weather.as_slice()).unwrap_or(&[])
    }

    pub fn collection_role(&self) -> Option<&str> {
        self.role.as_ref().and_then(|r| r.collection_role.as_deref())
    }

    pub fn style_axis(&self) -> &[String] {
        self.role.as_ref().map(|r| r.style_axis.as_slice()).unwrap_or(&[])
    }

    /// Number of items this one overlaps with (0 when absent)
    pub fn overlap_count(&self) -> usize {
        self.comparison.as_ref().map(|c| c.overlaps_with.len()).unwrap_or(0)
    }

    pub fn fills_gap(&self) -> Option<&str> {
        self.comparison.as_ref().and_then(|c| c.fills_gap.as_deref())
    }

    /// URL of the first photo, if it has one
    pub fn first_photo_url(&self) -> Option<&str> {
        self.photos
            .first()
            .and_then(|p| p.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// When an item gets worn
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub season: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub weather: Vec<String>,
}

/// Where an item sits in the collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub collection_role: Option<String>,
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub style_axis: Vec<String>,
}

/// How an item relates to the rest of the collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Only the length is ever used, so entries are kept verbatim
    #[serde(default, deserialize_with = "lenient::value_list")]
    pub overlaps_with: Vec<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub fills_gap: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A categorical dimension usable as an exact-match filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetDimension {
    Collection,
    Brand,
    Type,
    Tag,
}

impl FacetDimension {
    pub const ALL: [FacetDimension; 4] = [
        FacetDimension::Collection,
        FacetDimension::Brand,
        FacetDimension::Type,
        FacetDimension::Tag,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Collection => "collection",
            FacetDimension::Brand => "brand",
            FacetDimension::Type => "type",
            FacetDimension::Tag => "tag",
        }
    }
}

impl fmt::Display for FacetDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacetDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "collection" => Ok(FacetDimension::Collection),
            "brand" => Ok(FacetDimension::Brand),
            "type" => Ok(FacetDimension::Type),
            "tag" | "tags" => Ok(FacetDimension::Tag),
            other => Err(format!("unknown facet '{}'", other)),
        }
    }
}

/// One facet constraint: either no constraint or an exact value
///
/// Serialized as the plain string value, with `"all"` meaning no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FacetFilter {
    #[default]
    All,
    Only(String),
}

impl FacetFilter {
    pub const ALL_KEYWORD: &'static str = "all";

    pub fn is_all(&self) -> bool {
        matches!(self, FacetFilter::All)
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            FacetFilter::All => None,
            FacetFilter::Only(value) => Some(value),
        }
    }
}

impl From<&str> for FacetFilter {
    fn from(value: &str) -> Self {
        if value.is_empty() || value == Self::ALL_KEYWORD {
            FacetFilter::All
        } else {
            FacetFilter::Only(value.to_string())
        }
    }
}

impl From<String> for FacetFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == Self::ALL_KEYWORD {
            FacetFilter::All
        } else {
            FacetFilter::Only(value)
        }
    }
}

impl From<FacetFilter> for String {
    fn from(filter: FacetFilter) -> Self {
        match filter {
            FacetFilter::All => FacetFilter::ALL_KEYWORD.to_string(),
            FacetFilter::Only(value) => value,
        }
    }
}

impl fmt::Display for FacetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(Self::ALL_KEYWORD))
    }
}

/// Everything the user can narrow the catalog by
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    #[serde(rename = "q")]
    pub query: String,
    pub collection: FacetFilter,
    pub brand: FacetFilter,
    #[serde(rename = "type")]
    pub kind: FacetFilter,
    pub tag: FacetFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn facet(&self, dimension: FacetDimension) -> &FacetFilter {
        match dimension {
            FacetDimension::Collection => &self.collection,
            FacetDimension::Brand => &self.brand,
            FacetDimension::Type => &self.kind,
            FacetDimension::Tag => &self.tag,
        }
    }

    pub fn set_facet(&mut self, dimension: FacetDimension, filter: FacetFilter) {
        match dimension {
            FacetDimension::Collection => self.collection = filter,
            FacetDimension::Brand => self.brand = filter,
            FacetDimension::Type => self.kind = filter,
            FacetDimension::Tag => self.tag = filter,
        }
    }

    /// Builder-style variant of [`FilterState::set_facet`]
    pub fn with_facet(mut self, dimension: FacetDimension, filter: impl Into<FacetFilter>) -> Self {
        self.set_facet(dimension, filter.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Trimmed query, or None when it is blank
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Reset the query and every facet to "all"
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Distinct display values for each filterable dimension
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOptions {
    pub brands: Vec<String>,
    pub types: Vec<String>,
    pub tags: Vec<String>,
}
