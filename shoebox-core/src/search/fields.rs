use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::models::ItemRecord;

/// A searchable path into an item record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Label,
    Brand,
    Type,
    Model,
    Color,
    Material,
    Line,
    Last,
    Size,
    Country,
    Sole,
    UseCase,
    Notes,
    Tags,
    CollectionRole,
    StyleAxis,
    Season,
    Weather,
    FillsGap,
}

impl SearchField {
    pub const ALL: [SearchField; 19] = [
        SearchField::Label,
        SearchField::Brand,
        SearchField::Type,
        SearchField::Model,
        SearchField::Color,
        SearchField::Material,
        SearchField::Line,
        SearchField::Last,
        SearchField::Size,
        SearchField::Country,
        SearchField::Sole,
        SearchField::UseCase,
        SearchField::Notes,
        SearchField::Tags,
        SearchField::CollectionRole,
        SearchField::StyleAxis,
        SearchField::Season,
        SearchField::Weather,
        SearchField::FillsGap,
    ];

    /// Key path as written in the data file
    pub fn path(&self) -> &'static str {
        match self {
            SearchField::Label => "label",
            SearchField::Brand => "brand",
            SearchField::Type => "type",
            SearchField::Model => "model",
            SearchField::Color => "color",
            SearchField::Material => "material",
            SearchField::Line => "line",
            SearchField::Last => "last",
            SearchField::Size => "size",
            SearchField::Country => "country",
            SearchField::Sole => "sole",
            SearchField::UseCase => "useCase",
            SearchField::Notes => "notes",
            SearchField::Tags => "tags",
            SearchField::CollectionRole => "role.collectionRole",
            SearchField::StyleAxis => "role.styleAxis",
            SearchField::Season => "rotation.season",
            SearchField::Weather => "rotation.weather",
            SearchField::FillsGap => "comparison.fillsGap",
        }
    }

    /// Every value this field holds for an item; list fields yield one
    /// value per element
    pub fn values<'a>(&self, item: &'a ItemRecord) -> Vec<&'a str> {
        let single = |value: &'a Option<String>| value.as_deref().into_iter().collect::<Vec<_>>();
        let list = |values: &'a [String]| values.iter().map(String::as_str).collect::<Vec<_>>();

        match self {
            SearchField::Label => vec![item.label.as_str()],
            SearchField::Brand => single(&item.brand),
            SearchField::Type => single(&item.kind),
            SearchField::Model => single(&item.model),
            SearchField::Color => single(&item.color),
            SearchField::Material => single(&item.material),
            SearchField::Line => single(&item.line),
            SearchField::Last => single(&item.last),
            SearchField::Size => single(&item.size),
            SearchField::Country => single(&item.country),
            SearchField::Sole => single(&item.sole),
            SearchField::UseCase => single(&item.use_case),
            SearchField::Notes => single(&item.notes),
            SearchField::Tags => list(&item.tags),
            SearchField::CollectionRole => item.collection_role().into_iter().collect(),
            SearchField::StyleAxis => list(item.style_axis()),
            SearchField::Season => list(item.seasons()),
            SearchField::Weather => list(item.weather()),
            SearchField::FillsGap => item.fills_gap().into_iter().collect(),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for SearchField {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let path = s.trim();
        SearchField::ALL
            .iter()
            .find(|field| field.path() == path)
            .copied()
            .ok_or_else(|| SearchError::UnknownField(path.to_string()))
    }
}

/// A field together with its relative weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedField {
    pub field: SearchField,
    pub weight: f64,
}

/// Which fields the search index covers and how much each counts
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    fields: Vec<WeightedField>,
}

impl FieldSpec {
    /// Equal weights for every listed field
    pub fn new(fields: impl IntoIterator<Item = SearchField>) -> Result<Self, SearchError> {
        Self::weighted(fields.into_iter().map(|field| (field, 1.0)))
    }

    pub fn weighted(fields: impl IntoIterator<Item = (SearchField, f64)>) -> Result<Self, SearchError> {
        let fields: Vec<WeightedField> = fields
            .into_iter()
            .map(|(field, weight)| WeightedField { field, weight: weight.max(0.0) })
            .collect();

        if fields.is_empty() {
            return Err(SearchError::EmptyFieldSpec);
        }

        Ok(Self { fields })
    }

    /// Build a spec from dotted key paths such as `role.styleAxis`
    pub fn parse(paths: &[&str]) -> Result<Self, SearchError> {
        let fields = paths
            .iter()
            .map(|path| path.parse::<SearchField>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(fields)
    }

    pub fn fields(&self) -> &[WeightedField] {
        &self.fields
    }

    /// Weights scaled so they sum to one
    pub fn normalized_weights(&self) -> Vec<f64> {
        let total: f64 = self.fields.iter().map(|f| f.weight).sum();
        self.fields
            .iter()
            .map(|f| if total > 0.0 { f.weight / total } else { 0.0 })
            .collect()
    }
}

impl Default for FieldSpec {
    fn default() -> Self {
        Self {
            fields: SearchField::ALL
                .iter()
                .map(|&field| WeightedField { field, weight: 1.0 })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comparison, Role, Rotation};

    #[test]
    fn test_default_spec_covers_all_fields() {
        let spec = FieldSpec::default();
        assert_eq!(spec.fields().len(), 19);
        let weights = spec.normalized_weights();
        assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_paths() {
        let spec = FieldSpec::parse(&["label", "role.styleAxis", "comparison.fillsGap"]).unwrap();
        let fields: Vec<_> = spec.fields().iter().map(|f| f.field).collect();
        assert_eq!(
            fields,
            vec![SearchField::Label, SearchField::StyleAxis, SearchField::FillsGap]
        );
    }

    #[test]
    fn test_parse_unknown_path() {
        assert_eq!(
            FieldSpec::parse(&["label", "role.nickname"]),
            Err(SearchError::UnknownField("role.nickname".to_string()))
        );
        assert_eq!(FieldSpec::parse(&[]), Err(SearchError::EmptyFieldSpec));
    }

    #[test]
    fn test_nested_values() {
        let mut item = ItemRecord::new("a", "Chukka");
        item.tags = vec!["suede".into(), "desert".into()];
        item.rotation = Some(Rotation {
            season: vec!["spring".into()],
            weather: vec![],
        });
        item.role = Some(Role {
            collection_role: Some("weekend".into()),
            style_axis: vec!["casual".into(), "rugged".into()],
        });
        item.comparison = Some(Comparison {
            overlaps_with: vec![],
            fills_gap: Some("dry-weather suede".into()),
        });

        assert_eq!(SearchField::Tags.values(&item), vec!["suede", "desert"]);
        assert_eq!(SearchField::Season.values(&item), vec!["spring"]);
        assert!(SearchField::Weather.values(&item).is_empty());
        assert_eq!(SearchField::CollectionRole.values(&item), vec!["weekend"]);
        assert_eq!(SearchField::StyleAxis.values(&item), vec!["casual", "rugged"]);
        assert_eq!(SearchField::FillsGap.values(&item), vec!["dry-weather suede"]);
        assert!(SearchField::Brand.values(&item).is_empty());
    }
}
