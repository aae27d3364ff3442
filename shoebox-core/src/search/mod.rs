//! Ranked fuzzy search over item records.
//!
//! [`SearchIndex`] folds every indexed field value once at build time and
//! scores a query against each value with a Bitap matcher. A record is a
//! hit when any of its values matches; its score combines the matching
//! values weighted by field weight and field-length norm. Lower is better:
//! `0.0` is an exact match and `1.0` no match at all.
//!
//! The filter engine only depends on the [`Searcher`] trait, so the
//! matching strategy can be swapped without touching it.

mod bitap;
mod fields;
mod norm;

pub use bitap::{BitapPattern, MatchResult, MAX_BITS};
pub use fields::{FieldSpec, SearchField, WeightedField};
pub use norm::field_norm;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::models::ItemRecord;

/// Default match-quality cutoff; values scoring worse are not matches
pub const DEFAULT_THRESHOLD: f64 = 0.35;
/// Default number of characters over which a match location fades out
pub const DEFAULT_DISTANCE: usize = 100;

/// Tuning knobs for fuzzy matching
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// 0.0 requires a perfect match, 1.0 matches anything
    pub threshold: f64,
    /// Where in a value a match is expected to start
    pub location: usize,
    /// How far from `location` a match may drift before it stops counting
    pub distance: usize,
    /// Score matches on errors alone, wherever they occur
    pub ignore_location: bool,
    /// Treat long and short values alike
    pub ignore_field_norm: bool,
    pub field_norm_weight: f64,
    pub case_sensitive: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            location: 0,
            distance: DEFAULT_DISTANCE,
            ignore_location: false,
            ignore_field_norm: false,
            field_norm_weight: 1.0,
            case_sensitive: false,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// One ranked match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    /// Position of the record in the indexed item list
    pub position: usize,
    pub score: f64,
}

/// Anything able to rank items against a free-text query
pub trait Searcher {
    /// Hits ordered best first; a blank query yields no hits
    fn search(&self, query: &str) -> Vec<SearchHit>;
}

#[derive(Debug, Clone)]
struct IndexedValue {
    field: usize,
    text: String,
    norm: f64,
}

#[derive(Debug, Clone)]
struct IndexedRecord {
    id: String,
    position: usize,
    values: Vec<IndexedValue>,
}

/// Immutable fuzzy index over a fixed item list
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<IndexedRecord>,
    spec: FieldSpec,
    weights: Vec<f64>,
    options: SearchOptions,
}

impl SearchIndex {
    /// Index every item with the default fields and options
    pub fn new(items: &[ItemRecord]) -> Self {
        Self::index(items, FieldSpec::default(), SearchOptions::default())
    }

    pub fn build(items: &[ItemRecord], spec: &FieldSpec, options: SearchOptions) -> Result<Self, SearchError> {
        options.validate()?;
        Ok(Self::index(items, spec.clone(), options))
    }

    fn index(items: &[ItemRecord], spec: FieldSpec, options: SearchOptions) -> Self {
        let records = items
            .iter()
            .enumerate()
            .map(|(position, item)| IndexedRecord {
                id: item.id.clone(),
                position,
                values: index_values(item, &spec, &options),
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            records = records.len(),
            fields = spec.fields().len(),
            threshold = options.threshold,
            "search index built"
        );

        Self {
            records,
            weights: spec.normalized_weights(),
            spec,
            options,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn field_spec(&self) -> &FieldSpec {
        &self.spec
    }

    fn score_record(&self, record: &IndexedRecord, pattern: &BitapPattern) -> Option<f64> {
        let mut matched = false;
        let mut total = 1.0;

        for value in &record.values {
            let result = pattern.search_in(&value.text, &self.options);
            if !result.is_match {
                continue;
            }
            matched = true;

            let weight = self.weights[value.field];
            let base = if result.score == 0.0 && weight > 0.0 {
                f64::EPSILON
            } else {
                result.score
            };
            let norm = if self.options.ignore_field_norm { 1.0 } else { value.norm };
            total *= base.powf(weight * norm);
        }

        matched.then_some(total)
    }
}

fn index_values(item: &ItemRecord, spec: &FieldSpec, options: &SearchOptions) -> Vec<IndexedValue> {
    let mut values = Vec::new();
    for (field_idx, weighted) in spec.fields().iter().enumerate() {
        for value in weighted.field.values(item) {
            if value.trim().is_empty() {
                continue;
            }
            values.push(IndexedValue {
                field: field_idx,
                text: if options.case_sensitive {
                    value.to_string()
                } else {
                    value.to_lowercase()
                },
                norm: field_norm(value, options.field_norm_weight),
            });
        }
    }
    values
}

impl Searcher for SearchIndex {
    fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let pattern = BitapPattern::new(query, self.options.case_sensitive);
        let mut hits: Vec<SearchHit> = self
            .records
            .iter()
            .filter_map(|record| {
                self.score_record(record, &pattern).map(|score| SearchHit {
                    id: record.id.clone(),
                    position: record.position,
                    score,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.position.cmp(&b.position)));

        tracing::debug!(query, hits = hits.len(), "search");
        hits
    }
}
