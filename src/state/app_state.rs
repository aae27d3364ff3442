use anyhow::Context;
use shoebox_core::*;

use crate::operations::CatalogSource;

/// Application state management - Domain state only
/// Catalog, derived indices, the active filters and what they let through
#[derive(Debug)]
pub struct AppState {
    /// Where the catalog was loaded from; `None` for in-memory catalogs
    pub source: Option<CatalogSource>,
    pub catalog: Catalog,
    /// Facet options derived from the catalog at load time
    pub facets: FacetOptions,
    pub index: SearchIndex,
    /// Active filters
    pub filters: FilterState,
    /// Catalog positions of the visible items, in display order
    pub visible: Vec<usize>,
}

impl AppState {
    /// Build state over an already loaded catalog, showing everything
    pub fn from_catalog(catalog: Catalog, options: SearchOptions) -> anyhow::Result<Self> {
        let index = SearchIndex::build(catalog.items(), &FieldSpec::default(), options)
            .context("Failed to build search index")?;
        let facets = build_facets(catalog.items());

        let mut state = Self {
            source: None,
            visible: Vec::new(),
            catalog,
            facets,
            index,
            filters: FilterState::new(),
        };
        state.refresh();
        Ok(state)
    }

    /// Load the catalog from disk and build state over it
    pub fn load(source: CatalogSource, options: SearchOptions) -> anyhow::Result<Self> {
        let catalog = source.load()?;
        let mut state = Self::from_catalog(catalog, options)?;
        state.source = Some(source);
        Ok(state)
    }

    /// Re-read the catalog source and rebuild both indices
    /// Filters survive the reload; the result is recomputed against them
    pub fn reload(&mut self) -> anyhow::Result<()> {
        let source = self
            .source
            .as_ref()
            .context("No catalog file to reload from")?;
        let catalog = source.load()?;
        let index = SearchIndex::build(catalog.items(), self.index.field_spec(), *self.index.options())
            .context("Failed to build search index")?;

        self.facets = build_facets(catalog.items());
        self.index = index;
        self.catalog = catalog;
        self.refresh();
        Ok(())
    }

    /// Replace the whole filter state and recompute
    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refresh();
    }

    /// Recompute the visible result from the catalog and current filters
    pub fn refresh(&mut self) {
        let visible: Vec<usize> = apply_filters(self.catalog.items(), &self.filters, &self.index)
            .into_iter()
            .filter_map(|item| self.catalog.position(&item.id))
            .collect();

        tracing::debug!(
            visible = visible.len(),
            total = self.catalog.len(),
            "result recomputed"
        );
        self.visible = visible;
    }

    /// Items currently shown, in display order
    pub fn visible_items(&self) -> Vec<&ItemRecord> {
        self.visible
            .iter()
            .filter_map(|&position| self.catalog.items().get(position))
            .collect()
    }

    /// Get a reference to an item by id
    pub fn get_item(&self, id: &str) -> Option<&ItemRecord> {
        self.catalog.get(id)
    }

    /// Header line naming the loaded file
    pub fn get_title(&self) -> String {
        let file_name = self
            .source
            .as_ref()
            .map(CatalogSource::display_name)
            .unwrap_or_else(|| "Untitled".to_string());

        format!("Shoebox - {}", file_name)
    }
}
