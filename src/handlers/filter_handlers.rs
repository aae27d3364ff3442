use shoebox_core::{FacetDimension, FacetFilter};

use crate::state::AppState;

/// Replace the text query and recompute
pub fn on_query_changed(state: &mut AppState, query: String) {
    tracing::debug!(query = %query, "query changed");
    state.filters.query = query;
    state.refresh();
}

/// Replace one facet selection and recompute
pub fn on_facet_changed(state: &mut AppState, dimension: FacetDimension, filter: FacetFilter) {
    tracing::debug!(%dimension, %filter, "facet changed");
    state.filters.set_facet(dimension, filter);
    state.refresh();
}

/// Reset the query and every facet, tag included
pub fn on_clear_all(state: &mut AppState) {
    state.filters.clear();
    state.refresh();
}
