use shoebox_core::project_detail;

use crate::state::{AppState, UiState};

/// Open an item's detail; unknown ids leave everything as it was
pub fn on_open_item(state: &AppState, ui: &mut UiState, id: &str) {
    match state.get_item(id) {
        Some(item) => {
            ui.open(item.id.clone(), item.first_photo_url().is_some());
            tracing::debug!(id, "item opened");
        }
        None => tracing::warn!(id, "ignoring request to open unknown item"),
    }
}

pub fn on_close_item(ui: &mut UiState) {
    ui.close();
}

/// Make a gallery photo of the open item the hero
pub fn on_select_photo(state: &AppState, ui: &mut UiState, index: usize) {
    let Some(item) = ui.open_item.as_deref().and_then(|id| state.get_item(id)) else {
        tracing::warn!(index, "ignoring photo selection with no item open");
        return;
    };

    let gallery_len = project_detail(item).gallery.len();
    if index >= gallery_len {
        tracing::warn!(index, gallery_len, "ignoring out-of-range photo selection");
        return;
    }

    ui.hero_photo = Some(index);
}
