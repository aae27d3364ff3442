use crate::state::{AppState, UiState};

/// Reload the catalog from its source, keeping the current filters
/// An open item that no longer exists is closed
pub fn on_reload(state: &mut AppState, ui: &mut UiState) -> anyhow::Result<()> {
    state.reload()?;

    if let Some(id) = ui.open_item.clone() {
        if state.get_item(&id).is_none() {
            tracing::info!(id = %id, "open item disappeared on reload");
            ui.close();
        }
    }

    Ok(())
}
