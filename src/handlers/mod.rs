pub mod file_handlers;
pub mod filter_handlers;
pub mod item_handlers;

pub use file_handlers::on_reload;
pub use filter_handlers::{on_clear_all, on_facet_changed, on_query_changed};
pub use item_handlers::{on_close_item, on_open_item, on_select_photo};

use shoebox_core::{FacetDimension, FacetFilter};

use crate::state::{AppState, UiState};

/// A user interaction that changes what is shown
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    QueryChanged(String),
    FacetChanged(FacetDimension, FacetFilter),
    ClearAll,
    OpenItem(String),
    CloseItem,
    SelectPhoto(usize),
}

/// Owns all browsing state and routes events to their handlers
#[derive(Debug)]
pub struct Controller {
    pub state: AppState,
    pub ui: UiState,
}

impl Controller {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            ui: UiState::new(),
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::QueryChanged(query) => on_query_changed(&mut self.state, query),
            Event::FacetChanged(dimension, filter) => {
                on_facet_changed(&mut self.state, dimension, filter)
            }
            Event::ClearAll => on_clear_all(&mut self.state),
            Event::OpenItem(id) => on_open_item(&self.state, &mut self.ui, &id),
            Event::CloseItem => on_close_item(&mut self.ui),
            Event::SelectPhoto(index) => on_select_photo(&self.state, &mut self.ui, index),
        }
    }

    pub fn reload(&mut self) -> anyhow::Result<()> {
        on_reload(&mut self.state, &mut self.ui)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::sample_state;

    #[test]
    fn test_dispatch_sequence() {
        let mut controller = Controller::new(sample_state());

        controller.dispatch(Event::FacetChanged(FacetDimension::Brand, FacetFilter::from("nike")));
        assert_eq!(controller.state.visible.len(), 2);

        controller.dispatch(Event::OpenItem("y".to_string()));
        assert_eq!(controller.ui.open_item.as_deref(), Some("y"));

        controller.dispatch(Event::ClearAll);
        assert_eq!(controller.state.visible, vec![0, 1, 2]);
        assert!(controller.ui.is_open());

        controller.dispatch(Event::CloseItem);
        assert!(!controller.ui.is_open());
    }

    #[test]
    fn test_open_unknown_item_leaves_state_unchanged() {
        let mut controller = Controller::new(sample_state());
        controller.dispatch(Event::QueryChanged("samba".to_string()));
        let visible = controller.state.visible.clone();

        controller.dispatch(Event::OpenItem("ghost".to_string()));
        assert_eq!(controller.state.visible, visible);
        assert_eq!(controller.ui, UiState::new());
    }
}
