use shoebox_core::{project_cards, project_detail};
use std::io::{self, Write};

use crate::handlers::Controller;
use crate::state::AppState;
use crate::ui::formatting::{
    format_active_filters, format_detail, format_error, format_facets, format_results,
};

/// Render the visible result, preceded by the active filters
pub fn render_results<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    let active = format_active_filters(&state.filters);
    if !active.is_empty() {
        writeln!(out, "{}", active)?;
    }
    write!(out, "{}", format_results(&project_cards(&state.visible_items())))
}

/// Render the open item, or the result list when nothing is open
pub fn render_view<W: Write>(out: &mut W, controller: &Controller) -> io::Result<()> {
    let open = controller
        .ui
        .open_item
        .as_deref()
        .and_then(|id| controller.state.get_item(id));

    match open {
        Some(item) => write!(out, "{}", format_detail(&project_detail(item), controller.ui.hero_photo)),
        None => render_results(out, &controller.state),
    }
}

pub fn render_facets<W: Write>(out: &mut W, state: &AppState) -> io::Result<()> {
    writeln!(out, "{}", format_facets(&state.facets, &state.filters))
}

pub fn show_error<W: Write>(out: &mut W, title: &str, message: &str, details: &str) -> io::Result<()> {
    writeln!(out, "{}", format_error(title, message, details))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::Event;
    use crate::state::test_support::sample_state;

    fn render(controller: &Controller) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        render_view(&mut buf, controller).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_render_list_then_detail() {
        let mut controller = Controller::new(sample_state());
        let text = render(&controller);
        assert!(text.starts_with("3 items"));
        assert!(text.contains("Pegasus"));

        controller.dispatch(Event::OpenItem("z".to_string()));
        let text = render(&controller);
        assert!(text.starts_with("Samba  [z]"));
        assert!(text.contains("* photos/z1.jpg"));
    }

    #[test]
    fn test_render_shows_active_filters() {
        let mut controller = Controller::new(sample_state());
        controller.dispatch(Event::QueryChanged("samba".to_string()));
        let text = render(&controller);
        assert!(text.starts_with("Search: \"samba\"\n1 item\n"));
    }
}
