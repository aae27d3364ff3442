pub mod formatting;
pub mod updates;

pub use updates::{render_facets, render_results, render_view, show_error};
