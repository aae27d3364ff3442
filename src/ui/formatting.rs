use colored::Colorize;
use shoebox_core::collation::eq_ignore_case;
use shoebox_core::{
    CardSummary, DetailView, FacetDimension, FacetFilter, FacetOptions, FilterState, ResultSummary,
};

/// Format a single result card, numbered from 1
pub fn format_card(card: &CardSummary, number: usize) -> String {
    let mut lines = vec![
        format!("{:>3}. {}  {}", number, card.title.bold(), format!("[{}]", card.id).dimmed()),
        format!("     {}", card.subtitle),
    ];
    if !card.caption.is_empty() {
        lines.push(format!("     {}", card.caption.dimmed()));
    }
    lines.join("\n")
}

/// Format the result grid with its count line
pub fn format_results(summary: &ResultSummary) -> String {
    let noun = if summary.count == 1 { "item" } else { "items" };
    let mut out = format!("{} {}\n", summary.count.to_string().bold(), noun);

    if summary.cards.is_empty() {
        out.push_str(&format!("\n{}\n", "No items match the current filters.".italic()));
        return out;
    }

    for (i, card) in summary.cards.iter().enumerate() {
        out.push('\n');
        out.push_str(&format_card(card, i + 1));
        out.push('\n');
    }
    out
}

/// Format the detail view; gallery photos are numbered from 1 and the hero is starred
pub fn format_detail(view: &DetailView, hero: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}  {}\n", view.title.bold(), format!("[{}]", view.id).dimmed()));
    out.push_str(&format!("{}\n", view.subtitle));
    out.push_str(&format!("Status: {}   Use: {}\n\n", view.status, view.use_case));

    let width = view.specs.iter().map(|row| row.label.len()).max().unwrap_or(0);
    for row in &view.specs {
        let label = format!("{:<width$}", row.label, width = width);
        out.push_str(&format!("  {}  {}\n", label.cyan(), row.value));
    }

    out.push_str(&format!("\n{}\n{}\n", "Notes".bold(), view.notes));

    if !view.history.is_empty() {
        out.push_str(&format!("\n{}\n", "History".bold()));
        for entry in &view.history {
            out.push_str(&format!("  • {}  {}  {}\n", entry.date, entry.event, entry.notes.dimmed()));
        }
    }

    if !view.gallery.is_empty() {
        out.push_str(&format!("\n{}\n", "Photos".bold()));
        for (i, url) in view.gallery.iter().enumerate() {
            if Some(i) == hero {
                out.push_str(&format!("  {} {}\n", "*".green(), url.green()));
            } else {
                out.push_str(&format!("  {} {}\n", i + 1, url));
            }
        }
    }

    out
}

fn dimension_label(dimension: FacetDimension) -> &'static str {
    match dimension {
        FacetDimension::Collection => "Collection",
        FacetDimension::Brand => "Brand",
        FacetDimension::Type => "Type",
        FacetDimension::Tag => "Tag",
    }
}

/// Format every facet with its options, highlighting the selection
pub fn format_facets(options: &FacetOptions, filters: &FilterState) -> String {
    FacetDimension::ALL
        .iter()
        .map(|&dimension| {
            let selected = filters.facet(dimension);
            let mut values = vec![if selected.is_all() {
                FacetFilter::ALL_KEYWORD.green().bold().to_string()
            } else {
                FacetFilter::ALL_KEYWORD.to_string()
            }];

            values.extend(options.options(dimension).into_iter().map(|value| {
                match selected.value() {
                    Some(current) if eq_ignore_case(current, value) => {
                        value.green().bold().to_string()
                    }
                    _ => value.to_string(),
                }
            }));

            format!("{}: {}", dimension_label(dimension).cyan(), values.join(" | "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summarize active filters on one line; empty when nothing is active
pub fn format_active_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();

    if let Some(query) = filters.active_query() {
        parts.push(format!("Search: \"{}\"", query));
    }
    for &dimension in FacetDimension::ALL.iter() {
        if let Some(value) = filters.facet(dimension).value() {
            parts.push(format!("{}: {}", dimension_label(dimension), value));
        }
    }

    parts.join("; ")
}

/// Format an error triple for the terminal
pub fn format_error(title: &str, message: &str, details: &str) -> String {
    let mut out = format!("{} {}", format!("{}:", title).red().bold(), message);
    if !details.is_empty() && details != message {
        out.push_str("\n\n");
        out.push_str(details);
    }
    out
}
