use serde::Serialize;

use crate::models::ItemRecord;

/// Rendered in place of any missing, empty or NaN value
pub const PLACEHOLDER: &str = "—";

/// How many photos the detail gallery shows
pub const GALLERY_LIMIT: usize = 9;

const LIST_SEPARATOR: &str = ", ";
const SUMMARY_SEPARATOR: &str = " • ";
const TITLE_SEPARATOR: &str = " — ";

/// One card in the result grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Last, size and sole; may be empty
    pub caption: String,
    pub thumbnail_url: Option<String>,
}

/// The result grid together with its count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub count: usize,
    pub cards: Vec<CardSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: String,
    pub event: String,
    pub notes: String,
}

/// Everything shown for a single opened item
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub status: String,
    pub use_case: String,
    pub specs: Vec<SpecRow>,
    pub notes: String,
    pub history: Vec<HistoryRow>,
    pub gallery: Vec<String>,
    pub hero: Option<String>,
}

/// Format an optional display value, substituting the placeholder
pub fn display_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn display_number(value: Option<f64>) -> String {
    match value {
        Some(n) if !n.is_nan() => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", n as i64)
            } else {
                n.to_string()
            }
        }
        _ => PLACEHOLDER.to_string(),
    }
}

fn join_present<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_list(values: &[String]) -> String {
    display_value(Some(&values.join(LIST_SEPARATOR)))
}

fn or_placeholder(value: String) -> String {
    if value.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        value
    }
}

/// Project a single item into a grid card
pub fn project_card(item: &ItemRecord) -> CardSummary {
    CardSummary {
        id: item.id.clone(),
        title: display_value(Some(&item.label)),
        subtitle: or_placeholder(join_present(
            [item.brand.as_deref(), item.kind.as_deref(), item.color.as_deref()],
            SUMMARY_SEPARATOR,
        )),
        caption: join_present(
            [item.last.as_deref(), item.size.as_deref(), item.sole.as_deref()],
            SUMMARY_SEPARATOR,
        ),
        thumbnail_url: item.first_photo_url().map(str::to_string),
    }
}

/// Project a result list into the grid, keeping its order
pub fn project_cards(items: &[&ItemRecord]) -> ResultSummary {
    ResultSummary {
        count: items.len(),
        cards: items.iter().map(|item| project_card(item)).collect(),
    }
}

/// The specification table: fixed labels in fixed order
pub fn spec_rows(item: &ItemRecord) -> Vec<SpecRow> {
    let row = |label: &'static str, value: String| SpecRow { label, value };

    vec![
        row("Brand", display_value(item.brand.as_deref())),
        row("Type", display_value(item.kind.as_deref())),
        row("Model", display_value(item.model.as_deref())),
        row("Color", display_value(item.color.as_deref())),
        row("Material", display_value(item.material.as_deref())),
        row("Line", display_value(item.line.as_deref())),
        row("Last", display_value(item.last.as_deref())),
        row("Size", display_value(item.size.as_deref())),
        row("Country", display_value(item.country.as_deref())),
        row("Sole", display_value(item.sole.as_deref())),
        row("Purchase (RMB)", display_number(item.purchase_price_rmb)),
        row("Orig. currency", display_value(item.orig_currency.as_deref())),
        row("Condition", display_value(item.condition.as_deref())),
        row("Collection", display_value(Some(&item.collection))),
        row("Tags", join_list(&item.tags)),
        row("Season", join_list(item.seasons())),
        row("Weather", join_list(item.weather())),
        row("Role", display_value(item.collection_role())),
        row("Style axis", join_list(item.style_axis())),
        row("Overlaps", item.overlap_count().to_string()),
        row("Fills gap", display_value(item.fills_gap())),
    ]
}

/// Project a single item into its detail view
pub fn project_detail(item: &ItemRecord) -> DetailView {
    let gallery: Vec<String> = item
        .photos
        .iter()
        .take(GALLERY_LIMIT)
        .filter_map(|photo| photo.url.clone())
        .collect();

    DetailView {
        id: item.id.clone(),
        title: display_value(Some(&item.label)),
        subtitle: or_placeholder(join_present(
            [item.brand.as_deref(), item.model.as_deref()],
            TITLE_SEPARATOR,
        )),
        status: display_value(item.status.as_deref()),
        use_case: display_value(item.use_case.as_deref()),
        specs: spec_rows(item),
        notes: display_value(item.notes.as_deref()),
        history: item
            .history
            .iter()
            .map(|entry| HistoryRow {
                date: display_value(entry.date.as_deref()),
                event: display_value(entry.event.as_deref()),
                notes: display_value(entry.notes.as_deref()),
            })
            .collect(),
        gallery,
        hero: item.first_photo_url().map(str::to_string),
    }
}
