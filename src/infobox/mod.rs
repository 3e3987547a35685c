mod fields;
mod text;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::sheet::PersonRecord;
use fields::{extract_value, RULES};

static INFOBOX: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.infobox").unwrap());
static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").unwrap());
static HEADER_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th").unwrap());
static VALUE_CELL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").unwrap());

/// Infobox data cells either carry no class at all or the `plainlist`
/// class; anything else (images, maps, navigation chrome) is decoration.
fn plain_or_unclassed(el: &ElementRef<'_>) -> bool {
    match el.value().attr("class") {
        None => true,
        Some(_) => el.value().classes().any(|c| c == "plainlist"),
    }
}

fn first_cell<'a>(row: ElementRef<'a>, cell: &Selector) -> Option<ElementRef<'a>> {
    row.select(cell).find(plain_or_unclassed)
}

/// Pull the four biographical fields out of an article's first infobox.
///
/// Absence at any level (no infobox, no matching rows, empty cells) just
/// leaves the corresponding fields unset; extraction itself never fails.
pub fn extract_person(html: &str) -> PersonRecord {
    let doc = Html::parse_document(html);
    let mut record = PersonRecord::default();

    let Some(infobox) = doc.select(&INFOBOX).next() else {
        debug!("no infobox table in document");
        return record;
    };

    for row in infobox.select(&ROW) {
        let Some(header) = first_cell(row, &HEADER_CELL) else {
            continue;
        };
        let Some(value) = first_cell(row, &VALUE_CELL) else {
            continue;
        };
        let raw_header: String = header.text().collect();
        let Some(header_text) = text::clean_text(&raw_header) else {
            continue;
        };

        // The first label contained in the header claims the row; a row
        // seen again later simply overwrites the earlier value.
        for rule in &RULES {
            if !header_text.contains(rule.field.label()) {
                continue;
            }
            if let Some(text) = extract_value(rule.strategy, value) {
                debug!("{}: {}", rule.field.label(), text);
                record.set(rule.field, text);
            }
            break;
        }
    }

    record
}

// ── Tests ──
