use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use super::text::clean_text;
use crate::sheet::Field;

static DATE_SPAN: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.nowrap").unwrap());
static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());
static PLACE_LIST: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul").unwrap());

/// How the value cell of a matched row is read.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Link texts inside the first `span.nowrap`, joined with spaces.
    DateSpan,
    /// Text of the first `ul`, or of the whole cell when there is none.
    PlaceText,
}

pub struct FieldRule {
    pub field: Field,
    pub strategy: Strategy,
}

/// Row labels in match order; the first label contained in a row's header
/// text claims that row.
pub const RULES: [FieldRule; 4] = [
    FieldRule {
        field: Field::BirthDate,
        strategy: Strategy::DateSpan,
    },
    FieldRule {
        field: Field::BirthPlace,
        strategy: Strategy::PlaceText,
    },
    FieldRule {
        field: Field::DeathDate,
        strategy: Strategy::DateSpan,
    },
    FieldRule {
        field: Field::DeathPlace,
        strategy: Strategy::PlaceText,
    },
];

pub fn extract_value(strategy: Strategy, cell: ElementRef<'_>) -> Option<String> {
    match strategy {
        Strategy::DateSpan => date_from_span(cell),
        Strategy::PlaceText => place_from_cell(cell),
    }
}

/// Dates sit in a `span.nowrap` as a run of links (day-month article, year
/// article), often with citation links appended. Citation links render as
/// `[N]`, so anything starting with `[` is dropped.
fn date_from_span(cell: ElementRef<'_>) -> Option<String> {
    let span = cell.select(&DATE_SPAN).next()?;
    let parts: Vec<String> = span
        .select(&LINK)
        .map(|link| link.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty() && !text.starts_with('['))
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(" "))
}

/// Places are usually a `ul` of links (city, region, country). Read the
/// first list when present, the whole cell otherwise; an empty normalized
/// result stays absent either way.
fn place_from_cell(cell: ElementRef<'_>) -> Option<String> {
    let text: String = match cell.select(&PLACE_LIST).next() {
        Some(list) => list.text().collect(),
        None => cell.text().collect(),
    };
    clean_text(&text)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn first_td(doc: &Html) -> ElementRef<'_> {
        let td = Selector::parse("td").unwrap();
        doc.select(&td).next().unwrap()
    }

    #[test]
    fn date_joins_link_texts() {
        let doc = Html::parse_document(
            r#"<table><tr><td><span class="nowrap">
                <a>14 сентября</a> <a>1849</a></span></td></tr></table>"#,
        );
        let value = date_from_span(first_td(&doc));
        assert_eq!(value.as_deref(), Some("14 сентября 1849"));
    }

    #[test]
    fn date_drops_citation_links() {
        let doc = Html::parse_document(
            r#"<table><tr><td><span class="nowrap">
                <a>26 февраля</a> <a>1936</a><a>[2]</a></span></td></tr></table>"#,
        );
        let value = date_from_span(first_td(&doc));
        assert_eq!(value.as_deref(), Some("26 февраля 1936"));
    }

    #[test]
    fn date_without_nowrap_span_is_absent() {
        let doc = Html::parse_document(
            r#"<table><tr><td><a>14 сентября</a> <a>1849</a></td></tr></table>"#,
        );
        assert_eq!(date_from_span(first_td(&doc)), None);
    }

    #[test]
    fn date_span_with_only_citations_is_absent() {
        let doc = Html::parse_document(
            r#"<table><tr><td><span class="nowrap"><a>[1]</a><a> </a></span></td></tr></table>"#,
        );
        assert_eq!(date_from_span(first_td(&doc)), None);
    }

    #[test]
    fn place_prefers_list_text() {
        let doc = Html::parse_document(
            r#"<table><tr><td>ignored
                <ul><li><a>Рязань</a>,</li> <li><a>Российская империя</a></li></ul>
                </td></tr></table>"#,
        );
        let value = place_from_cell(first_td(&doc));
        assert_eq!(value.as_deref(), Some("Рязань, Российская империя"));
    }

    #[test]
    fn place_falls_back_to_cell_text() {
        let doc = Html::parse_document(
            r#"<table><tr><td> <a>Ленинград</a>,
                <a>СССР</a>[3]</td></tr></table>"#,
        );
        let value = place_from_cell(first_td(&doc));
        assert_eq!(value.as_deref(), Some("Ленинград, СССР"));
    }

    #[test]
    fn empty_list_does_not_fall_back() {
        // A present but empty list means the place is absent, not that the
        // rest of the cell should be read instead.
        let doc = Html::parse_document(
            r#"<table><tr><td>visible text<ul><li> </li></ul></td></tr></table>"#,
        );
        assert_eq!(place_from_cell(first_td(&doc)), None);
    }
}
