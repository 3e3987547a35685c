use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};

/// The four biographical slots, in spreadsheet column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    BirthDate,
    BirthPlace,
    DeathDate,
    DeathPlace,
}

pub const COLUMNS: [Field; 4] = [
    Field::BirthDate,
    Field::BirthPlace,
    Field::DeathDate,
    Field::DeathPlace,
];

impl Field {
    /// Infobox header label; doubles as the spreadsheet column header,
    /// exactly like the dict keys of the original scraper.
    pub fn label(self) -> &'static str {
        match self {
            Field::BirthDate => "Дата рождения",
            Field::BirthPlace => "Место рождения",
            Field::DeathDate => "Дата смерти",
            Field::DeathPlace => "Место смерти",
        }
    }
}

/// One extracted biography. Every field starts absent and is filled only
/// when the infobox yielded non-empty cleaned text for it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub birth_date: Option<String>,
    pub birth_place: Option<String>,
    pub death_date: Option<String>,
    pub death_place: Option<String>,
}

impl PersonRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::BirthDate => self.birth_date.as_deref(),
            Field::BirthPlace => self.birth_place.as_deref(),
            Field::DeathDate => self.death_date.as_deref(),
            Field::DeathPlace => self.death_place.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::BirthDate => &mut self.birth_date,
            Field::BirthPlace => &mut self.birth_place,
            Field::DeathDate => &mut self.death_date,
            Field::DeathPlace => &mut self.death_place,
        };
        *slot = Some(value);
    }

    /// True when nothing was extracted at all.
    pub fn is_empty(&self) -> bool {
        COLUMNS.iter().all(|f| self.get(*f).is_none())
    }
}

/// Output file name for an article URL. The trailing path segment is the
/// article title, which keeps one deterministic file per input.
pub fn output_filename(url: &str) -> String {
    let segment = url.rsplit('/').next().unwrap_or(url);
    format!("person_info_{segment}.xlsx")
}

/// Write one record as a single-row workbook: column labels in row 1,
/// values in row 2. Absent fields leave their cells empty.
pub fn save_record(record: &PersonRecord, path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, field) in COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, field.label())?;
        if let Some(value) = record.get(*field) {
            sheet.write_string(1, col as u16, value)?;
        }
    }

    workbook.save(path)
}

// ── Tests ──
