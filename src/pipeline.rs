use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::fetch::FetchError;
use crate::infobox;
use crate::sheet::{self, COLUMNS};

/// Run stats returned after completion.
pub struct RunStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
}

/// Process articles one after another, writing a workbook per article as
/// soon as it is extracted. A failing URL is logged and skipped, never
/// aborting the rest of the run.
pub fn run<F>(urls: &[&str], out_dir: &Path, mut fetch: F) -> RunStats
where
    F: FnMut(&str) -> Result<String, FetchError>,
{
    let total = urls.len();
    let mut ok = 0usize;
    let mut errors = 0usize;

    for url in urls {
        match process_article(url, out_dir, &mut fetch) {
            Ok(()) => ok += 1,
            Err(e) => {
                warn!("Skipping {}: {:#}", url, e);
                errors += 1;
            }
        }
    }

    info!("Processed {} articles ({} ok, {} errors)", total, ok, errors);
    RunStats { total, ok, errors }
}

fn process_article<F>(url: &str, out_dir: &Path, fetch: &mut F) -> Result<()>
where
    F: FnMut(&str) -> Result<String, FetchError>,
{
    info!("Fetching {}", url);
    let html = fetch(url).with_context(|| format!("fetching {url}"))?;

    let record = infobox::extract_person(&html);
    if record.is_empty() {
        warn!("No biographical data found at {}", url);
    } else {
        let found = COLUMNS.into_iter().filter(|f| record.get(*f).is_some()).count();
        info!("Extracted {}/{} fields", found, COLUMNS.len());
        for field in COLUMNS {
            debug!("{}: {}", field.label(), record.get(field).unwrap_or("-"));
        }
    }

    let path = out_dir.join(sheet::output_filename(url));
    sheet::save_record(&record, &path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Saved {}", path.display());

    Ok(())
}

// ── Tests ──
