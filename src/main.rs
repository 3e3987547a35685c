mod fetch;
mod infobox;
mod pipeline;
mod sheet;

use std::path::Path;
use std::time::Instant;

/// Biography articles to scrape, one output workbook each.
const ARTICLE_URLS: [&str; 3] = [
    "https://ru.wikipedia.org/wiki/Павлов,_Иван_Петрович",
    "https://ru.wikipedia.org/wiki/Аа,_Карл_Вильгельм_фон_дер",
    "https://ru.wikipedia.org/wiki/Абашин,_Сергей_Николаевич",
];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let client = fetch::build_client()?;

    println!("Scraping {} articles...", ARTICLE_URLS.len());
    let stats = pipeline::run(&ARTICLE_URLS, Path::new("."), |url| {
        fetch::fetch_page(&client, url)
    });
    println!(
        "Done: {} articles ({} ok, {} errors) in {:.1}s",
        stats.total,
        stats.ok,
        stats.errors,
        t0.elapsed().as_secs_f64()
    );

    Ok(())
}
