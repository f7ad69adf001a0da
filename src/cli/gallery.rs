use crate::config::Credentials;
use crate::services::catalog;
use crate::services::gallery::Gallery;
use crate::Config;
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path, slug: &str, json: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let event = catalog::find_event(slug)
        .ok_or_else(|| anyhow::anyhow!("No event with slug '{}'", slug))?;

    let gallery = Gallery::from_config(&config, Credentials::from_env(&config))?;
    let items = gallery.aggregator().aggregate(event.folder).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{} — {} item(s)", event.title, items.len());
    for (i, item) in items.iter().enumerate() {
        println!(
            "{:>4}  {:<5}  {:>4}x{:<4}  {}",
            i + 1,
            item.kind,
            item.width,
            item.height,
            item.url
        );
    }
    if items.is_empty() {
        println!("Gallery coming soon");
    }

    Ok(())
}
