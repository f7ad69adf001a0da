use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "ECLIPTIX".to_string());

    std::fs::create_dir_all(&path)?;

    let config_path = path.join("encore.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = format!(
        r#"[site]
title = "{}"
description = "Official site — events, highlights and releases"
url = "http://localhost:3000"
language = "en"
tagline = "DJ / Producer"
events_per_page = 5

[server]
host = "127.0.0.1"
port = 3000

[contact]
email = "hello@example.com"
socials = [
  {{ name = "Instagram", url = "https://www.instagram.com/" }},
  {{ name = "YouTube", url = "https://www.youtube.com/" }},
]

# Credentials are read from the environment:
#   IMAGEKIT_PRIVATE_KEY
#   CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET
[sources]
timeout_secs = 10

[sources.imagekit]
delivery_url = "https://ik.imagekit.io/your-id"

[sources.cloudinary]
max_results = 100

[gallery]
revalidate_secs = 60
thumbnail_transform = "w-400,q-80"
"#,
        site_name.replace('"', "\\\"")
    );

    std::fs::write(&config_path, config)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'encore doctor' to check media credentials");
    tracing::info!("Run 'encore serve' to start the server");

    Ok(())
}
