use crate::config::Credentials;
use crate::services::catalog;
use crate::services::slug::is_valid_slug;
use crate::web::fingerprint;
use crate::Config;
use anyhow::Result;
use std::path::Path;

#[derive(Debug)]
enum CheckStatus {
    Ok,
    Warn,
    Fail,
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckStatus::Ok => write!(f, "\x1b[32m✓ OK\x1b[0m"),
            CheckStatus::Warn => write!(f, "\x1b[33m⚠ WARN\x1b[0m"),
            CheckStatus::Fail => write!(f, "\x1b[31m✗ FAIL\x1b[0m"),
        }
    }
}

struct CheckResult {
    name: String,
    status: CheckStatus,
    detail: String,
}

pub async fn run(config_path: &Path) -> Result<()> {
    println!("\n  Encore Doctor — Site Health Check\n");

    let mut results: Vec<CheckResult> = Vec::new();

    let config = match Config::load(config_path) {
        Ok(c) => {
            results.push(CheckResult {
                name: "Configuration".into(),
                status: CheckStatus::Ok,
                detail: format!("Loaded from {}", config_path.display()),
            });
            Some(c)
        }
        Err(e) => {
            results.push(CheckResult {
                name: "Configuration".into(),
                status: CheckStatus::Fail,
                detail: format!("Failed to load: {}", e),
            });
            None
        }
    };

    if let Some(config) = &config {
        let credentials = Credentials::from_env(config);

        results.push(match &credentials.imagekit_private_key {
            Some(_) => CheckResult {
                name: "ImageKit (photos)".into(),
                status: CheckStatus::Ok,
                detail: format!("Delivering from {}", config.sources.imagekit.delivery_url),
            },
            None => CheckResult {
                name: "ImageKit (photos)".into(),
                status: CheckStatus::Warn,
                detail: "IMAGEKIT_PRIVATE_KEY not set; galleries will have no photos".into(),
            },
        });

        results.push(match &credentials.cloudinary {
            Some(c) => CheckResult {
                name: "Cloudinary (videos)".into(),
                status: CheckStatus::Ok,
                detail: format!("Cloud '{}'", c.cloud_name),
            },
            None => CheckResult {
                name: "Cloudinary (videos)".into(),
                status: CheckStatus::Warn,
                detail: "Cloud name, API key or secret missing; galleries will have no videos"
                    .into(),
            },
        });
    }

    let bad_slugs: Vec<&str> = catalog::EVENTS
        .iter()
        .map(|e| e.slug)
        .filter(|s| !is_valid_slug(s))
        .collect();
    results.push(if bad_slugs.is_empty() {
        CheckResult {
            name: "Event catalog".into(),
            status: CheckStatus::Ok,
            detail: format!("{} events", catalog::EVENTS.len()),
        }
    } else {
        CheckResult {
            name: "Event catalog".into(),
            status: CheckStatus::Fail,
            detail: format!("Invalid slugs: {}", bad_slugs.join(", ")),
        }
    });

    let missing: Vec<&str> = ["site.css", "lightbox.js"]
        .into_iter()
        .filter(|p| fingerprint(p).is_none())
        .collect();
    results.push(if missing.is_empty() {
        CheckResult {
            name: "Static assets".into(),
            status: CheckStatus::Ok,
            detail: "Embedded".into(),
        }
    } else {
        CheckResult {
            name: "Static assets".into(),
            status: CheckStatus::Fail,
            detail: format!("Missing: {}", missing.join(", ")),
        }
    });

    print_results(&results);

    if results.iter().any(|r| matches!(r.status, CheckStatus::Fail)) {
        println!("\n  \x1b[31mSome checks failed. Fix the issues above before deploying.\x1b[0m\n");
    } else {
        println!("\n  \x1b[32mAll checks passed.\x1b[0m\n");
    }

    Ok(())
}

fn print_results(results: &[CheckResult]) {
    for r in results {
        println!("  {:<24} {}  {}", r.name, r.status, r.detail);
    }
}
