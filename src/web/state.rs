use super::assets::AssetUrls;
use crate::config::Credentials;
use crate::services::gallery::Gallery;
use crate::Config;
use anyhow::Result;
use tera::Tera;

pub struct AppState {
    pub config: Config,
    pub templates: Tera,
    pub gallery: Gallery,
    pub assets: AssetUrls,
}

impl AppState {
    pub fn new(config: Config, credentials: Credentials) -> Result<Self> {
        let gallery = Gallery::from_config(&config, credentials)?;
        Self::with_gallery(config, gallery)
    }

    /// Builds state around an already wired gallery (used by tests to swap
    /// in fake media sources).
    pub fn with_gallery(config: Config, gallery: Gallery) -> Result<Self> {
        let mut templates = Tera::default();

        templates.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html")),
            ("public/index.html", include_str!("../../templates/public/index.html")),
            ("public/gallery.html", include_str!("../../templates/public/gallery.html")),
            ("public/404.html", include_str!("../../templates/public/404.html")),
            ("partials/events.html", include_str!("../../templates/partials/events.html")),
            ("partials/lightbox.html", include_str!("../../templates/partials/lightbox.html")),
        ])?;

        Ok(Self {
            config,
            templates,
            gallery,
            assets: AssetUrls::build(),
        })
    }
}
