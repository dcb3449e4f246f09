//! Shared application state.

use std::path::Path;
use std::sync::Arc;

use crate::catalog::store::{CatalogError, ServiceCatalog};
use crate::config::ServerConfig;
use crate::export::raster::{HtmlRasterizer, WkhtmlRasterizer};
use crate::proposal::stamp::{StampSource, SystemStamp};
use crate::proposal::TemplatePreset;
use crate::session::store::{InMemorySessionStore, SessionStore};

/// State handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ServiceCatalog>,
    pub sessions: Arc<dyn SessionStore>,
    pub stamp: Arc<dyn StampSource>,
    pub rasterizer: Arc<dyn HtmlRasterizer>,
    pub default_preset: TemplatePreset,
}

impl AppState {
    /// Build state from configuration: the bundled service catalog unless a
    /// path overrides it, the system clock, and the configured rasterizer.
    pub fn from_config(config: &ServerConfig) -> Result<Self, CatalogError> {
        let catalog = match &config.catalog_path {
            Some(path) => ServiceCatalog::from_file(Path::new(path))?,
            None => ServiceCatalog::load_default()?,
        };

        Ok(Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(InMemorySessionStore::new()),
            stamp: Arc::new(SystemStamp),
            rasterizer: Arc::new(WkhtmlRasterizer::new(config.rasterizer_binary.clone())),
            default_preset: config.default_preset,
        })
    }

    /// State with explicit collaborators. Tests use this to pin the stamp
    /// and substitute the rasterizer.
    pub fn with_parts(
        catalog: ServiceCatalog,
        stamp: Arc<dyn StampSource>,
        rasterizer: Arc<dyn HtmlRasterizer>,
        default_preset: TemplatePreset,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(InMemorySessionStore::new()),
            stamp,
            rasterizer,
            default_preset,
        }
    }
}
