//! Public site coordinator.
//!
//! Loads the bootstrap content, overlays whatever the dashboard saved, renders
//! every section and applies the stored theme.

use crate::app::domain::content::ContentDocument;
use crate::app::domain::settings::AppSettings;
use crate::app::infrastructure::dom::Element;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::{FileStorage, StorageAdapter};
use crate::app::services::bootstrap;
use crate::app::services::config_store::ConfigStore;
use crate::app::services::content_store::ContentStore;
use crate::app::services::styling::ThemeApplier;
use crate::ui::pages::site_page;
use crate::ui::renderers::render_site;

pub const LOAD_ERROR_MESSAGE: &str =
    "Error cargando la configuración. Por favor, verifica el archivo config.json";

pub struct SiteApp<S: StorageAdapter + Clone> {
    settings: AppSettings,
    content: ContentStore<S>,
    theme: ThemeApplier<S>,
    page: Element,
}

impl SiteApp<FileStorage> {
    /// Site backed by the file storage configured in `settings`.
    pub fn open(settings: AppSettings) -> Self {
        let settings = settings.validated();
        let dir = settings
            .storage_dir
            .clone()
            .unwrap_or_else(FileStorage::default_dir);
        let storage = FileStorage::new(dir).with_prefix(settings.storage_prefix.clone());
        Self::new(storage, settings)
    }
}

impl<S: StorageAdapter + Clone> SiteApp<S> {
    pub fn new(storage: S, settings: AppSettings) -> Self {
        Self {
            content: ContentStore::new(storage.clone()),
            theme: ThemeApplier::new(ConfigStore::new(storage)),
            settings,
            page: site_page(),
        }
    }

    pub fn page(&self) -> &Element {
        &self.page
    }

    /// Fetch the bootstrap content and render the page.
    pub fn init(&mut self) -> Option<ContentDocument> {
        let fetched = bootstrap::fetch_content(&self.settings.bootstrap, self.settings.http_timeout_secs);
        self.init_with(fetched)
    }

    /// Render from an already fetched result.
    ///
    /// Stored content overrides the bootstrap document field by field. When
    /// the fetch failed the stored content is used alone; with nothing stored
    /// either, the error message replaces the main region.
    pub fn init_with(&mut self, fetched: Result<ContentDocument>) -> Option<ContentDocument> {
        let stored = self.content.load();
        let content = match (fetched, stored) {
            (Ok(base), Some(stored)) => base.overlaid_with(stored),
            (Ok(base), None) => base,
            (Err(e), Some(stored)) => {
                tracing::warn!("Using stored content, bootstrap failed: {}", e);
                stored
            }
            (Err(e), None) => {
                tracing::error!("Error inicializando aplicación: {}", e);
                self.show_error(LOAD_ERROR_MESSAGE);
                return None;
            }
        };
        self.render(&content);
        Some(content)
    }

    pub fn render(&mut self, content: &ContentDocument) {
        render_site(&mut self.page, content, &self.settings.whatsapp_country_code);
        self.theme.apply(&mut self.page);
        self.theme.apply_section_styles(&mut self.page);
    }

    pub fn show_error(&mut self, message: &str) {
        if let Some(main) = self.page.find_by_tag_mut("main") {
            main.set_children(vec![
                Element::new("div")
                    .with_class("error-message")
                    .with_text(message)
                    .into(),
            ]);
        }
    }
}
