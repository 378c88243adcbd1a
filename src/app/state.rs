use crate::app::controllers::contacto::ContactoController;
use crate::app::controllers::presentacion::PresentacionController;
use crate::app::controllers::section_controls::SectionControls;
use crate::app::controllers::servicios::ServiciosController;
use crate::app::domain::content::ContentDocument;
use crate::app::domain::messages::{Message, Notification, NotificationKind, ServicioForm};
use crate::app::domain::settings::AppSettings;
use crate::app::domain::theme::{self, ColorName, HeroType, StyleProperty};
use crate::app::infrastructure::dom::Element;
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::storage::{FileStorage, StorageAdapter};
use crate::app::services::bootstrap;
use crate::app::services::config_store::ConfigStore;
use crate::app::services::content_store::ContentStore;
use crate::app::services::notification::{NotificationService, Notifier};
use crate::app::services::styling::apply_theme_config;
use crate::app::services::theme_manager::ThemeManager;
use crate::app::services::validation::is_hex_color;
use crate::ui::pages::{dashboard_page, set_input_value, site_page};
use crate::ui::renderers::render_site;

/// Dashboard coordinator: owns the dashboard page, the preview page and every
/// controller, and routes each [`Message`] to the right one.
pub struct DashboardState<S: StorageAdapter + Clone> {
    pub page: Element,
    pub preview: Element,
    settings: AppSettings,
    themes: ThemeManager<S>,
    content: ContentStore<S>,
    /// Bootstrap content the stored edits are layered on
    base: ContentDocument,
    servicios: ServiciosController,
    presentacion: PresentacionController,
    contacto: ContactoController,
    sections: SectionControls,
    notifications: NotificationService,
}

impl DashboardState<FileStorage> {
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

impl<S: StorageAdapter + Clone> DashboardState<S> {
    pub fn new(storage: S, settings: AppSettings) -> Self {
        let notifications =
            NotificationService::new("notification", "notification-text", settings.notification_hide_ms);
        let mut state = Self {
            page: dashboard_page(),
            preview: site_page(),
            themes: ThemeManager::new(ConfigStore::new(storage.clone())),
            content: ContentStore::new(storage),
            base: ContentDocument::default(),
            servicios: ServiciosController::new(),
            presentacion: PresentacionController::new(),
            contacto: ContactoController::new(),
            sections: SectionControls::new(),
            notifications,
            settings,
        };
        if let Some(first) = theme::all_sections().first() {
            let styles = state.themes.section_styles(first.id);
            state.sections.select(&mut state.page, first.id, &styles);
        }
        state.load_current_values();
        state.refresh_preview();
        state
    }

    /// Fetch the bootstrap document the site starts from and preview it with
    /// the stored edits on top. `new` alone previews stored content only.
    pub fn init(&mut self) -> bool {
        let fetched = bootstrap::fetch_content(&self.settings.bootstrap, self.settings.http_timeout_secs);
        self.init_with(fetched)
    }

    /// Same as [`DashboardState::init`] with an already fetched result. A failed
    /// fetch keeps the current base and is only logged.
    pub fn init_with(&mut self, fetched: Result<ContentDocument>) -> bool {
        match fetched {
            Ok(base) => {
                self.set_bootstrap(base);
                true
            }
            Err(e) => {
                tracing::warn!("Dashboard preview without bootstrap content: {}", e);
                false
            }
        }
    }

    /// Use `base` as the content under the stored edits.
    pub fn set_bootstrap(&mut self, base: ContentDocument) {
        self.base = base;
        self.load_current_values();
        self.refresh_preview();
    }

    /// Bootstrap content with the stored edits on top.
    pub fn current_content(&self) -> ContentDocument {
        match self.content.load() {
            Some(stored) => self.base.clone().overlaid_with(stored),
            None => self.base.clone(),
        }
    }

    pub fn themes(&self) -> &ThemeManager<S> {
        &self.themes
    }

    pub fn content_store(&self) -> &ContentStore<S> {
        &self.content
    }

    pub fn servicio_form(&self) -> &ServicioForm {
        self.servicios.form()
    }

    pub fn export_content(&self) -> String {
        self.content.export_content()
    }

    /// Handle one UI event. Returns the notifications it raised, the last of
    /// which is left visible in the banner.
    pub fn dispatch(&mut self, message: Message) -> Vec<Notification> {
        let mut outbox: Vec<Notification> = Vec::new();
        tracing::debug!("dispatch {:?}", message);

        match message {
            Message::ColorPicked { name, value } => {
                set_input_value(&mut self.page, &format!("color-{}-text", name), &value.to_uppercase());
                self.update_color(&name, &value, &mut outbox);
            }
            Message::ColorTyped { name, value } => {
                if is_hex_color(&value) {
                    set_input_value(&mut self.page, &format!("color-{}", name), &value);
                    self.update_color(&name, &value, &mut outbox);
                }
            }
            Message::ResetTheme => {
                self.themes.reset();
                self.load_current_values();
                self.refresh_preview();
                outbox.notify("Valores restablecidos por defecto", NotificationKind::Success);
            }

            Message::HeroTypeChanged(kind) => {
                self.themes.update_background_type(kind);
                set_input_value(&mut self.page, "background-type", kind.as_str());
                self.toggle_background_controls(kind);
                self.refresh_preview();
                outbox.notify("Tipo de fondo actualizado", NotificationKind::Info);
            }
            Message::HeroColorPicked(value) => {
                set_input_value(&mut self.page, "hero-background-color-text", &value.to_uppercase());
                self.themes.update_background_color(&value);
                self.refresh_preview();
            }
            Message::HeroColorTyped(value) => {
                if is_hex_color(&value) {
                    set_input_value(&mut self.page, "hero-background-color", &value);
                    self.themes.update_background_color(&value);
                    self.refresh_preview();
                }
            }
            Message::HeroImageChanged(url) => {
                self.themes.update_background_image(&url);
                self.refresh_preview();
            }
            Message::RefreshPreview => self.refresh_preview(),

            Message::SelectSection(section) => {
                let styles = self.themes.section_styles(&section);
                self.sections.select(&mut self.page, &section, &styles);
            }
            Message::SectionColorPicked { section, property, value } => {
                if self.sections.update(&mut self.themes, &section, property, &value, &mut outbox) {
                    self.after_section_change(&section);
                }
            }
            Message::SectionColorTyped { section, property, value } => {
                if self.sections.update_typed(&mut self.themes, &section, property, &value) {
                    self.after_section_change(&section);
                }
            }
            Message::SectionImageChanged { section, value } => {
                let property = StyleProperty::BackgroundImage;
                if self.sections.update(&mut self.themes, &section, property, &value, &mut outbox) {
                    self.after_section_change(&section);
                }
            }
            Message::ClearSectionStyle { section, property } => {
                if self.sections.clear(&mut self.themes, &section, property, &mut outbox) {
                    self.after_section_change(&section);
                }
            }

            Message::ShowServicioForm(index) => {
                let servicios = self.current_content().servicios();
                self.servicios.show_form(index, &servicios);
                self.servicios.sync_form(&mut self.page);
            }
            Message::HideServicioForm => {
                self.servicios.hide_form();
                self.servicios.sync_form(&mut self.page);
            }
            Message::EditServicioForm(form) => self.servicios.edit_form(form),
            Message::SaveServicio => {
                if self.servicios.save(&mut self.content, &mut outbox) {
                    self.after_content_change();
                }
                self.servicios.sync_form(&mut self.page);
            }
            Message::DeleteServicio { index, confirmed } => {
                if confirmed {
                    self.servicios.delete(&mut self.content, index);
                    self.after_content_change();
                }
            }

            Message::SavePresentacion(presentacion) => {
                self.presentacion.save(&mut self.content, presentacion, &mut outbox);
                self.after_content_change();
            }

            Message::UpdateEmpresa(patch) => {
                self.content.update_empresa(patch);
                self.after_content_change();
                outbox.notify("Datos de la empresa guardados", NotificationKind::Success);
            }
            Message::UpdateWelcome { titulo, subtitulo } => {
                self.content.update_welcome(&titulo, &subtitulo);
                self.after_content_change();
                outbox.notify("Mensaje de bienvenida guardado", NotificationKind::Success);
            }
            Message::SaveTelefono { index, telefono } => {
                if self.contacto.save_telefono(&mut self.content, index, telefono, &mut outbox) {
                    self.after_content_change();
                }
            }
            Message::DeleteTelefono(index) => {
                self.contacto.delete_telefono(&mut self.content, index, &mut outbox);
                self.after_content_change();
            }
            Message::SaveSucursal { index, sucursal } => {
                if self.contacto.save_sucursal(&mut self.content, index, sucursal, &mut outbox) {
                    self.after_content_change();
                }
            }
            Message::DeleteSucursal(index) => {
                self.contacto.delete_sucursal(&mut self.content, index, &mut outbox);
                self.after_content_change();
            }
        }

        for notification in &outbox {
            self.notifications.show(&mut self.page, notification.clone());
        }
        outbox
    }

    pub fn hide_notification(&mut self) {
        self.notifications.hide(&mut self.page);
    }

    fn update_color(&mut self, name: &str, value: &str, notifier: &mut dyn Notifier) {
        if ColorName::from_key(name).is_none() {
            tracing::warn!("Ignoring unknown color {}", name);
            return;
        }
        self.themes.update_color(name, value);
        self.refresh_preview();
        notifier.notify(&format!("Color {} actualizado", name), NotificationKind::Info);
    }

    fn after_section_change(&mut self, section: &str) {
        if self.sections.selected() == Some(section) {
            let styles = self.themes.section_styles(section);
            self.sections.render(&mut self.page, section, &styles);
        }
        self.refresh_preview();
    }

    fn after_content_change(&mut self) {
        let content = self.current_content();
        self.render_content_controls(&content);
        self.refresh_preview();
    }

    fn render_content_controls(&mut self, content: &ContentDocument) {
        self.servicios.render_list(&mut self.page, &content.servicios());
        self.contacto.render_telefonos(&mut self.page, &content.telefonos());
        self.contacto.render_sucursales(&mut self.page, &content.sucursales());
    }

    /// Show only the hero controls that apply to `kind`.
    pub fn toggle_background_controls(&mut self, kind: HeroType) {
        let (show_color, show_image) = match kind {
            HeroType::Solid => (true, false),
            HeroType::Image => (false, true),
            HeroType::Gradient => (false, false),
        };
        if let Some(group) = self.page.find_by_id_mut("hero-background-color-group") {
            group.set_hidden(!show_color);
        }
        if let Some(group) = self.page.find_by_id_mut("hero-background-image-group") {
            group.set_hidden(!show_image);
        }
    }

    /// Write the stored theme and content into every dashboard control.
    pub fn load_current_values(&mut self) {
        let config = self.themes.config().clone();
        for (key, value) in &config.colors {
            set_input_value(&mut self.page, &format!("color-{}", key), value);
            set_input_value(&mut self.page, &format!("color-{}-text", key), &value.to_uppercase());
        }

        let hero = &config.hero;
        set_input_value(&mut self.page, "background-type", hero.kind.as_str());
        self.toggle_background_controls(hero.kind);
        if let Some(color) = hero.color() {
            set_input_value(&mut self.page, "hero-background-color", color);
            set_input_value(&mut self.page, "hero-background-color-text", &color.to_uppercase());
        }
        if let Some(url) = hero.image_url() {
            set_input_value(&mut self.page, "hero-background-image", url);
        }

        let content = self.current_content();
        self.presentacion.load_values(&mut self.page, &content);
        self.render_content_controls(&content);
        self.servicios.sync_form(&mut self.page);
        if let Some(section) = self.sections.selected().map(str::to_string) {
            let styles = self.themes.section_styles(&section);
            self.sections.render(&mut self.page, &section, &styles);
        }
        self.sections.render_selector(&mut self.page);
    }

    /// Rebuild the preview from the current content and theme.
    pub fn refresh_preview(&mut self) {
        let mut preview = site_page();
        render_site(&mut preview, &self.current_content(), &self.settings.whatsapp_country_code);
        apply_theme_config(&mut preview, self.themes.config());
        self.preview = preview;
    }
}
