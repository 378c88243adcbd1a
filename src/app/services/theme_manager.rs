//! Theme editing: palette, hero background and per-section overrides.
//!
//! The manager keeps the working copy of the [`ThemeConfig`] and writes it
//! through the [`ConfigStore`] after every change.

use crate::app::domain::theme::{self, HeroType, SectionStyle, StyleProperty, ThemeConfig};
use crate::app::infrastructure::dom::Element;
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::config_store::ConfigStore;
use crate::app::services::styling::{apply_color_variables, apply_hero_from_root};

pub struct ThemeManager<S: StorageAdapter> {
    store: ConfigStore<S>,
    config: ThemeConfig,
}

impl<S: StorageAdapter> ThemeManager<S> {
    pub fn new(store: ConfigStore<S>) -> Self {
        let config = store.load().unwrap_or_default();
        Self { store, config }
    }

    /// Re-read the persisted theme, merged over the defaults.
    pub fn load(&mut self) -> &ThemeConfig {
        self.config = self.store.load().unwrap_or_default();
        &self.config
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Color by name, `""` when unset.
    pub fn get_color(&self, name: &str) -> &str {
        self.config.color(name)
    }

    pub fn update_color(&mut self, name: &str, value: &str) {
        self.config
            .colors
            .insert(name.to_string(), value.to_string());
        self.persist();
    }

    /// Write the palette as CSS variables on `root` and persist.
    pub fn apply_theme(&mut self, root: &mut Element) {
        apply_color_variables(root, &self.config.colors);
        self.persist();
    }

    /// Apply the hero background to the hero inside `root`.
    pub fn apply_hero_background(&self, root: &mut Element) {
        apply_hero_from_root(root, &self.config);
    }

    /// Drop the persisted theme and go back to the defaults.
    pub fn reset(&mut self) -> ThemeConfig {
        self.config = self.store.reset();
        self.config.clone()
    }

    pub fn update_background_type(&mut self, kind: HeroType) {
        self.config.hero.kind = kind;
        self.persist();
    }

    pub fn update_background_color(&mut self, color: &str) {
        self.config.hero.background_color = Some(color.to_string());
        self.persist();
    }

    pub fn update_background_image(&mut self, url: &str) {
        self.config.hero.background_image = Some(url.to_string());
        self.persist();
    }

    pub fn section_styles(&self, section_id: &str) -> SectionStyle {
        self.config.section_style(section_id)
    }

    /// Set one property of a registered section; `None` or `""` removes it.
    ///
    /// Returns the section's resulting style, or `None` for an unknown section.
    pub fn update_section_style(
        &mut self,
        section_id: &str,
        property: StyleProperty,
        value: Option<&str>,
    ) -> Option<SectionStyle> {
        if theme::section(section_id).is_none() {
            tracing::warn!("Ignoring style update for unknown section {}", section_id);
            return None;
        }
        let style = self
            .config
            .sections
            .entry(section_id.to_string())
            .or_default();
        style.set(property, value);
        let updated = style.clone();
        self.persist();
        Some(updated)
    }

    fn persist(&mut self) {
        if !self.store.save(&self.config) {
            tracing::warn!("Theme change was not persisted");
        }
    }
}
