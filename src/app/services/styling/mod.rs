//! Theme application on a page.
//!
//! `hero` and `section` hold the two shared applicators; [`ThemeApplier`]
//! reads the stored theme and runs them against a page root.

pub mod hero;
pub mod section;

use std::collections::BTreeMap;

use crate::app::domain::theme::{
    ColorName, DEFAULT_PRIMARY, DEFAULT_SECONDARY, SectionStyle, ThemeConfig,
};
use crate::app::infrastructure::dom::Element;
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::config_store::ConfigStore;

pub use hero::apply_hero_background;
pub use section::apply_section_styles;

/// Id of the hero section on every page.
pub const HERO_ID: &str = "hero";

/// Write the palette as CSS custom properties on the page root.
pub fn apply_color_variables(root: &mut Element, colors: &BTreeMap<String, String>) {
    for name in ColorName::ALL {
        if let Some(value) = colors.get(name.key()).filter(|v| !v.is_empty()) {
            root.style.set(name.css_variable(), value);
        }
    }
}

/// Apply the hero background, resolving colors from the root's custom properties.
pub fn apply_hero_from_root(root: &mut Element, config: &ThemeConfig) {
    let primary = root_variable(root, ColorName::Primary, DEFAULT_PRIMARY);
    let secondary = root_variable(root, ColorName::Secondary, DEFAULT_SECONDARY);
    if let Some(hero) = root.find_by_id_mut(HERO_ID) {
        apply_hero_background(hero, &config.hero, || primary.clone(), || secondary.clone());
    }
}

/// Apply each section's overrides to the element with the matching id.
pub fn apply_sections(root: &mut Element, sections: &BTreeMap<String, SectionStyle>) {
    for (section_id, styles) in sections {
        if let Some(section) = root.find_by_id_mut(section_id) {
            apply_section_styles(section, styles);
        }
    }
}

/// Colors, hero and section styles in one pass.
pub fn apply_theme_config(root: &mut Element, config: &ThemeConfig) {
    apply_color_variables(root, &config.colors);
    apply_hero_from_root(root, config);
    apply_sections(root, &config.sections);
}

fn root_variable(root: &Element, name: ColorName, fallback: &str) -> String {
    let value = root.style.get(name.css_variable()).trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Applies the persisted theme to a page. Without a stored theme the page is
/// left as is.
pub struct ThemeApplier<S: StorageAdapter> {
    store: ConfigStore<S>,
}

impl<S: StorageAdapter> ThemeApplier<S> {
    pub fn new(store: ConfigStore<S>) -> Self {
        Self { store }
    }

    /// CSS variables and hero background
    pub fn apply(&self, root: &mut Element) {
        let Some(config) = self.store.load() else {
            return;
        };
        apply_color_variables(root, &config.colors);
        apply_hero_from_root(root, &config);
    }

    pub fn apply_section_styles(&self, root: &mut Element) {
        let Some(config) = self.store.load() else {
            return;
        };
        apply_sections(root, &config.sections);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::theme::{HeroConfig, HeroType};
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::app::services::config_store::THEME_STORAGE_KEY;

    fn page() -> Element {
        Element::new("html").with_child(
            Element::new("body")
                .with_child(Element::new("section").with_id("hero"))
                .with_child(
                    Element::new("section")
                        .with_id("servicios")
                        .with_child(Element::new("h3").with_text("Title"))
                        .with_child(Element::new("p").with_class("whatsapp-link").with_text("Phone")),
                ),
        )
    }

    #[test]
    fn test_apply_sets_css_variables_from_storage() {
        let mut storage = MemoryStorage::new();
        storage.set(
            THEME_STORAGE_KEY,
            r##"{"colors": {"primary": "#111111", "secondary": "#222222", "accent": "#333333",
                "background": "#ffffff", "backgroundLight": "#eeeeee", "border": "#cccccc"},
                "hero": {"type": "gradient"}}"##,
        );
        let applier = ThemeApplier::new(ConfigStore::new(storage));
        let mut root = page();
        applier.apply(&mut root);

        assert_eq!(root.style.get("--color-primary"), "#111111");
        assert_eq!(root.style.get("--color-secondary"), "#222222");
        assert_eq!(root.style.get("--color-background-light"), "#eeeeee");
        let hero = root.find_by_id("hero").unwrap();
        assert_eq!(
            hero.style.get("background"),
            "linear-gradient(135deg, #111111 0%, #222222 100%)"
        );
    }

    #[test]
    fn test_apply_without_stored_theme_is_a_no_op() {
        let applier = ThemeApplier::new(ConfigStore::new(MemoryStorage::new()));
        let mut root = page();
        let before = root.clone();
        applier.apply(&mut root);
        applier.apply_section_styles(&mut root);
        assert_eq!(root, before);
    }

    #[test]
    fn test_apply_section_styles_from_storage() {
        let mut storage = MemoryStorage::new();
        storage.set(
            THEME_STORAGE_KEY,
            r##"{"sections": {"servicios": {"backgroundColor": "#fafafa", "textColor": "#123456",
                "backgroundImage": "bg.jpg"}, "missing": {"textColor": "#000000"}}}"##,
        );
        let applier = ThemeApplier::new(ConfigStore::new(storage));
        let mut root = page();
        applier.apply_section_styles(&mut root);

        let sec = root.find_by_id("servicios").unwrap();
        assert_eq!(sec.style.get("background-color"), "rgb(250, 250, 250)");
        assert_eq!(sec.find_by_tag("h3").unwrap().style.get("color"), "rgb(18, 52, 86)");
        assert_eq!(sec.find_by_tag("p").unwrap().style.get("color"), "");
        assert!(sec.style.get("background-image").contains("bg.jpg"));
    }

    #[test]
    fn test_apply_theme_config_on_preview_root() {
        let mut config = ThemeConfig::default();
        config.hero = HeroConfig {
            kind: HeroType::Image,
            background_color: None,
            background_image: Some("hero.jpg".to_string()),
        };
        let mut root = page();
        apply_theme_config(&mut root, &config);
        assert_eq!(root.style.get("--color-primary"), "#2563eb");
        let hero = root.find_by_id("hero").unwrap();
        assert!(hero.style.get("background-image").contains("hero.jpg"));
        assert_eq!(hero.style.get("background-size"), "cover");
    }
}
