//! Per-section style controls of the dashboard.

use crate::app::domain::messages::NotificationKind;
use crate::app::domain::theme::{self, SectionStyle, StyleProperty};
use crate::app::infrastructure::dom::{Element, Node};
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::notification::Notifier;
use crate::app::services::theme_manager::ThemeManager;
use crate::app::services::validation::is_hex_color;

pub const CONTAINER_ID: &str = "section-styles-container";
pub const SELECT_ID: &str = "section-select";

/// Background shown in the picker when the section has none.
const DEFAULT_BACKGROUND: &str = "#ffffff";

#[derive(Debug, Default)]
pub struct SectionControls {
    selected: Option<String>,
}

impl SectionControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Fill the section selector from the registry.
    pub fn render_selector(&self, page: &mut Element) {
        let Some(select) = page.find_by_id_mut(SELECT_ID) else {
            return;
        };
        let options = theme::all_sections().iter().map(|s| {
            let option = Element::new("option")
                .with_attr("value", s.id)
                .with_text(s.display_name);
            if self.selected() == Some(s.id) {
                option.with_attr("selected", "")
            } else {
                option
            }
        });
        select.set_children(options.map(Node::from).collect());
    }

    /// Select a section and show its controls. Unknown ids are ignored.
    pub fn select(&mut self, page: &mut Element, section_id: &str, styles: &SectionStyle) -> bool {
        if theme::section(section_id).is_none() {
            return false;
        }
        self.selected = Some(section_id.to_string());
        self.render(page, section_id, styles);
        self.render_selector(page);
        true
    }

    /// Build the controls for one section.
    pub fn render(&self, page: &mut Element, section_id: &str, styles: &SectionStyle) {
        let Some(container) = page.find_by_id_mut(CONTAINER_ID) else {
            return;
        };
        let display_name = theme::section_display_name(section_id);
        let default_text = theme::default_text_color(section_id);
        let bg = styles.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND);
        let text = styles.text_color.as_deref().unwrap_or(default_text);
        let image = styles.background_image.as_deref().unwrap_or("");

        let background = Element::new("div")
            .with_class("control-group")
            .with_child(label(&format!("section-bg-{}", section_id), "Color de Fondo"))
            .with_child(color_inputs(
                &format!("section-bg-{}", section_id),
                bg,
                &format!("clear-bg-{}", section_id),
            ));

        let text_color = Element::new("div")
            .with_class("control-group")
            .with_child(label(
                &format!("section-text-{}", section_id),
                "Color de Texto (todos los textos de la sección)",
            ))
            .with_child(color_inputs(
                &format!("section-text-{}", section_id),
                text,
                &format!("clear-text-{}", section_id),
            ))
            .with_child(
                Element::new("small").with_text("Aplica el color a todos los textos dentro de esta sección"),
            );

        let background_image = Element::new("div")
            .with_class("control-group")
            .with_child(label(&format!("section-image-{}", section_id), "Imagen de Fondo (URL)"))
            .with_child(
                Element::new("input")
                    .with_id(&format!("section-image-{}", section_id))
                    .with_class("text-input")
                    .with_attr("type", "text")
                    .with_attr("value", image)
                    .with_attr("placeholder", "https://ejemplo.com/imagen.jpg"),
            )
            .with_child(
                Element::new("button")
                    .with_id(&format!("clear-image-{}", section_id))
                    .with_class("btn btn-small")
                    .with_text("Limpiar Imagen"),
            );

        container.set_children(vec![
            Element::new("h3")
                .with_text(&format!("Estilos de {}", display_name))
                .into(),
            Element::new("div")
                .with_class("controls-grid")
                .with_child(background)
                .with_child(text_color)
                .with_child(background_image)
                .into(),
        ]);
    }

    /// Value picked from a color picker or typed into the image field.
    pub fn update<S: StorageAdapter>(
        &self,
        themes: &mut ThemeManager<S>,
        section_id: &str,
        property: StyleProperty,
        value: &str,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if themes.update_section_style(section_id, property, Some(value)).is_none() {
            return false;
        }
        let name = theme::section_display_name(section_id);
        let message = match property {
            StyleProperty::BackgroundColor => format!("Fondo de {} actualizado", name),
            StyleProperty::TextColor => format!("Texto de {} actualizado", name),
            StyleProperty::BackgroundImage => format!("Imagen de fondo de {} actualizada", name),
        };
        notifier.notify(&message, NotificationKind::Info);
        true
    }

    /// Value typed into a color text field. Only complete hex colors are applied.
    pub fn update_typed<S: StorageAdapter>(
        &self,
        themes: &mut ThemeManager<S>,
        section_id: &str,
        property: StyleProperty,
        value: &str,
    ) -> bool {
        if !is_hex_color(value) {
            return false;
        }
        themes
            .update_section_style(section_id, property, Some(value))
            .is_some()
    }

    pub fn clear<S: StorageAdapter>(
        &self,
        themes: &mut ThemeManager<S>,
        section_id: &str,
        property: StyleProperty,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if themes.update_section_style(section_id, property, None).is_none() {
            return false;
        }
        let name = theme::section_display_name(section_id);
        let message = match property {
            StyleProperty::BackgroundColor => format!("Fondo de {} limpiado", name),
            StyleProperty::TextColor => format!("Texto de {} limpiado", name),
            StyleProperty::BackgroundImage => format!("Imagen de fondo de {} limpiada", name),
        };
        notifier.notify(&message, NotificationKind::Info);
        true
    }
}

fn label(for_id: &str, text: &str) -> Element {
    Element::new("label").with_attr("for", for_id).with_text(text)
}

fn color_inputs(id: &str, value: &str, clear_id: &str) -> Element {
    Element::new("div")
        .with_class("color-input-wrapper")
        .with_child(
            Element::new("input")
                .with_id(id)
                .with_attr("type", "color")
                .with_attr("value", value),
        )
        .with_child(
            Element::new("input")
                .with_id(&format!("{}-text", id))
                .with_class("color-text-input")
                .with_attr("type", "text")
                .with_attr("value", value),
        )
        .with_child(
            Element::new("button")
                .with_id(clear_id)
                .with_class("btn btn-small")
                .with_text("Limpiar"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::messages::Notification;
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::app::services::config_store::ConfigStore;
    use crate::ui::pages::{dashboard_page, input_value};

    fn themes() -> ThemeManager<MemoryStorage> {
        ThemeManager::new(ConfigStore::new(MemoryStorage::new()))
    }

    #[test]
    fn test_render_uses_registry_defaults() {
        let mut page = dashboard_page();
        let mut controls = SectionControls::new();
        assert!(controls.select(&mut page, "footer", &SectionStyle::default()));

        let container = page.find_by_id(CONTAINER_ID).unwrap();
        assert_eq!(container.find_by_tag("h3").unwrap().text_content(), "Estilos de Footer");
        assert_eq!(input_value(&page, "section-bg-footer"), "#ffffff");
        assert_eq!(input_value(&page, "section-text-footer-text"), "#ffffff");
        assert_eq!(input_value(&page, "section-image-footer"), "");
        assert!(page.find_by_id("clear-image-footer").is_some());

        let select = page.find_by_id(SELECT_ID).unwrap();
        assert_eq!(select.child_elements().count(), 6);
        assert_eq!(controls.selected(), Some("footer"));
    }

    #[test]
    fn test_unknown_section_is_not_selected() {
        let mut page = dashboard_page();
        let mut controls = SectionControls::new();
        assert!(!controls.select(&mut page, "sidebar", &SectionStyle::default()));
        assert!(controls.selected().is_none());
    }

    #[test]
    fn test_update_and_clear_notify() {
        let mut tm = themes();
        let mut outbox: Vec<Notification> = Vec::new();
        let controls = SectionControls::new();

        assert!(controls.update(&mut tm, "presentacion", StyleProperty::BackgroundColor, "#fafafa", &mut outbox));
        assert!(controls.update(&mut tm, "presentacion", StyleProperty::BackgroundImage, "bg.jpg", &mut outbox));
        assert!(controls.clear(&mut tm, "presentacion", StyleProperty::BackgroundImage, &mut outbox));

        let style = tm.section_styles("presentacion");
        assert_eq!(style.background_color.as_deref(), Some("#fafafa"));
        assert_eq!(style.background_image, None);

        let messages: Vec<&str> = outbox.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Fondo de Presentación actualizado",
                "Imagen de fondo de Presentación actualizada",
                "Imagen de fondo de Presentación limpiada",
            ]
        );
    }

    #[test]
    fn test_typed_values_need_full_hex() {
        let mut tm = themes();
        let controls = SectionControls::new();
        assert!(!controls.update_typed(&mut tm, "hero", StyleProperty::TextColor, "#fff"));
        assert!(tm.section_styles("hero").is_empty());
        assert!(controls.update_typed(&mut tm, "hero", StyleProperty::TextColor, "#ABCDEF"));
        assert_eq!(tm.section_styles("hero").text_color.as_deref(), Some("#ABCDEF"));
    }
}
