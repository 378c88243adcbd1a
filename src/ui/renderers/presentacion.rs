use crate::app::domain::content::{ContentDocument, Presentacion};
use crate::app::infrastructure::dom::Element;

use super::Renderer;

const DEFAULT_TITLE: &str = "Quiénes somos";
const DEFAULT_CTA: &str = "Contacto";

/// Fills the presentation block. Fields that are absent from the content keep
/// whatever the page already shows.
pub struct PresentacionRenderer {
    mount_id: String,
}

impl PresentacionRenderer {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }

    fn render_image(mount: &mut Element, imagen: Option<&str>) {
        let Some(img) = mount.find_by_id_mut("presentacion-imagen") else {
            return;
        };
        match imagen.filter(|src| !src.is_empty()) {
            Some(src) => {
                img.set_attr("src", src);
                img.style.remove("display");
            }
            None => {
                if img.attr("src").is_none_or(str::is_empty) {
                    img.style.set("display", "none");
                }
            }
        }
    }

    fn render_cta(mount: &mut Element, presentacion: &Presentacion) {
        let Some(cta) = mount.find_by_id_mut("presentacion-cta") else {
            return;
        };
        let current = cta.text_content();
        let text = presentacion
            .cta_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .or_else(|| Some(current).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| DEFAULT_CTA.to_string());
        cta.set_text(&text);
        if let Some(link) = presentacion.cta_link.as_deref().filter(|l| !l.is_empty()) {
            cta.set_attr("href", link);
        }
    }
}

impl Default for PresentacionRenderer {
    fn default() -> Self {
        Self::new("presentacion")
    }
}

impl Renderer for PresentacionRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        let presentacion = content.presentacion.clone().unwrap_or_default();

        if let (Some(el), Some(titulo)) = (
            mount.find_by_id_mut("presentacion-titulo"),
            presentacion.titulo.as_deref(),
        ) {
            el.set_text(if titulo.is_empty() { DEFAULT_TITLE } else { titulo });
        }
        if let (Some(el), Some(texto)) = (
            mount.find_by_id_mut("presentacion-texto"),
            presentacion.texto.as_deref(),
        ) {
            // Stored markup is trusted
            el.set_inner_html(texto);
        }
        if let (Some(el), Some(lead)) = (
            mount.find_by_id_mut("presentacion-lead"),
            presentacion.lead.as_deref(),
        ) {
            el.set_text(lead);
        }

        Self::render_image(mount, presentacion.imagen.as_deref());
        Self::render_cta(mount, &presentacion);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::site_page;

    fn section() -> Element {
        site_page().find_by_id("presentacion").unwrap().clone()
    }

    fn text(el: &Element, id: &str) -> String {
        el.find_by_id(id).unwrap().text_content()
    }

    #[test]
    fn test_sets_title() {
        let mut el = section();
        let content = ContentDocument {
            presentacion: Some(Presentacion {
                titulo: Some("X".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        PresentacionRenderer::default().render(&mut el, &content);
        assert_eq!(text(&el, "presentacion-titulo"), "X");
    }

    #[test]
    fn test_full_block() {
        let mut el = section();
        let content = ContentDocument {
            presentacion: Some(Presentacion {
                titulo: Some(String::new()),
                texto: Some("<p>Desde <strong>1990</strong></p>".to_string()),
                lead: Some("Calidad".to_string()),
                imagen: Some("taller.jpg".to_string()),
                cta_text: Some("Escribinos".to_string()),
                cta_link: Some("#contacto".to_string()),
            }),
            ..Default::default()
        };
        PresentacionRenderer::default().render(&mut el, &content);

        assert_eq!(text(&el, "presentacion-titulo"), "Quiénes somos");
        assert_eq!(
            el.find_by_id("presentacion-texto").unwrap().inner_html(),
            "<p>Desde <strong>1990</strong></p>"
        );
        assert_eq!(text(&el, "presentacion-lead"), "Calidad");
        let img = el.find_by_id("presentacion-imagen").unwrap();
        assert_eq!(img.attr("src"), Some("taller.jpg"));
        assert_eq!(img.style.get("display"), "");
        let cta = el.find_by_id("presentacion-cta").unwrap();
        assert_eq!(cta.text_content(), "Escribinos");
        assert_eq!(cta.attr("href"), Some("#contacto"));
    }

    #[test]
    fn test_defaults_without_content() {
        let mut el = section();
        PresentacionRenderer::default().render(&mut el, &ContentDocument::default());

        assert_eq!(text(&el, "presentacion-titulo"), "");
        let img = el.find_by_id("presentacion-imagen").unwrap();
        assert_eq!(img.style.get("display"), "none");
        assert_eq!(text(&el, "presentacion-cta"), "Contacto");
    }

    #[test]
    fn test_existing_image_is_kept() {
        let mut el = section();
        el.find_by_id_mut("presentacion-imagen")
            .unwrap()
            .set_attr("src", "default.jpg");
        PresentacionRenderer::default().render(&mut el, &ContentDocument::default());
        let img = el.find_by_id("presentacion-imagen").unwrap();
        assert_eq!(img.attr("src"), Some("default.jpg"));
        assert_eq!(img.style.get("display"), "");
    }
}
