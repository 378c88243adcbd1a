use chrono::Datelike;

use crate::app::domain::content::{ContentDocument, RedesSociales};
use crate::app::infrastructure::dom::Element;
use crate::app::services::whatsapp::{DEFAULT_COUNTRY_CODE, create_whatsapp_link};

use super::Renderer;

const DEFAULT_NAME: &str = "Imprenta";

pub struct FooterRenderer {
    mount_id: String,
    country_code: String,
    /// Copyright year; the current year when unset
    year: Option<i32>,
}

impl FooterRenderer {
    pub fn new(country_code: &str) -> Self {
        Self {
            mount_id: "footer".to_string(),
            country_code: country_code.to_string(),
            year: None,
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    fn section(title: &str) -> Element {
        Element::new("div")
            .with_class("footer-section")
            .with_child(Element::new("h3").with_text(title))
    }

    fn social_links(redes: &RedesSociales) -> Option<Element> {
        let links: Vec<Element> = [("Facebook", &redes.facebook), ("Instagram", &redes.instagram)]
            .into_iter()
            .filter_map(|(label, url)| {
                let url = url.as_deref().filter(|u| !u.is_empty())?;
                Some(
                    Element::new("a")
                        .with_attr("href", url)
                        .with_attr("target", "_blank")
                        .with_attr("rel", "noopener")
                        .with_text(label),
                )
            })
            .collect();
        if links.is_empty() {
            return None;
        }
        Some(
            Element::new("div")
                .with_class("redes-sociales")
                .with_children(links),
        )
    }
}

impl Default for FooterRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }
}

impl Renderer for FooterRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        let empresa = content.empresa.clone().unwrap_or_default();
        let nombre = if empresa.nombre.is_empty() {
            DEFAULT_NAME
        } else {
            empresa.nombre.as_str()
        };

        let mut contacto = Self::section("Contacto");
        if let Some(telefono) = empresa.main_phone() {
            contacto.append(
                Element::new("p").with_child(
                    Element::new("a")
                        .with_class("footer-telefono-link whatsapp-link")
                        .with_attr("href", &create_whatsapp_link(telefono, &self.country_code))
                        .with_attr("target", "_blank")
                        .with_attr("rel", "noopener")
                        .with_attr("title", "Abrir WhatsApp en el navegador")
                        .with_child(
                            Element::new("i")
                                .with_class("fab fa-whatsapp whatsapp-icon")
                                .with_attr("aria-hidden", "true"),
                        )
                        .with_text(&format!(" {}", telefono)),
                ),
            );
        }
        if !empresa.email.is_empty() {
            contacto.append(Element::new("p").with_text(&empresa.email));
        }

        let mut footer_content = Element::new("div")
            .with_class("footer-content")
            .with_child(
                Self::section(nombre).with_child(Element::new("p").with_text(&empresa.direccion)),
            )
            .with_child(contacto);
        let redes = content.redes_sociales.clone().unwrap_or_default();
        if let Some(links) = Self::social_links(&redes) {
            footer_content.append(Self::section("Síguenos").with_child(links));
        }

        let bottom = Element::new("div").with_class("footer-bottom").with_child(
            Element::new("p").with_text(&format!(
                "© {} {}. Todos los derechos reservados.",
                self.year(),
                nombre
            )),
        );

        let container = Element::new("div")
            .with_class("container")
            .with_child(footer_content)
            .with_child(bottom);
        mount.set_children(vec![container.into()]);
    }
}
