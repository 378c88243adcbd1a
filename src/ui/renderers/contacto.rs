use crate::app::domain::content::{ContentDocument, Sucursal, Telefono};
use crate::app::infrastructure::dom::{Element, Node};
use crate::app::services::whatsapp::{DEFAULT_COUNTRY_CODE, create_whatsapp_link};

use super::Renderer;

/// Phones, email, address, hours and branches.
pub struct ContactoRenderer {
    mount_id: String,
    country_code: String,
}

impl ContactoRenderer {
    pub fn new(country_code: &str) -> Self {
        Self {
            mount_id: "contacto-container".to_string(),
            country_code: country_code.to_string(),
        }
    }

    fn item(label: &str, body: Element) -> Element {
        Element::new("div")
            .with_class("contacto-item")
            .with_child(Element::new("strong").with_text(&format!("{}:", label)))
            .with_child(body)
    }

    fn phone_link(&self, numero: &str) -> Element {
        Element::new("a")
            .with_class("telefono-link whatsapp-link")
            .with_attr("href", &create_whatsapp_link(numero, &self.country_code))
            .with_attr("target", "_blank")
            .with_attr("rel", "noopener")
            .with_attr("title", "Abrir WhatsApp en el navegador")
            .with_child(
                Element::new("i")
                    .with_class("fab fa-whatsapp whatsapp-icon")
                    .with_attr("aria-hidden", "true"),
            )
            .with_text(&format!(" {}", numero))
    }

    fn phone_item(&self, telefono: &Telefono) -> Element {
        let label = match telefono.etiqueta.as_deref().filter(|e| !e.is_empty()) {
            Some(etiqueta) => format!("Teléfono ({})", etiqueta),
            None => "Teléfono".to_string(),
        };
        Self::item(&label, self.phone_link(&telefono.numero))
    }

    fn sucursal_card(&self, sucursal: &Sucursal) -> Element {
        let mut card = Element::new("div")
            .with_class("sucursal-card")
            .with_child(Element::new("h4").with_text(&sucursal.nombre))
            .with_child(Element::new("p").with_text(&sucursal.direccion));
        if let Some(telefono) = sucursal.telefono.as_deref().filter(|t| !t.is_empty()) {
            card.append(Element::new("p").with_child(self.phone_link(telefono)));
        }
        if let Some(horario) = sucursal.horario.as_deref().filter(|h| !h.is_empty()) {
            card.append(Element::new("p").with_text(horario));
        }
        if let Some(email) = sucursal.email.as_deref().filter(|e| !e.is_empty()) {
            card.append(
                Element::new("a")
                    .with_attr("href", &format!("mailto:{}", email))
                    .with_text(email),
            );
        }
        card
    }
}

impl Default for ContactoRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }
}

impl Renderer for ContactoRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        let Some(empresa) = &content.empresa else {
            return;
        };

        let mut grid = Element::new("div").with_class("contacto-grid");
        for telefono in empresa.phone_list() {
            grid.append(self.phone_item(&telefono));
        }
        grid.append(Self::item(
            "Email",
            Element::new("a")
                .with_attr("href", &format!("mailto:{}", empresa.email))
                .with_text(&empresa.email),
        ));
        grid.append(Self::item("Dirección", Element::new("p").with_text(&empresa.direccion)));
        grid.append(Self::item("Horario", Element::new("p").with_text(&empresa.horario)));

        let mut children: Vec<Node> = vec![grid.into()];
        if !empresa.sucursales.is_empty() {
            children.push(
                Element::new("div")
                    .with_class("sucursales")
                    .with_child(Element::new("h3").with_text("Sucursales"))
                    .with_children(empresa.sucursales.iter().map(|s| self.sucursal_card(s)))
                    .into(),
            );
        }
        mount.set_children(children);
    }
}
