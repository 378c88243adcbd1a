use crate::app::domain::content::{ContentDocument, Servicio};
use crate::app::infrastructure::dom::{Element, Node};

use super::Renderer;

/// One card per service.
pub struct ServiciosRenderer {
    mount_id: String,
}

impl ServiciosRenderer {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }

    pub fn card(servicio: &Servicio) -> Element {
        Element::new("div")
            .with_class("servicio-card")
            .with_child(
                Element::new("div")
                    .with_class("servicio-icono")
                    .with_text(servicio.icon_or_default()),
            )
            .with_child(Element::new("h3").with_text(&servicio.titulo))
            .with_child(Element::new("p").with_text(&servicio.descripcion))
    }
}

impl Default for ServiciosRenderer {
    fn default() -> Self {
        Self::new("servicios-container")
    }
}

impl Renderer for ServiciosRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        let Some(servicios) = &content.servicios else {
            return;
        };
        let cards: Vec<Node> = servicios.iter().map(|s| Self::card(s).into()).collect();
        mount.set_children(cards);
    }
}
