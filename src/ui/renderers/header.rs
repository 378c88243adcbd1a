use crate::app::domain::content::ContentDocument;
use crate::app::infrastructure::dom::Element;

use super::Renderer;

/// Logo and navigation.
pub struct HeaderRenderer {
    mount_id: String,
}

impl HeaderRenderer {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new("header")
    }
}

impl Renderer for HeaderRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        let Some(empresa) = &content.empresa else {
            return;
        };

        let nav = Element::new("nav")
            .with_class("header-nav")
            .with_child(Element::new("a").with_attr("href", "#servicios").with_text("Servicios"))
            .with_child(Element::new("a").with_attr("href", "#contacto").with_text("Contacto"));

        let inner = Element::new("div").with_class("container").with_child(
            Element::new("div")
                .with_class("header-content")
                .with_child(Element::new("h1").with_class("logo").with_text(&empresa.nombre))
                .with_child(nav),
        );
        mount.set_children(vec![inner.into()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::content::Empresa;

    #[test]
    fn test_renders_logo_and_nav() {
        let mut mount = Element::new("header").with_id("header");
        let content = ContentDocument {
            empresa: Some(Empresa {
                nombre: "Imprenta <Sur>".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        HeaderRenderer::default().render(&mut mount, &content);

        let html = mount.inner_html();
        assert!(html.contains("<h1 class=\"logo\">Imprenta &lt;Sur&gt;</h1>"));
        assert!(html.contains("href=\"#servicios\""));
        assert!(html.contains("href=\"#contacto\""));
    }

    #[test]
    fn test_without_empresa_leaves_mount_untouched() {
        let mut mount = Element::new("header").with_text("static");
        HeaderRenderer::default().render(&mut mount, &ContentDocument::default());
        assert_eq!(mount.text_content(), "static");
    }
}
