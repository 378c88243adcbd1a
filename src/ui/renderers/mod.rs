//! Renderers for the public site.
//!
//! Each renderer owns one mount point (an element id) and writes content into
//! it. Renderers never touch storage: everything arrives in the
//! [`ContentDocument`]. A page without the mount is left alone.

pub mod contacto;
pub mod footer;
pub mod header;
pub mod hero;
pub mod presentacion;
pub mod servicios;

use crate::app::domain::content::ContentDocument;
use crate::app::infrastructure::dom::Element;

pub use contacto::ContactoRenderer;
pub use footer::FooterRenderer;
pub use header::HeaderRenderer;
pub use hero::HeroRenderer;
pub use presentacion::PresentacionRenderer;
pub use servicios::ServiciosRenderer;

pub trait Renderer {
    /// Id of the element this renderer writes into.
    fn mount_id(&self) -> &str;

    fn render(&self, mount: &mut Element, content: &ContentDocument);
}

/// Find the renderer's mount inside `page` and render into it.
/// Returns `false` when the page has no such mount.
pub fn render_into(page: &mut Element, renderer: &dyn Renderer, content: &ContentDocument) -> bool {
    match page.find_by_id_mut(renderer.mount_id()) {
        Some(mount) => {
            renderer.render(mount, content);
            true
        }
        None => false,
    }
}

/// The full set of site renderers, in page order.
pub fn site_renderers(country_code: &str) -> Vec<Box<dyn Renderer>> {
    vec![
        Box::new(HeaderRenderer::default()),
        Box::new(HeroRenderer::default()),
        Box::new(PresentacionRenderer::default()),
        Box::new(ServiciosRenderer::default()),
        Box::new(ContactoRenderer::new(country_code)),
        Box::new(FooterRenderer::new(country_code)),
    ]
}

/// Run every site renderer against `page`.
pub fn render_site(page: &mut Element, content: &ContentDocument, country_code: &str) {
    for renderer in site_renderers(country_code) {
        render_into(page, renderer.as_ref(), content);
    }
}
