use crate::app::domain::content::ContentDocument;
use crate::app::infrastructure::dom::Element;

use super::Renderer;

/// Welcome title and subtitle inside the hero banner.
pub struct HeroRenderer {
    mount_id: String,
}

impl HeroRenderer {
    pub fn new(mount_id: &str) -> Self {
        Self {
            mount_id: mount_id.to_string(),
        }
    }

    fn title(content: &ContentDocument) -> String {
        if let Some(titulo) = content.welcome.as_ref().map(|w| w.titulo.as_str()).filter(|t| !t.is_empty()) {
            return titulo.to_string();
        }
        match content.empresa.as_ref().map(|e| e.nombre.as_str()).filter(|n| !n.is_empty()) {
            Some(nombre) => format!("Bienvenido a {}", nombre),
            None => "Bienvenido".to_string(),
        }
    }
}

impl Default for HeroRenderer {
    fn default() -> Self {
        Self::new("hero")
    }
}

impl Renderer for HeroRenderer {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn render(&self, mount: &mut Element, content: &ContentDocument) {
        if let Some(title) = mount.find_by_id_mut("hero-title") {
            title.set_text(&Self::title(content));
        }
        if let Some(subtitle) = mount.find_by_id_mut("hero-subtitle") {
            let welcome = content.welcome_or_default();
            subtitle.set_text(&welcome.subtitulo);
        }
    }
}
