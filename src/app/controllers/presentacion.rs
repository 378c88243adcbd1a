use crate::app::domain::content::{ContentDocument, Presentacion};
use crate::app::domain::messages::NotificationKind;
use crate::app::infrastructure::dom::Element;
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::content_store::ContentStore;
use crate::app::services::notification::Notifier;
use crate::ui::pages::{input_value, set_input_value};

const FIELDS: [&str; 6] = [
    "presentacion-titulo",
    "presentacion-texto",
    "presentacion-lead",
    "presentacion-imagen",
    "presentacion-cta-text",
    "presentacion-cta-link",
];

/// Presentation block editor.
#[derive(Debug, Default)]
pub struct PresentacionController;

impl PresentacionController {
    pub fn new() -> Self {
        Self
    }

    /// Fill the form from `content`; absent fields show as empty.
    pub fn load_values(&self, page: &mut Element, content: &ContentDocument) {
        let p = content.presentacion.clone().unwrap_or_default();
        let values = [p.titulo, p.texto, p.lead, p.imagen, p.cta_text, p.cta_link];
        for (id, value) in FIELDS.iter().zip(values) {
            set_input_value(page, id, value.as_deref().unwrap_or(""));
        }
    }

    /// Current form values. Every field is stored, empty or not.
    pub fn read_form(&self, page: &Element) -> Presentacion {
        let [titulo, texto, lead, imagen, cta_text, cta_link] =
            FIELDS.map(|id| Some(input_value(page, id).to_string()));
        Presentacion {
            titulo,
            texto,
            lead,
            imagen,
            cta_text,
            cta_link,
        }
    }

    pub fn save<S: StorageAdapter>(
        &self,
        store: &mut ContentStore<S>,
        presentacion: Presentacion,
        notifier: &mut dyn Notifier,
    ) -> ContentDocument {
        let content = store.update_presentacion(presentacion);
        notifier.notify("Presentación guardada", NotificationKind::Success);
        content
    }
}
