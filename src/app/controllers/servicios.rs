use crate::app::domain::content::{DEFAULT_SERVICE_ICON, Servicio};
use crate::app::domain::messages::{NotificationKind, ServicioForm};
use crate::app::infrastructure::dom::{Element, Node};
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::content_store::ContentStore;
use crate::app::services::notification::Notifier;
use crate::app::services::validation::is_present;
use crate::ui::pages::set_input_value;

pub const LIST_ID: &str = "servicios-list";
pub const FORM_ID: &str = "servicio-form";

/// Service list and editor form of the dashboard.
#[derive(Debug, Default)]
pub struct ServiciosController {
    form: ServicioForm,
}

impl ServiciosController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ServicioForm {
        &self.form
    }

    /// Rebuild the list of services with their edit/delete buttons.
    pub fn render_list(&self, page: &mut Element, servicios: &[Servicio]) {
        let Some(list) = page.find_by_id_mut(LIST_ID) else {
            return;
        };

        if servicios.is_empty() {
            list.set_children(vec![
                Element::new("div")
                    .with_class("control-group")
                    .with_text("No hay servicios definidos.")
                    .into(),
            ]);
            return;
        }

        let items: Vec<Node> = servicios
            .iter()
            .enumerate()
            .map(|(idx, s)| list_item(idx, s).into())
            .collect();
        list.set_children(items);
    }

    /// Open the form, filled from `servicios[index]` or blank for `-1`.
    pub fn show_form(&mut self, index: i64, servicios: &[Servicio]) {
        let existing = usize::try_from(index).ok().map(|i| (i, servicios.get(i)));
        self.form = match existing {
            Some((i, servicio)) => {
                let servicio = servicio.cloned().unwrap_or_default();
                ServicioForm {
                    titulo: servicio.titulo,
                    descripcion: servicio.descripcion,
                    icono: servicio.icono,
                    index: i as i64,
                    hidden: false,
                }
            }
            None => ServicioForm {
                hidden: false,
                ..ServicioForm::default()
            },
        };
    }

    pub fn hide_form(&mut self) {
        self.form.hidden = true;
    }

    /// Replace the field values typed into the form.
    pub fn edit_form(&mut self, form: ServicioForm) {
        self.form = ServicioForm {
            hidden: self.form.hidden,
            ..form
        };
    }

    /// Write the form state into the dashboard inputs.
    pub fn sync_form(&self, page: &mut Element) {
        set_input_value(page, "servicio-titulo", &self.form.titulo);
        set_input_value(page, "servicio-descripcion", &self.form.descripcion);
        set_input_value(page, "servicio-icono", &self.form.icono);
        set_input_value(page, "servicio-index", &self.form.index.to_string());
        if let Some(form) = page.find_by_id_mut(FORM_ID) {
            form.set_hidden(self.form.hidden);
        }
    }

    /// Add or update the service in the form. A missing title is rejected.
    pub fn save<S: StorageAdapter>(
        &mut self,
        store: &mut ContentStore<S>,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !is_present(&self.form.titulo) {
            notifier.notify("El título es requerido", NotificationKind::Danger);
            return false;
        }
        let icono = match self.form.icono.trim() {
            "" => DEFAULT_SERVICE_ICON,
            icono => icono,
        };
        let servicio = Servicio::new(self.form.titulo.trim(), self.form.descripcion.trim(), icono);

        match usize::try_from(self.form.index) {
            Ok(index) => {
                store.update_servicio(index, servicio);
                notifier.notify("Servicio actualizado", NotificationKind::Success);
            }
            Err(_) => {
                store.add_servicio(servicio);
                notifier.notify("Servicio agregado", NotificationKind::Success);
            }
        }
        self.form = ServicioForm::default();
        true
    }

    pub fn delete<S: StorageAdapter>(&mut self, store: &mut ContentStore<S>, index: usize) {
        store.delete_servicio(index);
    }
}

fn list_item(idx: usize, servicio: &Servicio) -> Element {
    let summary = Element::new("div")
        .with_class("servicio-summary")
        .with_child(
            Element::new("div")
                .with_class("servicio-icono")
                .with_text(servicio.icon_or_default()),
        )
        .with_child(
            Element::new("div")
                .with_child(Element::new("strong").with_text(&servicio.titulo))
                .with_child(
                    Element::new("div")
                        .with_class("servicio-descripcion")
                        .with_text(&servicio.descripcion),
                ),
        );

    let actions = Element::new("div")
        .with_class("servicio-actions")
        .with_child(action_button("edit", "btn btn-small", "Editar", idx))
        .with_child(action_button("delete", "btn btn-danger", "Eliminar", idx));

    Element::new("div")
        .with_class("servicio-item")
        .with_child(summary)
        .with_child(actions)
}

fn action_button(action: &str, class: &str, label: &str, idx: usize) -> Element {
    Element::new("button")
        .with_class(class)
        .with_attr("data-action", action)
        .with_attr("data-index", &idx.to_string())
        .with_text(label)
}
