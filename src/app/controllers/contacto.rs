//! Phone and branch editors.
//!
//! Indices follow the list order; `-1` means "add".

use crate::app::domain::content::{Sucursal, Telefono};
use crate::app::domain::messages::NotificationKind;
use crate::app::infrastructure::dom::{Element, Node};
use crate::app::infrastructure::storage::StorageAdapter;
use crate::app::services::content_store::ContentStore;
use crate::app::services::notification::Notifier;
use crate::app::services::validation::is_present;

pub const TELEFONOS_LIST_ID: &str = "telefonos-list";
pub const SUCURSALES_LIST_ID: &str = "sucursales-list";

#[derive(Debug, Default)]
pub struct ContactoController;

impl ContactoController {
    pub fn new() -> Self {
        Self
    }

    pub fn save_telefono<S: StorageAdapter>(
        &self,
        store: &mut ContentStore<S>,
        index: i64,
        telefono: Telefono,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !is_present(&telefono.numero) {
            notifier.notify("El número de teléfono es requerido", NotificationKind::Danger);
            return false;
        }
        let telefono = Telefono {
            numero: telefono.numero.trim().to_string(),
            etiqueta: telefono
                .etiqueta
                .map(|e| e.trim().to_string())
                .filter(|e| !e.is_empty()),
        };

        match usize::try_from(index) {
            Ok(i) => {
                store.update_telefono(i, telefono);
                notifier.notify("Teléfono actualizado", NotificationKind::Success);
            }
            Err(_) => {
                store.add_telefono(telefono);
                notifier.notify("Teléfono agregado", NotificationKind::Success);
            }
        }
        true
    }

    pub fn delete_telefono<S: StorageAdapter>(
        &self,
        store: &mut ContentStore<S>,
        index: usize,
        notifier: &mut dyn Notifier,
    ) {
        if index >= store.telefonos().len() {
            tracing::debug!("No phone at index {}", index);
            return;
        }
        store.delete_telefono(index);
        notifier.notify("Teléfono eliminado", NotificationKind::Success);
    }

    pub fn save_sucursal<S: StorageAdapter>(
        &self,
        store: &mut ContentStore<S>,
        index: i64,
        sucursal: Sucursal,
        notifier: &mut dyn Notifier,
    ) -> bool {
        if !is_present(&sucursal.nombre) {
            notifier.notify("El nombre de la sucursal es requerido", NotificationKind::Danger);
            return false;
        }
        if !is_present(&sucursal.direccion) {
            notifier.notify("La dirección de la sucursal es requerida", NotificationKind::Danger);
            return false;
        }
        let sucursal = Sucursal {
            nombre: sucursal.nombre.trim().to_string(),
            direccion: sucursal.direccion.trim().to_string(),
            telefono: optional(sucursal.telefono),
            horario: optional(sucursal.horario),
            email: optional(sucursal.email),
        };

        match usize::try_from(index) {
            Ok(i) => {
                store.update_sucursal(i, sucursal);
                notifier.notify("Sucursal actualizada", NotificationKind::Success);
            }
            Err(_) => {
                store.add_sucursal(sucursal);
                notifier.notify("Sucursal agregada", NotificationKind::Success);
            }
        }
        true
    }

    pub fn delete_sucursal<S: StorageAdapter>(
        &self,
        store: &mut ContentStore<S>,
        index: usize,
        notifier: &mut dyn Notifier,
    ) {
        if index >= store.sucursales().len() {
            tracing::debug!("No branch at index {}", index);
            return;
        }
        store.delete_sucursal(index);
        notifier.notify("Sucursal eliminada", NotificationKind::Success);
    }

    pub fn render_telefonos(&self, page: &mut Element, telefonos: &[Telefono]) {
        let items = telefonos.iter().enumerate().map(|(idx, t)| {
            let label = match t.etiqueta.as_deref() {
                Some(etiqueta) => format!("{} ({})", t.numero, etiqueta),
                None => t.numero.clone(),
            };
            list_item("telefono", idx, &label)
        });
        render_list(page, TELEFONOS_LIST_ID, items.collect(), "No hay teléfonos definidos.");
    }

    pub fn render_sucursales(&self, page: &mut Element, sucursales: &[Sucursal]) {
        let items = sucursales
            .iter()
            .enumerate()
            .map(|(idx, s)| list_item("sucursal", idx, &format!("{} - {}", s.nombre, s.direccion)));
        render_list(page, SUCURSALES_LIST_ID, items.collect(), "No hay sucursales definidas.");
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn render_list(page: &mut Element, list_id: &str, items: Vec<Element>, placeholder: &str) {
    let Some(list) = page.find_by_id_mut(list_id) else {
        return;
    };
    if items.is_empty() {
        list.set_children(vec![
            Element::new("div")
                .with_class("control-group")
                .with_text(placeholder)
                .into(),
        ]);
        return;
    }
    list.set_children(items.into_iter().map(Node::from).collect());
}

fn list_item(kind: &str, idx: usize, label: &str) -> Element {
    Element::new("div")
        .with_class(&format!("{}-item", kind))
        .with_child(Element::new("span").with_text(label))
        .with_child(
            Element::new("button")
                .with_class("btn btn-small")
                .with_attr("data-action", &format!("edit-{}", kind))
                .with_attr("data-index", &idx.to_string())
                .with_text("Editar"),
        )
        .with_child(
            Element::new("button")
                .with_class("btn btn-danger")
                .with_attr("data-action", &format!("delete-{}", kind))
                .with_attr("data-index", &idx.to_string())
                .with_text("Eliminar"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::messages::Notification;
    use crate::app::infrastructure::storage::MemoryStorage;
    use crate::ui::pages::dashboard_page;

    fn telefono(numero: &str) -> Telefono {
        Telefono {
            numero: numero.to_string(),
            etiqueta: None,
        }
    }

    #[test]
    fn test_phone_crud() {
        let mut store = ContentStore::new(MemoryStorage::new());
        let mut outbox: Vec<Notification> = Vec::new();
        let ctrl = ContactoController::new();

        assert!(ctrl.save_telefono(&mut store, -1, telefono(" 1111 "), &mut outbox));
        assert!(ctrl.save_telefono(&mut store, -1, telefono("2222"), &mut outbox));
        assert!(ctrl.save_telefono(&mut store, 1, telefono("3333"), &mut outbox));
        assert_eq!(store.telefonos(), vec![telefono("1111"), telefono("3333")]);
        assert_eq!(
            store.load().unwrap().empresa.unwrap().telefono.as_deref(),
            Some("1111")
        );

        ctrl.delete_telefono(&mut store, 0, &mut outbox);
        ctrl.delete_telefono(&mut store, 7, &mut outbox);
        assert_eq!(store.telefonos(), vec![telefono("3333")]);

        let messages: Vec<&str> = outbox.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Teléfono agregado", "Teléfono agregado", "Teléfono actualizado", "Teléfono eliminado"]
        );
    }

    #[test]
    fn test_empty_phone_is_rejected() {
        let mut store = ContentStore::new(MemoryStorage::new());
        let mut outbox: Vec<Notification> = Vec::new();
        assert!(!ContactoController::new().save_telefono(&mut store, -1, telefono("  "), &mut outbox));
        assert!(store.load().is_none());
        assert_eq!(outbox[0].kind, NotificationKind::Danger);
    }

    #[test]
    fn test_branch_crud_and_validation() {
        let mut store = ContentStore::new(MemoryStorage::new());
        let mut outbox: Vec<Notification> = Vec::new();
        let ctrl = ContactoController::new();

        let missing_address = Sucursal {
            nombre: "Centro".to_string(),
            ..Default::default()
        };
        assert!(!ctrl.save_sucursal(&mut store, -1, missing_address, &mut outbox));
        assert_eq!(outbox[0].message, "La dirección de la sucursal es requerida");

        let centro = Sucursal {
            nombre: "Centro".to_string(),
            direccion: "Av. 1".to_string(),
            horario: Some("".to_string()),
            ..Default::default()
        };
        assert!(ctrl.save_sucursal(&mut store, -1, centro, &mut outbox));
        let stored = store.sucursales();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].horario, None);

        ctrl.delete_sucursal(&mut store, 0, &mut outbox);
        assert!(store.sucursales().is_empty());
        assert_eq!(outbox.last().unwrap().message, "Sucursal eliminada");
    }

    #[test]
    fn test_render_lists() {
        let mut page = dashboard_page();
        let ctrl = ContactoController::new();
        ctrl.render_telefonos(
            &mut page,
            &[Telefono {
                numero: "1111".to_string(),
                etiqueta: Some("Ventas".to_string()),
            }],
        );
        ctrl.render_sucursales(&mut page, &[]);

        let phones = page.find_by_id(TELEFONOS_LIST_ID).unwrap();
        assert!(phones.text_content().contains("1111 (Ventas)"));
        assert_eq!(
            page.find_by_id(SUCURSALES_LIST_ID).unwrap().text_content(),
            "No hay sucursales definidas."
        );
    }
}
