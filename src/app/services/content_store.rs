//! Page content persistence and list CRUD.
//!
//! Every mutation reads a fresh snapshot from storage, applies a pure update
//! from [`ContentDocument`], and writes the whole document back.

use crate::app::domain::content::{
    ContentDocument, EmpresaPatch, Presentacion, Servicio, Sucursal, Telefono, Welcome, remove_at,
    replace_at,
};
use crate::app::infrastructure::storage::StorageAdapter;

pub const CONTENT_STORAGE_KEY: &str = "imprenta-content-config";

pub struct ContentStore<S: StorageAdapter> {
    storage: S,
    key: String,
}

impl<S: StorageAdapter> ContentStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: CONTENT_STORAGE_KEY.to_string(),
        }
    }

    /// Persisted document, `None` when absent or unreadable.
    pub fn load(&self) -> Option<ContentDocument> {
        let raw = self.storage.get(&self.key)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::error!("Error loading content: {}", e);
                None
            }
        }
    }

    /// Persist the whole document. Returns `false` if the write failed.
    pub fn save(&mut self, content: &ContentDocument) -> bool {
        match serde_json::to_string(content) {
            Ok(json) => self.storage.set(&self.key, &json),
            Err(e) => {
                tracing::error!("Error saving content: {}", e);
                false
            }
        }
    }

    /// Apply `update` to the current snapshot and persist the result.
    fn commit(&mut self, update: impl FnOnce(ContentDocument) -> ContentDocument) -> ContentDocument {
        let next = update(self.load().unwrap_or_default());
        if !self.save(&next) {
            tracing::warn!("Content update was not persisted");
        }
        next
    }

    pub fn export_content(&self) -> String {
        let content = self.load();
        serde_json::to_string_pretty(&content).unwrap_or_else(|_| "null".to_string())
    }

    pub fn update_empresa(&mut self, patch: EmpresaPatch) -> ContentDocument {
        self.commit(|doc| doc.with_empresa(patch))
    }

    pub fn update_welcome(&mut self, titulo: &str, subtitulo: &str) -> ContentDocument {
        self.commit(|doc| doc.with_welcome(titulo, subtitulo))
    }

    pub fn welcome(&self) -> Welcome {
        self.load().map(|c| c.welcome_or_default()).unwrap_or_default()
    }

    pub fn update_presentacion(&mut self, presentacion: Presentacion) -> ContentDocument {
        self.commit(|doc| doc.with_presentacion(presentacion))
    }

    pub fn servicios(&self) -> Vec<Servicio> {
        self.load().map(|c| c.servicios()).unwrap_or_default()
    }

    pub fn add_servicio(&mut self, servicio: Servicio) -> ContentDocument {
        self.commit(|doc| doc.with_servicio_added(servicio))
    }

    /// Replace the service at `index`. Out of range is a silent no-op.
    pub fn update_servicio(&mut self, index: usize, servicio: Servicio) -> ContentDocument {
        if index >= self.servicios().len() {
            tracing::debug!("update_servicio: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.commit(|doc| doc.with_servicio_updated(index, servicio))
    }

    /// Remove the service at `index`. Out of range is a silent no-op.
    pub fn delete_servicio(&mut self, index: usize) -> ContentDocument {
        if index >= self.servicios().len() {
            tracing::debug!("delete_servicio: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.commit(|doc| doc.with_servicio_removed(index))
    }

    pub fn telefonos(&self) -> Vec<Telefono> {
        self.load().map(|c| c.telefonos()).unwrap_or_default()
    }

    pub fn update_telefonos(&mut self, telefonos: Vec<Telefono>) -> ContentDocument {
        self.commit(|doc| doc.with_telefonos(telefonos))
    }

    pub fn add_telefono(&mut self, telefono: Telefono) -> ContentDocument {
        let mut list = self.telefonos();
        list.push(telefono);
        self.update_telefonos(list)
    }

    pub fn update_telefono(&mut self, index: usize, telefono: Telefono) -> ContentDocument {
        let mut list = self.telefonos();
        if !replace_at(&mut list, index, telefono) {
            tracing::debug!("update_telefono: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.update_telefonos(list)
    }

    pub fn delete_telefono(&mut self, index: usize) -> ContentDocument {
        let mut list = self.telefonos();
        if !remove_at(&mut list, index) {
            tracing::debug!("delete_telefono: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.update_telefonos(list)
    }

    pub fn sucursales(&self) -> Vec<Sucursal> {
        self.load().map(|c| c.sucursales()).unwrap_or_default()
    }

    pub fn update_sucursales(&mut self, sucursales: Vec<Sucursal>) -> ContentDocument {
        self.commit(|doc| doc.with_sucursales(sucursales))
    }

    pub fn add_sucursal(&mut self, sucursal: Sucursal) -> ContentDocument {
        let mut list = self.sucursales();
        list.push(sucursal);
        self.update_sucursales(list)
    }

    pub fn update_sucursal(&mut self, index: usize, sucursal: Sucursal) -> ContentDocument {
        let mut list = self.sucursales();
        if !replace_at(&mut list, index, sucursal) {
            tracing::debug!("update_sucursal: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.update_sucursales(list)
    }

    pub fn delete_sucursal(&mut self, index: usize) -> ContentDocument {
        let mut list = self.sucursales();
        if !remove_at(&mut list, index) {
            tracing::debug!("delete_sucursal: index {} out of range", index);
            return self.load().unwrap_or_default();
        }
        self.update_sucursales(list)
    }
}
