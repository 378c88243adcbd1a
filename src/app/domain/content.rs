//! Editable business content.
//!
//! Updates are pure: each `with_*` method consumes a snapshot and returns the
//! next one. Persisting the result is the caller's job.

use serde::{Deserialize, Serialize};

/// Icon shown for a service without one.
pub const DEFAULT_SERVICE_ICON: &str = "📄";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empresa: Option<Empresa>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub welcome: Option<Welcome>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentacion: Option<Presentacion>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servicios: Option<Vec<Servicio>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redes_sociales: Option<RedesSociales>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    #[serde(default)]
    pub nombre: String,

    /// Legacy single phone, kept in sync with `telefonos[0]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefonos: Option<Vec<Telefono>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sucursales: Vec<Sucursal>,

    #[serde(default)]
    pub direccion: String,

    #[serde(default)]
    pub horario: String,

    #[serde(default)]
    pub email: String,
}

/// Partial update of the scalar company fields; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmpresaPatch {
    pub nombre: Option<String>,
    pub direccion: Option<String>,
    pub horario: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Telefono {
    pub numero: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etiqueta: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sucursal {
    pub nombre: String,

    #[serde(default)]
    pub direccion: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telefono: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horario: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Welcome {
    #[serde(default)]
    pub titulo: String,

    #[serde(default)]
    pub subtitulo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentacion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,

    /// Trusted markup, rendered verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texto: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagen: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Servicio {
    pub titulo: String,

    #[serde(default)]
    pub descripcion: String,

    #[serde(default)]
    pub icono: String,
}

impl Servicio {
    pub fn new(titulo: &str, descripcion: &str, icono: &str) -> Self {
        Self {
            titulo: titulo.to_string(),
            descripcion: descripcion.to_string(),
            icono: icono.to_string(),
        }
    }

    pub fn icon_or_default(&self) -> &str {
        if self.icono.is_empty() {
            DEFAULT_SERVICE_ICON
        } else {
            &self.icono
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RedesSociales {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Replace `items[index]` if it exists. Returns whether anything changed.
pub fn replace_at<T>(items: &mut [T], index: usize, item: T) -> bool {
    match items.get_mut(index) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Remove `items[index]` if it exists. Returns whether anything changed.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) -> bool {
    if index < items.len() {
        items.remove(index);
        true
    } else {
        false
    }
}

impl Empresa {
    pub fn apply(&mut self, patch: EmpresaPatch) {
        if let Some(nombre) = patch.nombre {
            self.nombre = nombre;
        }
        if let Some(direccion) = patch.direccion {
            self.direccion = direccion;
        }
        if let Some(horario) = patch.horario {
            self.horario = horario;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }

    /// Phone list, falling back to the legacy single phone.
    pub fn phone_list(&self) -> Vec<Telefono> {
        match (&self.telefonos, &self.telefono) {
            (Some(list), _) => list.clone(),
            (None, Some(numero)) if !numero.is_empty() => vec![Telefono {
                numero: numero.clone(),
                etiqueta: Some("Principal".to_string()),
            }],
            _ => Vec::new(),
        }
    }

    /// Main phone shown on the site: the legacy field, else the first listed one.
    pub fn main_phone(&self) -> Option<&str> {
        self.telefono
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| {
                self.telefonos
                    .as_ref()
                    .and_then(|list| list.first())
                    .map(|t| t.numero.as_str())
            })
    }
}

impl ContentDocument {
    pub fn servicios(&self) -> Vec<Servicio> {
        self.servicios.clone().unwrap_or_default()
    }

    pub fn telefonos(&self) -> Vec<Telefono> {
        self.empresa.as_ref().map(Empresa::phone_list).unwrap_or_default()
    }

    pub fn sucursales(&self) -> Vec<Sucursal> {
        self.empresa
            .as_ref()
            .map(|e| e.sucursales.clone())
            .unwrap_or_default()
    }

    /// Top-level fields of `stored` replace the ones in `self`.
    pub fn overlaid_with(self, stored: ContentDocument) -> Self {
        ContentDocument {
            empresa: stored.empresa.or(self.empresa),
            welcome: stored.welcome.or(self.welcome),
            presentacion: stored.presentacion.or(self.presentacion),
            servicios: stored.servicios.or(self.servicios),
            redes_sociales: stored.redes_sociales.or(self.redes_sociales),
        }
    }

    pub fn welcome_or_default(&self) -> Welcome {
        self.welcome.clone().unwrap_or_default()
    }

    pub fn with_servicio_added(mut self, servicio: Servicio) -> Self {
        self.servicios.get_or_insert_with(Vec::new).push(servicio);
        self
    }

    pub fn with_servicio_updated(mut self, index: usize, servicio: Servicio) -> Self {
        if let Some(list) = self.servicios.as_mut() {
            replace_at(list, index, servicio);
        }
        self
    }

    pub fn with_servicio_removed(mut self, index: usize) -> Self {
        if let Some(list) = self.servicios.as_mut() {
            remove_at(list, index);
        }
        self
    }

    /// Replace the phone list and mirror its first entry into the legacy field.
    pub fn with_telefonos(mut self, telefonos: Vec<Telefono>) -> Self {
        let empresa = self.empresa.get_or_insert_with(Empresa::default);
        empresa.telefono = telefonos.first().map(|t| t.numero.clone());
        empresa.telefonos = Some(telefonos);
        self
    }

    pub fn with_sucursales(mut self, sucursales: Vec<Sucursal>) -> Self {
        self.empresa.get_or_insert_with(Empresa::default).sucursales = sucursales;
        self
    }

    pub fn with_empresa(mut self, patch: EmpresaPatch) -> Self {
        self.empresa.get_or_insert_with(Empresa::default).apply(patch);
        self
    }

    pub fn with_welcome(mut self, titulo: &str, subtitulo: &str) -> Self {
        self.welcome = Some(Welcome {
            titulo: titulo.to_string(),
            subtitulo: subtitulo.to_string(),
        });
        self
    }

    pub fn with_presentacion(mut self, presentacion: Presentacion) -> Self {
        self.presentacion = Some(presentacion);
        self
    }
}
