use super::content::{EmpresaPatch, Presentacion, Sucursal, Telefono};
use super::theme::{HeroType, StyleProperty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Danger,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Form state of the service editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicioForm {
    pub titulo: String,
    pub descripcion: String,
    pub icono: String,
    /// Position being edited, `-1` for a new service
    pub index: i64,
    pub hidden: bool,
}

impl Default for ServicioForm {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descripcion: String::new(),
            icono: String::new(),
            index: -1,
            hidden: true,
        }
    }
}

/// All events the dashboard reacts to.
/// Each UI control sends one of these; `DashboardState::dispatch` handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Theme colors
    ColorPicked { name: String, value: String },
    ColorTyped { name: String, value: String },
    ResetTheme,

    // Hero background
    HeroTypeChanged(HeroType),
    HeroColorPicked(String),
    HeroColorTyped(String),
    HeroImageChanged(String),
    RefreshPreview,

    // Section styles
    SelectSection(String),
    SectionColorPicked { section: String, property: StyleProperty, value: String },
    SectionColorTyped { section: String, property: StyleProperty, value: String },
    SectionImageChanged { section: String, value: String },
    ClearSectionStyle { section: String, property: StyleProperty },

    // Services
    ShowServicioForm(i64),
    HideServicioForm,
    EditServicioForm(ServicioForm),
    SaveServicio,
    DeleteServicio { index: usize, confirmed: bool },

    // Presentation
    SavePresentacion(Presentacion),

    // Company
    UpdateEmpresa(EmpresaPatch),
    UpdateWelcome { titulo: String, subtitulo: String },
    SaveTelefono { index: i64, telefono: Telefono },
    DeleteTelefono(usize),
    SaveSucursal { index: i64, sucursal: Sucursal },
    DeleteSucursal(usize),
}
