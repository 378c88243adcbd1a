//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme configuration and the section registry
//! - Business content
//! - Application settings
//! - Message and notification types for the event system

pub mod content;
pub mod messages;
pub mod settings;
pub mod theme;

pub use content::{
    ContentDocument, Empresa, EmpresaPatch, Presentacion, RedesSociales, Servicio, Sucursal,
    Telefono, Welcome,
};
pub use messages::{Message, Notification, NotificationKind, ServicioForm};
pub use settings::{AppSettings, BootstrapSource};
pub use theme::{ColorName, HeroConfig, HeroType, SectionStyle, StyleProperty, ThemeConfig};
