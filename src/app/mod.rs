//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ThemeConfig, ContentDocument, Settings, Messages)
//! - `controllers/` - Dashboard orchestration (services, presentation, contact, section styles)
//! - `services/` - Business operations (stores, theme manager, styling, bootstrap)
//! - `infrastructure/` - External integrations (storage, element tree, logging, error)
//! - `site.rs` - Public site coordinator
//! - `state.rs` - Dashboard coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod site;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, ContentDocument, Message, ThemeConfig};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::storage::{FileStorage, MemoryStorage, StorageAdapter};
pub use site::SiteApp;
pub use state::DashboardState;
