//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the dashboard page:
//! - Service list and editor form
//! - Presentation block form
//! - Phones and branches
//! - Per-section style controls

pub mod contacto;
pub mod presentacion;
pub mod section_controls;
pub mod servicios;
