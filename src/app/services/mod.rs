//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Theme and content persistence
//! - Theme editing and application
//! - Bootstrap content loading
//! - Notifications, validation and link helpers

pub mod bootstrap;
pub mod config_store;
pub mod content_store;
pub mod notification;
pub mod styling;
pub mod theme_manager;
pub mod validation;
pub mod whatsapp;
