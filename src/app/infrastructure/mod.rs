//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Key-value storage backends
//! - The element tree standing in for the browser DOM
//! - Logging setup
//! - Error types

pub mod dom;
pub mod error;
pub mod logging;
pub mod storage;
