//! Theme and content editor for a small business website.
//!
//! [`SiteApp`] renders the public site; [`DashboardState`] drives the
//! dashboard that edits it. Both persist through a [`StorageAdapter`].

pub mod app;
pub mod ui;

pub use app::infrastructure::logging::init as init_logging;
pub use app::{
    AppError, AppSettings, ContentDocument, DashboardState, FileStorage, MemoryStorage, Message,
    Result, SiteApp, StorageAdapter, ThemeConfig,
};
