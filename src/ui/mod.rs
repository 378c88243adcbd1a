//! View layer: page skeletons and the renderers that fill them.

pub mod pages;
pub mod renderers;
