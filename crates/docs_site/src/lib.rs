//! Typed documentation-site descriptor and emitter.
//!
//! The site is built by an external static docs tool that reads a CommonJS
//! `docusaurus.config.js` plus a `sidebars.js` module. This crate keeps the
//! descriptor as versioned TOML, validates it, and emits both modules.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cli;
pub mod error;
pub mod loader;
pub mod render;
pub mod site;

pub use error::{DocsError, DocsErrorCategory, DocsResult};
pub use loader::{resolve_config_path, ConfigLoader, CONFIG_PATH_ENV, DEFAULT_CONFIG_FILE};
pub use render::{render_docusaurus_config, render_sidebars, JsExpr};
pub use site::{DocsPreset, Sidebar, SidebarItem, SiteConfig, ThemeConfig};
