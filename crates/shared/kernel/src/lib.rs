//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading and the label translation seam.
//!
//! ## Translation
//! Anything that maps a label key to an optional localized string is a [`i18n::Translator`]:
//! ```rust
//! use pagebar_kernel::i18n::{Catalog, Translator};
//!
//! let catalog = Catalog::from_pairs([("Edit blocks", "Blöcke bearbeiten")]);
//! assert_eq!(catalog.label("Edit blocks"), "Blöcke bearbeiten");
//! assert_eq!(catalog.label("Add blocks"), "");
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use pagebar_kernel::config::load_config;
//! let cfg: pagebar_domain::config::SidebarConfig = load_config(Some("pagebar.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod i18n;

pub use pagebar_domain as domain;
