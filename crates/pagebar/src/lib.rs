//! Facade crate for the page editor sidebar.
//! Re-exports domain/kernel primitives and the sidebar slice.
//! Keep this crate thin: it composes other crates and holds no logic of its own.
//!
//! ## Usage
//! - Add `pagebar`, with the `client` feature when the Dioxus component is needed.
//! - Build a [`sidebar::SidebarModel`] directly, or mount [`sidebar::Sidebar`] in a Dioxus tree.

pub use pagebar_domain as domain;
pub use pagebar_kernel as kernel;
pub use pagebar_sidebar as sidebar;

/// Compile-time feature introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "sidebar",
        #[cfg(feature = "client")]
        "client",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
