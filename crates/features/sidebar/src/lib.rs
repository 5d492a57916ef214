//! Sidebar slice: decides which toolbar actions appear, in what order, with
//! which labels, and where the bar anchors itself.
//!
//! [`compose`] and [`resolve_position`] are pure and run on every render.
//! The `client` feature adds the [`Sidebar`] Dioxus component on top of them.

mod composer;
mod model;
mod position;
mod slot;

#[cfg(feature = "client")]
mod component;

pub use composer::compose;
pub use model::SidebarModel;
pub use position::resolve_position;
pub use slot::{ActionSlot, BuiltinAction, SidebarCommand, SlotAction, SlotButton};

#[cfg(feature = "client")]
pub use component::{Sidebar, SidebarProps};
