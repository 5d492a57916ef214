//! # Domain Models
//!
//! Pure sidebar types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: data and simple helpers only; composition and rendering live in the sidebar slice.

pub mod config;
pub mod constants;
pub mod features;
pub mod position;
pub mod sticky;
