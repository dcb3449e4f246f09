//! Editor module - the typed toolbar command set for proposal editing.
//!
//! Embedding hosts own the actual rich text widget; this module defines
//! the actions the toolbar can issue, how link input is normalized, and
//! the surface trait actions are applied through.

pub mod actions;
pub mod handlers;
pub mod surface;

pub use actions::{
    all_action_descriptors, normalize_link_url, ActionDescriptor, Alignment, ToolbarAction,
};
pub use surface::EditingSurface;
