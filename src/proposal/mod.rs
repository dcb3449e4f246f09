//! Proposal composition module - business logic for building proposal
//! documents from form input and a service definition.
//!
//! The composer is a pure function over its inputs plus an injected stamp
//! source (date + id provider). Two template presets are supported:
//! - `Branded` - the full thirteen-section document
//! - `Classic` - a compact document built from the derived narrative fields

pub mod branded;
pub mod classic;
pub mod composer;
pub mod handlers;
pub mod models;
pub mod stamp;
pub mod validation;

pub use composer::compose;
pub use models::{
    ComposeOptions, GeneratedProposal, MilestoneRow, ProposalFormData, TemplatePreset,
};
pub use stamp::{FixedStamp, StampSource, SystemStamp};
