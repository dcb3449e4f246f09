//! Service catalog module - the read-only offering dataset.
//!
//! Definitions are loaded once at startup from the bundled JSON file and
//! served through lookup, search and sub-domain accessors.

pub mod handlers;
pub mod models;
pub mod store;

pub use models::{CaseStudy, Faq, ServiceDefinition, SubDomain, TechStack};
pub use store::{CatalogError, ServiceCatalog};
