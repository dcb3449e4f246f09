//! Share module - email markup and mailto link construction.

pub mod email;
pub mod handlers;

pub use email::{build_mailto_url, build_proposal_email_html, email_subject};
