//! Process counters for the proposal pipeline.
//!
//! Request-level metrics come from the Prometheus middleware; these track
//! the pipeline stages the middleware cannot see.

use lazy_static::lazy_static;
use prometheus::{IntCounter, Registry};

lazy_static! {
    /// Proposals composed since startup, across both presets.
    pub static ref PROPOSALS_COMPOSED: IntCounter = IntCounter::new(
        "proposals_composed_total",
        "Number of proposals composed since startup"
    )
    .expect("valid metric");

    /// PDF documents exported since startup.
    pub static ref PDF_EXPORTS: IntCounter = IntCounter::new(
        "pdf_exports_total",
        "Number of PDF exports completed since startup"
    )
    .expect("valid metric");

    /// Email share payloads built since startup.
    pub static ref EMAIL_SHARES: IntCounter = IntCounter::new(
        "email_shares_total",
        "Number of email share payloads built since startup"
    )
    .expect("valid metric");
}

/// Register all pipeline counters with the exporter's registry.
///
/// Call once at startup, before the server accepts traffic.
pub fn register_with(registry: &Registry) {
    registry
        .register(Box::new(PROPOSALS_COMPOSED.clone()))
        .expect("Failed to register proposals_composed_total");
    registry
        .register(Box::new(PDF_EXPORTS.clone()))
        .expect("Failed to register pdf_exports_total");
    registry
        .register(Box::new(EMAIL_SHARES.clone()))
        .expect("Failed to register email_shares_total");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_register_and_gather() {
        let registry = Registry::new();
        register_with(&registry);

        let families = registry.gather();
        assert_eq!(families.len(), 3);

        let names: Vec<&str> = families.iter().map(|f| f.get_name()).collect();
        assert!(names.contains(&"proposals_composed_total"));
        assert!(names.contains(&"pdf_exports_total"));
        assert!(names.contains(&"email_shares_total"));
    }

    #[test]
    fn test_counter_increments() {
        let before = PROPOSALS_COMPOSED.get();
        PROPOSALS_COMPOSED.inc();
        assert_eq!(PROPOSALS_COMPOSED.get(), before + 1);
    }
}
