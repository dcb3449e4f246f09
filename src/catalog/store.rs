//! In-memory catalog store with an id index built at load time.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::{CatalogFile, ServiceDefinition, SubDomain};

const CATALOG_FILE: &str = "services.json";

/// Errors that can occur while loading the catalog dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog dataset: {0}")]
    Io(#[source] std::io::Error),
    #[error("failed to parse catalog dataset: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("duplicate service id '{0}' in catalog dataset")]
    DuplicateId(String),
}

/// Read-only service catalog. Order of the dataset file is preserved;
/// id lookups go through a hash index.
pub struct ServiceCatalog {
    services: Vec<ServiceDefinition>,
    index: HashMap<String, usize>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<ServiceDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(services.len());
        for (pos, service) in services.iter().enumerate() {
            if index.insert(service.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(service.id.clone()));
            }
        }
        Ok(Self { services, index })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(file.services)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(CatalogError::Io)?;
        Self::from_json(&json)
    }

    /// Load the dataset bundled with the crate.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::from_file(&get_static_dir().join(CATALOG_FILE))
    }

    /// All services in dataset order.
    pub fn all(&self) -> &[ServiceDefinition] {
        &self.services
    }

    pub fn by_id(&self, id: &str) -> Option<&ServiceDefinition> {
        self.index.get(id).map(|pos| &self.services[*pos])
    }

    pub fn sub_domain(&self, service_id: &str, sub_domain_id: &str) -> Option<&SubDomain> {
        self.by_id(service_id)?
            .sub_domains
            .iter()
            .find(|sub| sub.id == sub_domain_id)
    }

    /// Case-insensitive substring search over name, short description and
    /// industries. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&ServiceDefinition> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.services.iter().collect();
        }
        self.services
            .iter()
            .filter(|service| {
                service.name.to_lowercase().contains(&needle)
                    || service.short_description.to_lowercase().contains(&needle)
                    || service
                        .industries
                        .iter()
                        .any(|industry| industry.to_lowercase().contains(&needle))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Get the static assets directory path.
pub fn get_static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::TechStack;

    fn sample(id: &str, name: &str) -> ServiceDefinition {
        ServiceDefinition {
            id: id.to_string(),
            name: name.to_string(),
            short_description: "Short blurb".to_string(),
            overview: "Overview".to_string(),
            business_problems_solved: vec!["Manual work".to_string()],
            industries: vec!["Healthcare".to_string()],
            key_features: vec!["Feature A".to_string()],
            optional_features: vec![],
            tech_stack: TechStack {
                frontend: vec!["React".to_string()],
                backend: vec!["Node.js".to_string()],
                database: vec!["PostgreSQL".to_string()],
                cloud: None,
            },
            timeline_estimation: "8-12 weeks".to_string(),
            cost_estimation: "₹5L-₹10L".to_string(),
            faqs: vec![],
            counter_questions: vec![],
            sub_domains: vec![],
        }
    }

    #[test]
    fn test_by_id_hits_and_misses() {
        let catalog = ServiceCatalog::new(vec![sample("a", "Alpha"), sample("b", "Beta")]).unwrap();
        assert_eq!(catalog.by_id("b").unwrap().name, "Beta");
        assert!(catalog.by_id("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = ServiceCatalog::new(vec![sample("a", "Alpha"), sample("a", "Alias")]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "a"));
    }

    #[test]
    fn test_search_matches_industries_case_insensitive() {
        let catalog = ServiceCatalog::new(vec![sample("a", "Alpha"), sample("b", "Beta")]).unwrap();
        let hits = catalog.search("healthCARE");
        assert_eq!(hits.len(), 2);
        let hits = catalog.search("beta");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn test_blank_search_returns_all() {
        let catalog = ServiceCatalog::new(vec![sample("a", "Alpha")]).unwrap();
        assert_eq!(catalog.search("   ").len(), 1);
    }

    #[test]
    fn test_bundled_dataset_loads() {
        let catalog = ServiceCatalog::load_default().unwrap();
        assert!(!catalog.is_empty());
        for service in catalog.all() {
            assert!(!service.key_features.is_empty(), "{} has no features", service.id);
        }
    }
}
