use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Technology groups attached to a service. `cloud` is optional and is
/// omitted from rendered documents when absent.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    #[schema(example = json!(["React", "Next.js"]))]
    pub frontend: Vec<String>,
    #[schema(example = json!(["Node.js", "NestJS"]))]
    pub backend: Vec<String>,
    #[schema(example = json!(["PostgreSQL"]))]
    pub database: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    pub client_type: String,
    pub problem: String,
    pub solution: String,
    pub tech_used: Vec<String>,
    pub outcome: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubDomain {
    #[schema(example = "saas-platforms")]
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub how_it_works: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counter_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub case_studies: Vec<CaseStudy>,
}

/// One sellable offering. Immutable once loaded; `id` is the catalog key.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDefinition {
    #[schema(example = "custom-web-development")]
    pub id: String,
    #[schema(example = "Custom Web Application Development")]
    pub name: String,
    pub short_description: String,
    pub overview: String,
    pub business_problems_solved: Vec<String>,
    pub industries: Vec<String>,
    pub key_features: Vec<String>,
    #[serde(default)]
    pub optional_features: Vec<String>,
    pub tech_stack: TechStack,
    #[schema(example = "8-12 weeks")]
    pub timeline_estimation: String,
    #[schema(example = "₹5L-₹10L")]
    pub cost_estimation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counter_questions: Vec<String>,
    #[serde(default)]
    pub sub_domains: Vec<SubDomain>,
}

/// Top-level shape of the bundled dataset file.
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub services: Vec<ServiceDefinition>,
}
