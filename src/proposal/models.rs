use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Form input for one proposal. Only `client_name` and `industry` are
/// required at the boundary; every other field has fallback semantics and
/// the composer accepts blank values as-is.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProposalFormData {
    #[schema(example = "Acme Corp")]
    pub client_name: String,
    /// Company used in the "Prepared For" line; falls back to `client_name`.
    pub client_company: String,
    /// Falls back to the selected service's name.
    pub project_name: String,
    /// Falls back to "1.0".
    pub document_version: String,
    /// Falls back to today's date in long form, e.g. "5 December 2025".
    pub proposal_date: String,
    #[schema(example = "Healthcare")]
    pub industry: String,
    /// Blend field appended to the product-vision section when non-blank.
    pub project_vision_summary: String,
    /// Blend field appended to the scope-of-work section when non-blank.
    pub project_scope_summary: String,
    /// Falls back to the service's timeline estimation.
    pub timeline: String,
    /// Falls back to the service's cost estimation.
    pub budget: String,
    /// Blend field; also appended as context to the problem statement.
    pub notes: String,
    #[schema(example = "custom-web-development")]
    pub service_id: String,
    pub service_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_domain_id: Option<String>,
}

/// One row of the payment-milestone table. The standard schedule carries
/// static sample amounts; it is template content, never derived from the
/// resolved budget.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneRow {
    pub sn: u32,
    pub milestone: String,
    pub duration: String,
    pub percentage: String,
    pub amount: String,
}

impl MilestoneRow {
    fn new(sn: u32, milestone: &str, duration: &str, percentage: &str, amount: &str) -> Self {
        Self {
            sn,
            milestone: milestone.to_string(),
            duration: duration.to_string(),
            percentage: percentage.to_string(),
            amount: amount.to_string(),
        }
    }

    /// The standard five-row payment schedule emitted when no override is
    /// supplied.
    pub fn standard_schedule() -> Vec<MilestoneRow> {
        vec![
            MilestoneRow::new(1, "Upon signing the contract", "Kickstart", "20%", "300000"),
            MilestoneRow::new(
                2,
                "Upon completing design and documentation",
                "5 Weeks",
                "10%",
                "150000",
            ),
            MilestoneRow::new(
                3,
                "Upon completing the development phase (Milestone basis)",
                "10-12 Weeks",
                "60%",
                "900000",
            ),
            MilestoneRow::new(
                4,
                "Upon final delivery and handover",
                "Completion",
                "10%",
                "150000",
            ),
            MilestoneRow::new(5, "Support", "2 Months", "NA", "NA"),
        ]
    }
}

/// Which document family to render.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplatePreset {
    /// The full thirteen-section company document.
    #[default]
    Branded,
    /// A compact document assembled from the derived narrative fields.
    Classic,
}

/// Per-call composition options.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub preset: TemplatePreset,
    /// Replacement for the standard milestone schedule, when supplied.
    pub milestones: Option<Vec<MilestoneRow>>,
}

/// The composed document. Immutable once created; after `full_content` has
/// been edited by the user, the other derived fields must be treated as
/// stale and only `full_content` is authoritative.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProposal {
    #[schema(example = "PROP-1764922400000-4f9a1c2e0")]
    pub id: String,
    pub client_name: String,
    #[schema(example = "5 December 2025")]
    pub date: String,
    pub executive_summary: String,
    pub problem_understanding: String,
    pub proposed_solution: String,
    pub feature_breakdown: Vec<String>,
    #[schema(example = "8-12 weeks")]
    pub timeline: String,
    #[schema(example = "₹5L-₹10L")]
    pub cost_range: String,
    pub why_choose_us: String,
    pub next_steps: Vec<String>,
    pub full_content: String,
}
