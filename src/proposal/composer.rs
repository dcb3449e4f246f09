//! The composer: (form data, service definition) -> generated proposal.
//!
//! Pure over its inputs plus the injected stamp source. It never validates;
//! blank strings are legal sentinel values and are interpolated literally.

use crate::catalog::models::ServiceDefinition;

use super::branded;
use super::classic;
use super::models::{
    ComposeOptions, GeneratedProposal, MilestoneRow, ProposalFormData, TemplatePreset,
};
use super::stamp::StampSource;

/// Static value-proposition paragraph shared by both presets.
const WHY_CHOOSE_US: &str = "Craftwell Technologies brings deep experience delivering scalable, \
secure, and user-centric products for global brands and high-growth startups. Our delivery \
methodology, tooling, and engineering culture are built around long-term partnership and \
measurable outcomes.";

/// Fixed procedural steps attached to every proposal.
const NEXT_STEPS: [&str; 5] = [
    "Finalize scope alignment and key success metrics",
    "Confirm technology stack and infrastructure approach",
    "Sign off on commercial terms and delivery timelines",
    "Kick off project with detailed planning and sprint setup",
    "Iterative development, testing, deployment, and handover",
];

/// Header and commercial fields after fallback resolution.
pub struct ResolvedFields {
    pub project_name: String,
    pub client_company: String,
    pub document_version: String,
    pub proposal_date: String,
    pub timeline: String,
    pub budget: String,
}

/// Narrative strings derived from form and service fields.
pub struct Narrative {
    pub executive_summary: String,
    pub problem_understanding: String,
    pub proposed_solution: String,
    pub why_choose_us: String,
    pub feature_breakdown: Vec<String>,
    pub next_steps: Vec<String>,
}

/// Everything a template preset needs to render `full_content`.
pub struct TemplateContext<'a> {
    pub form: &'a ProposalFormData,
    pub service: &'a ServiceDefinition,
    pub resolved: &'a ResolvedFields,
    pub narrative: &'a Narrative,
    pub milestones: &'a [MilestoneRow],
}

/// Non-blank form value wins; otherwise the fallback. A non-blank value is
/// used as given, without trimming.
fn resolve_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

/// Compose a proposal document. Consumes the form data; the caller keeps
/// the service definition.
pub fn compose(
    form: ProposalFormData,
    service: &ServiceDefinition,
    options: &ComposeOptions,
    stamp: &dyn StampSource,
) -> GeneratedProposal {
    let id = stamp.proposal_id();
    let today = stamp.today();

    let resolved = ResolvedFields {
        project_name: resolve_or(&form.project_name, &service.name),
        client_company: resolve_or(&form.client_company, &form.client_name),
        document_version: resolve_or(&form.document_version, "1.0"),
        proposal_date: resolve_or(&form.proposal_date, &today),
        timeline: resolve_or(&form.timeline, &service.timeline_estimation),
        budget: resolve_or(&form.budget, &service.cost_estimation),
    };

    let narrative = build_narrative(&form, service, &resolved);

    let milestones = options
        .milestones
        .clone()
        .unwrap_or_else(MilestoneRow::standard_schedule);

    let ctx = TemplateContext {
        form: &form,
        service,
        resolved: &resolved,
        narrative: &narrative,
        milestones: &milestones,
    };

    let full_content = match options.preset {
        TemplatePreset::Branded => branded::render(&ctx),
        TemplatePreset::Classic => classic::render(&ctx),
    };

    GeneratedProposal {
        id,
        client_name: form.client_name,
        date: resolved.proposal_date,
        executive_summary: narrative.executive_summary,
        problem_understanding: narrative.problem_understanding,
        proposed_solution: narrative.proposed_solution,
        feature_breakdown: narrative.feature_breakdown,
        timeline: resolved.timeline,
        cost_range: resolved.budget,
        why_choose_us: narrative.why_choose_us,
        next_steps: narrative.next_steps,
        full_content,
    }
}

fn build_narrative(
    form: &ProposalFormData,
    service: &ServiceDefinition,
    resolved: &ResolvedFields,
) -> Narrative {
    let executive_summary = format!(
        "This proposal outlines a comprehensive {} initiative for {}. Our approach focuses on \
         delivering a scalable, secure, and user-friendly solution that addresses the core \
         business challenges in the {} industry.",
        resolved.project_name, resolved.client_company, form.industry
    );

    let notes = form.notes.trim();
    let context_suffix = if notes.is_empty() {
        String::new()
    } else {
        format!(" Additional context: {}", notes)
    };
    let problem_understanding = format!(
        "{} operates in the {} sector and faces challenges including: {}.{}",
        resolved.client_company,
        form.industry,
        service.business_problems_solved.join(", "),
        context_suffix
    );

    let proposed_solution = format!(
        "We propose enhancing and/or building digital platforms powered by {}, leveraging modern \
         technologies including {} for frontend, {} for backend, and {} for data management.",
        service.name,
        service.tech_stack.frontend.join(", "),
        service.tech_stack.backend.join(", "),
        service.tech_stack.database.join(", ")
    );

    let mut feature_breakdown = service.key_features.clone();
    feature_breakdown.extend(
        service
            .optional_features
            .iter()
            .map(|feature| format!("{feature} (Optional)")),
    );

    Narrative {
        executive_summary,
        problem_understanding,
        proposed_solution,
        why_choose_us: WHY_CHOOSE_US.to_string(),
        feature_breakdown,
        next_steps: NEXT_STEPS.iter().map(|step| step.to_string()).collect(),
    }
}
