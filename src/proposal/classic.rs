//! Classic preset - a compact generic document assembled from the derived
//! narrative fields instead of the full branded boilerplate.

use crate::COMPANY_NAME;

use super::branded;
use super::composer::TemplateContext;

pub fn render(ctx: &TemplateContext) -> String {
    let features = ctx
        .narrative
        .feature_breakdown
        .iter()
        .map(|feature| format!("    <li>{}</li>", feature))
        .collect::<Vec<_>>()
        .join("\n");

    let steps = ctx
        .narrative
        .next_steps
        .iter()
        .map(|step| format!("    <li>{}</li>", step))
        .collect::<Vec<_>>()
        .join("\n");

    let stack = &ctx.service.tech_stack;
    let cloud_row = match &stack.cloud {
        Some(cloud) => format!(
            "\n    <li><strong>Cloud:</strong> {}</li>",
            cloud.join(", ")
        ),
        None => String::new(),
    };

    let cost = if ctx.resolved.budget.trim().is_empty() {
        "________ INR + GST"
    } else {
        &ctx.resolved.budget
    };
    let duration = if ctx.resolved.timeline.trim().is_empty() {
        "4-5 Months"
    } else {
        &ctx.resolved.timeline
    };

    format!(
        r#"<div class="cw-proposal cw-proposal-classic">
<h1>{project_name} - Proposal</h1>
<p><strong>Prepared For:</strong> {company}</p>
<p><strong>Prepared By:</strong> {prepared_by}</p>
<p><strong>Date:</strong> {date}</p>
<p><strong>Document Version:</strong> {version}</p>

<hr />

<section>
  <h2>Executive Summary</h2>
  <p>{executive_summary}</p>
  {vision_extra}
</section>

<section>
  <h2>Understanding of the Problem</h2>
  <p>{problem_understanding}</p>
</section>

<section>
  <h2>Proposed Solution</h2>
  <p>{proposed_solution}</p>
  {scope_extra}
</section>

<section>
  <h2>Feature Breakdown</h2>
  <ul>
{features}
  </ul>
</section>

<section>
  <h2>Technology Stack</h2>
  <ul>
    <li><strong>Frontend:</strong> {frontend}</li>
    <li><strong>Backend:</strong> {backend}</li>
    <li><strong>Database:</strong> {database}</li>{cloud_row}
  </ul>
</section>

<section>
  <h2>Timeline &amp; Investment</h2>
  <p><strong>Total Fixed Cost:</strong> {cost}</p>
  <p><strong>Total Duration:</strong> {duration}</p>
</section>

<section>
  <h2>Why Choose Us</h2>
  <p>{why_choose_us}</p>
</section>

<section>
  <h2>Next Steps</h2>
  <ol>
{steps}
  </ol>
</section>
</div>"#,
        project_name = ctx.resolved.project_name,
        company = ctx.resolved.client_company,
        prepared_by = COMPANY_NAME,
        date = ctx.resolved.proposal_date,
        version = ctx.resolved.document_version,
        executive_summary = ctx.narrative.executive_summary,
        vision_extra = branded::blend_paragraph(&ctx.form.project_vision_summary),
        problem_understanding = ctx.narrative.problem_understanding,
        proposed_solution = ctx.narrative.proposed_solution,
        scope_extra = branded::blend_paragraph(&ctx.form.project_scope_summary),
        features = features,
        frontend = stack.frontend.join(", "),
        backend = stack.backend.join(", "),
        database = stack.database.join(", "),
        cloud_row = cloud_row,
        cost = cost,
        duration = duration,
        why_choose_us = ctx.narrative.why_choose_us,
        steps = steps,
    )
}
