//! Branded preset - the full thirteen-section company proposal document.
//!
//! Section bodies are template boilerplate; user input only enters through
//! the header fields, the commercial lines, and the three blend paragraphs
//! (vision, scope, notes). Sections are pure functions composed in fixed
//! order.

use crate::COMPANY_NAME;

use super::composer::TemplateContext;
use super::models::MilestoneRow;

/// Shown when both the form budget and the service estimate are blank.
const COST_PLACEHOLDER: &str = "________ INR + GST";
/// Shown when both the form timeline and the service estimate are blank.
const DURATION_PLACEHOLDER: &str = "4-5 Months";

pub fn render(ctx: &TemplateContext) -> String {
    let sections = [
        header_section(ctx),
        vision_section(ctx),
        user_roles_section(),
        scope_section(ctx),
        infrastructure_section(ctx),
        additional_details_section(ctx),
        deliverables_section(),
        milestones_section(ctx),
        project_management_section(),
        risks_section(),
        decision_points_section(),
        value_proposition_section(),
        ownership_section(),
        support_section(),
    ];

    format!(
        "<div class=\"cw-proposal\">\n{}\n</div>",
        sections.join("\n\n")
    )
}

/// Non-blank blend value becomes one appended paragraph, otherwise nothing.
pub fn blend_paragraph(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", trimmed)
    }
}

/// The notes blend carries a label so it reads as client-supplied context.
pub fn notes_paragraph(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("<p><strong>Additional client context:</strong> {}</p>", trimmed)
    }
}

fn header_section(ctx: &TemplateContext) -> String {
    format!(
        r#"<h1>[{project_name}] Proposal</h1>

<section>
  <h2>Project Specifications</h2>
  <p><strong>Client:</strong> {client_name}</p>
  <p><strong>Project Name:</strong> {project_name}</p>
  <p><strong>Document Version:</strong> {version}</p>
  <p><strong>Date:</strong> {date}</p>
  <p><strong>Prepared For:</strong> {company}</p>
  <p><strong>Prepared By:</strong> {prepared_by}</p>
</section>

<hr />"#,
        project_name = ctx.resolved.project_name,
        client_name = ctx.form.client_name,
        version = ctx.resolved.document_version,
        date = ctx.resolved.proposal_date,
        company = ctx.resolved.client_company,
        prepared_by = COMPANY_NAME,
    )
}

fn vision_section(ctx: &TemplateContext) -> String {
    format!(
        r#"<section>
  <h2>1. Product Vision &amp; Objective</h2>
  <p>
    The engagement aims to strengthen {company}'s digital capability in the {industry} space
    through {project_name}. The platform should give end users dependable, low-friction access,
    give the business clear operational visibility, and leave room to grow without rework.
  </p>
  <p>
    Note: the proposal includes only the enhancement and development deliverables our team is
    committing to under this engagement.
  </p>
  {extra}
</section>"#,
        company = ctx.resolved.client_company,
        industry = ctx.form.industry,
        project_name = ctx.resolved.project_name,
        extra = blend_paragraph(&ctx.form.project_vision_summary),
    )
}

fn user_roles_section() -> String {
    r#"<section>
  <h2>2. User Roles</h2>
  <ul>
    <li>
      <strong>End User</strong>
      <ul>
        <li>Mention key functions</li>
      </ul>
    </li>
    <li>
      <strong>Operations</strong>
      <ul>
        <li>Mention key functions</li>
      </ul>
    </li>
    <li>
      <strong>Admin</strong>
      <ul>
        <li><strong>Manager:</strong> Can add team, view reports</li>
        <li><strong>Finance:</strong> Can see financial reports</li>
      </ul>
    </li>
  </ul>
</section>"#
        .to_string()
}

fn scope_section(ctx: &TemplateContext) -> String {
    format!(
        r#"<section>
  <h2>3. Scope Of Work</h2>
  <p>
    The scope of work below outlines the primary modules and enhancements to be delivered as part
    of this engagement.
  </p>
  {extra}
  <ul>
    <li>
      <strong>Core Application (New Development)</strong>
      <ul>
        <li>
          <strong>Authentication &amp; Profile</strong>
          <ul>
            <li>Secure login and account recovery</li>
            <li>Role mapping and profile management</li>
          </ul>
        </li>
        <li>
          <strong>Primary Workflows</strong>
          <ul>
            <li>Module-by-module breakdown to be finalized at design sign-off</li>
          </ul>
        </li>
        <li>
          <strong>Feedback &amp; Support</strong>
          <ul>
            <li>In-app feedback capture</li>
            <li>Support tickets linked with the admin portal</li>
            <li>FAQs</li>
          </ul>
        </li>
      </ul>
    </li>
    <li>
      <strong>Admin Portal (Enhancements)</strong>
      <ul>
        <li>
          <strong>Dashboards &amp; Reporting</strong>
          <ul>
            <li>Usage and adoption metrics</li>
            <li>Exportable operational reports</li>
          </ul>
        </li>
        <li>
          <strong>Access Control</strong>
          <ul>
            <li>Role-based permissions and audit trail</li>
          </ul>
        </li>
      </ul>
    </li>
  </ul>
</section>"#,
        extra = blend_paragraph(&ctx.form.project_scope_summary),
    )
}

fn infrastructure_section(ctx: &TemplateContext) -> String {
    let stack = &ctx.service.tech_stack;
    let cloud_row = match &stack.cloud {
        Some(cloud) => format!(
            "\n    <li><strong>Cloud:</strong> {}</li>",
            cloud.join(", ")
        ),
        None => String::new(),
    };

    format!(
        r#"<section>
  <h2>4. Infrastructure Details</h2>
  <p><strong>Tools &amp; Technology details:</strong></p>
  <ul>
    <li><strong>Frontend:</strong> {frontend}</li>
    <li><strong>Backend:</strong> {backend}</li>
    <li><strong>Database:</strong> {database}</li>{cloud_row}
    <li><strong>QA:</strong> [Details]</li>
    <li><strong>Design:</strong> [Details]</li>
    <li><strong>DevOps:</strong> [Details]</li>
  </ul>
  <p><strong>Recurring cost:</strong> a projected monthly run-rate will be shared with the
  infrastructure plan once target storage, traffic and availability numbers are confirmed.
  The estimate covers:</p>
  <ul>
    <li>Object storage and data egress</li>
    <li>Application servers sized for the agreed concurrency</li>
    <li>Load balancing for high availability</li>
    <li>Managed database instance with automated backups</li>
  </ul>
</section>"#,
        frontend = stack.frontend.join(", "),
        backend = stack.backend.join(", "),
        database = stack.database.join(", "),
        cloud_row = cloud_row,
    )
}

fn additional_details_section(ctx: &TemplateContext) -> String {
    format!(
        r#"<section>
  <h2>5. Additional Details</h2>
  <p><strong>Inclusion</strong></p>
  <ul>
    <li>Development of the modules listed in the scope of work, covering the functional requirements agreed at design sign-off.</li>
    <li>Enhancements limited to the features explicitly listed in this proposal.</li>
  </ul>
  <p><strong>Exclusions</strong></p>
  <ul>
    <li>No redevelopment of modules that already work and are not listed under scope.</li>
    <li>Features or integrations not explicitly listed in this proposal are excluded from project scope.</li>
  </ul>
  <p><strong>Assumptions</strong></p>
  <ul>
    <li>Client will provide timely feedback.</li>
    <li>Content and branding to be provided by the client.</li>
    <li>Third-party licenses to be arranged by the client.</li>
  </ul>
  <p><strong>Constraints</strong></p>
  <ul>
    <li>Delivery dates assume access to required client systems and stakeholders throughout the engagement.</li>
  </ul>
  {extra}
</section>"#,
        extra = notes_paragraph(&ctx.form.notes),
    )
}

fn deliverables_section() -> String {
    r#"<section>
  <h2>6. Deliverables</h2>
  <p><strong>That covers</strong></p>
  <ul>
    <li>Production-ready application covering the agreed scope of work</li>
    <li>Admin and reporting capabilities as listed under scope</li>
    <li>Source code, deployment scripts and technical documentation</li>
    <li>Handover sessions and walkthrough material for internal teams</li>
  </ul>
</section>"#
        .to_string()
}

fn milestone_rows(rows: &[MilestoneRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "        <tr>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n          <td>{}</td>\n        </tr>",
                row.sn, row.milestone, row.duration, row.percentage, row.amount
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn milestones_section(ctx: &TemplateContext) -> String {
    let cost = if ctx.resolved.budget.trim().is_empty() {
        COST_PLACEHOLDER
    } else {
        &ctx.resolved.budget
    };
    let duration = if ctx.resolved.timeline.trim().is_empty() {
        DURATION_PLACEHOLDER
    } else {
        &ctx.resolved.timeline
    };

    format!(
        r#"<section>
  <h2>7. Timelines &amp; Payment Milestone</h2>
  <p><strong>Total Fixed Cost:</strong> {cost}</p>
  <p><strong>Total Duration:</strong> {duration}</p>
  <p><strong>Milestone breakdown:</strong></p>
  <table>
    <thead>
      <tr>
        <th>SN</th>
        <th>Milestone</th>
        <th>Tentative Duration</th>
        <th>Percentage</th>
        <th>Amount (INR)</th>
      </tr>
    </thead>
    <tbody>
{rows}
    </tbody>
  </table>
  <p><strong>Important Notes:</strong></p>
  <ul>
    <li>We will share the detailed split planning covering the module and completion date upon design completion of the project.</li>
    <li>There can be minor deviation or shift in modules depending on priority and dependencies.</li>
  </ul>
  <p><strong>Other Notes:</strong></p>
  <ul>
    <li>2 Months of post-deployment support (no additional cost).</li>
    <li>The support includes bug fixes, response time, deployment help, and training.</li>
  </ul>
</section>"#,
        cost = cost,
        duration = duration,
        rows = milestone_rows(ctx.milestones),
    )
}

fn project_management_section() -> String {
    r#"<section>
  <h2>8. Project Management</h2>
  <p><strong>Team Structure</strong></p>
  <ul>
    <li>Project Architect: owns the technical design and reviews every structural decision.</li>
    <li>Project Manager: accountable for delivery within scope, on time, and with high quality.</li>
    <li>Business Analyst: turns requirements into detailed, testable documentation.</li>
    <li>Engineers: hands-on with the proposed stack across frontend, backend and infrastructure.</li>
    <li>Quality Assurance Specialists: own test coverage, regression safety and performance checks.</li>
  </ul>
  <p><strong>Communication Plan</strong></p>
  <ul>
    <li>Weekly progress updates with a standing agenda and an open-risk list.</li>
    <li>Milestone deliveries communicated with release notes and demo recordings.</li>
    <li>A shared channel for day-to-day queries, suggestions and feedback.</li>
  </ul>
  <p><strong>Testing &amp; Quality Assurance</strong></p>
  <ul>
    <li>Unit Testing: individual components behave as specified.</li>
    <li>System Testing: end-to-end flows validated against acceptance criteria.</li>
    <li>Load Testing: performance benchmarks at the agreed concurrency.</li>
  </ul>
  <p><strong>Change Management Process</strong></p>
  <ul>
    <li>Submission: change requests are submitted in writing with rationale and expected impact.</li>
    <li>Review: feasibility and impact on scope, budget, and timeline are assessed.</li>
    <li>Approval: approved changes require written agreement from both sides.</li>
    <li>Implementation: changes land as part of an agreed revised plan.</li>
    <li>Documentation: every change and its impact is recorded and shared with stakeholders.</li>
  </ul>
</section>"#
        .to_string()
}

fn risks_section() -> String {
    r#"<section>
  <h2>9. Risk &amp; Assumptions</h2>
  <p><strong>That covers</strong></p>
  <ul>
    <li>Availability of client APIs and environments.</li>
    <li>Third-party costs borne by the client.</li>
    <li>Timely feedback required at each review gate.</li>
    <li>Compliance readiness on the client side.</li>
  </ul>
</section>"#
        .to_string()
}

fn decision_points_section() -> String {
    r#"<section>
  <h2>10. Key Decision Making Points</h2>
  <p><strong>How to select the best company</strong></p>
  <ul>
    <li>Evaluate domain expertise and real project outcomes, not just portfolios.</li>
    <li>Check genuine client reviews, testimonials, and case studies.</li>
    <li>Understand the project management and reporting process.</li>
    <li>Assess the support structure and post-delivery services.</li>
    <li>Look for commitment, a problem-solving mindset, and a long-term partnership approach.</li>
  </ul>
  <p><strong>How to select the best technology</strong></p>
  <ul>
    <li>The proposed technology must fit the specific business use case.</li>
    <li>The chosen platform should align with current goals and long-term growth plans.</li>
    <li>Prioritize scalability, stability, and future readiness from the start.</li>
    <li>Be cautious of outdated technology recommended only to lower project cost; it returns later as maintenance cost.</li>
  </ul>
  <p><strong>What can go wrong with the wrong team or technology</strong></p>
  <ul>
    <li>Poor performance and frequent crashes under real load.</li>
    <li>Limited scalability as the number of users grows.</li>
    <li>Security gaps leading to data breaches and compliance risk.</li>
    <li>High rework cost from inefficient or incorrect code.</li>
    <li>Delayed timelines, damaged customer trust, or a failed delivery altogether.</li>
  </ul>
  <p><strong>Important Note:</strong><br />Some companies sell cheap development. Others sell reliability, scalability, and peace of mind.</p>
</section>"#
        .to_string()
}

fn value_proposition_section() -> String {
    format!(
        r#"<section>
  <h2>11. Why You Should Choose Craftwell</h2>
  <ul>
    <li>Process-Driven Delivery: structured methodology with review gates that minimize delivery risk and maximize business value.</li>
    <li>Proven Impact Through Automation &amp; AI: recent engagements cut repetitive manual effort by double-digit percentages within a quarter.</li>
    <li>Premium Quality with Cost Effectiveness: senior engineering delivered at optimized cost without compromising the result.</li>
    <li>End-to-End Technology Expertise: custom web and mobile products, AI-integrated solutions, enterprise systems, SaaS, and DevOps.</li>
    <li>Scalable, Tailored Delivery: every solution is built to be secure, scalable, and aligned with long-term growth, delivered within committed timelines.</li>
    <li>Track Record with Startups &amp; Enterprises: supported high-growth startups and established enterprises across diverse industries.</li>
    <li>Client Satisfaction &amp; Measurable Results: testimonials consistently highlight outcomes delivered, not hours billed.</li>
    <li>Transparent Execution &amp; High Accountability: dedicated project managers, structured reporting, and complete delivery ownership by {company}.</li>
  </ul>
</section>"#,
        company = COMPANY_NAME,
    )
}

fn ownership_section() -> String {
    r#"<section>
  <h2>12. Ownership &amp; Rights</h2>
  <p><strong>That covers:</strong></p>
  <ul>
    <li>100% ownership of the code, designs, and all IP will belong to the client.</li>
    <li>Source code, credentials, and access will be handed over post final payment.</li>
    <li>Craftwell will retain no commercial rights or reuse rights over this product.</li>
    <li>Craftwell may reuse its tools, frameworks, and technical know-how.</li>
    <li>Craftwell may use the project for portfolio and marketing purposes.</li>
  </ul>
</section>"#
        .to_string()
}

fn support_section() -> String {
    r#"<section>
  <h2>13. Post Deployment Support</h2>
  <p><strong>Free support period after go-live</strong></p>
  <ul>
    <li>Duration: 2 Months</li>
    <li>That covers:
      <ul>
        <li>Bug fixes for reported functional issues</li>
        <li>Deployment assistance on the live environment</li>
        <li>Response time commitment (within 1 business day)</li>
        <li>Basic training for internal teams (usage flows)</li>
      </ul>
    </li>
  </ul>
  <p><strong>AMC plan</strong></p>
  <ul>
    <li>Hours Bucket
      <ul>
        <li>40 Hours</li>
        <li>80 Hours</li>
        <li>120 Hours</li>
        <li>160 Hours</li>
      </ul>
    </li>
  </ul>
</section>"#
        .to_string()
}
