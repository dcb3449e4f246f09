//! Email share markup and mailto link construction.
//!
//! `build_proposal_email_html` is the single source of the share markup.
//! The preview endpoint and the email-share endpoint both call it, which is
//! what keeps preview and email byte-identical.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::COMPANY_NAME;

/// Characters left bare by JavaScript's encodeURIComponent:
/// A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Wrap the live proposal HTML in the fixed greeting, proposal id and
/// signature markup.
pub fn build_proposal_email_html(
    proposal_html: &str,
    client_name: &str,
    proposal_id: &str,
) -> String {
    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.6; color: #111827;">
  <p>Dear {client_name},</p>
  <p>Please find the detailed proposal below:</p>
  {proposal_html}
  <p><strong>Proposal ID:</strong> {proposal_id}</p>
  <p>
    Best regards,<br />
    {company}
  </p>
</div>"#,
        client_name = client_name,
        proposal_html = proposal_html,
        proposal_id = proposal_id,
        company = COMPANY_NAME,
    )
}

pub fn email_subject(client_name: &str, proposal_id: &str) -> String {
    format!("IT Solution Proposal for {} - {}", client_name, proposal_id)
}

/// Build a `mailto:` URL with the subject and HTML body percent-encoded
/// the way encodeURIComponent does.
pub fn build_mailto_url(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        utf8_percent_encode(subject, URI_COMPONENT),
        utf8_percent_encode(body, URI_COMPONENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_html_wraps_body_between_greeting_and_id() {
        let html = build_proposal_email_html("<p>body</p>", "Acme Corp", "PROP-1-abc");
        assert!(html.starts_with("<div style=\"font-family: Arial, sans-serif;"));
        assert!(html.contains("<p>Dear Acme Corp,</p>"));
        let body_at = html.find("<p>body</p>").unwrap();
        let id_at = html.find("<strong>Proposal ID:</strong> PROP-1-abc").unwrap();
        assert!(body_at < id_at);
        assert!(html.trim_end().ends_with("</div>"));
    }

    #[test]
    fn test_same_inputs_produce_identical_markup() {
        let a = build_proposal_email_html("<p>x</p>", "Client", "PROP-2-def");
        let b = build_proposal_email_html("<p>x</p>", "Client", "PROP-2-def");
        assert_eq!(a, b);
    }

    #[test]
    fn test_subject_format() {
        assert_eq!(
            email_subject("Acme Corp", "PROP-3-ghi"),
            "IT Solution Proposal for Acme Corp - PROP-3-ghi"
        );
    }

    #[test]
    fn test_mailto_encoding_matches_encodeuricomponent() {
        let url = build_mailto_url("Proposal for A & B", "<p>50% off!</p>");
        assert_eq!(
            url,
            "mailto:?subject=Proposal%20for%20A%20%26%20B&body=%3Cp%3E50%25%20off!%3C%2Fp%3E"
        );
    }

    #[test]
    fn test_mailto_keeps_unreserved_marks_bare() {
        let url = build_mailto_url("a-b_c.d!e~f*g'h(i)j", "");
        assert_eq!(url, "mailto:?subject=a-b_c.d!e~f*g'h(i)j&body=");
    }
}
