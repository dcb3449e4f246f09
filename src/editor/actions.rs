//! Toolbar actions and their wire descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use super::surface::EditingSurface;

/// Paragraph alignment choices offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// One toolbar command, as issued by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", content = "value", rename_all = "camelCase")]
pub enum ToolbarAction {
    Bold,
    Italic,
    Underline,
    Heading(u8),
    BulletList,
    OrderedList,
    Align(Alignment),
    TextColor(String),
    SetLink(String),
    ClearLink,
    Undo,
    Redo,
}

impl ToolbarAction {
    /// Apply this action to an editing surface.
    ///
    /// Link input goes through [`normalize_link_url`]; blank input clears
    /// the link instead of setting an empty one.
    pub fn apply(&self, surface: &mut dyn EditingSurface) {
        match self {
            ToolbarAction::Bold => surface.toggle_bold(),
            ToolbarAction::Italic => surface.toggle_italic(),
            ToolbarAction::Underline => surface.toggle_underline(),
            ToolbarAction::Heading(level) => surface.toggle_heading(*level),
            ToolbarAction::BulletList => surface.toggle_bullet_list(),
            ToolbarAction::OrderedList => surface.toggle_ordered_list(),
            ToolbarAction::Align(alignment) => surface.set_text_align(*alignment),
            ToolbarAction::TextColor(color) => surface.set_text_color(color),
            ToolbarAction::SetLink(url) => match normalize_link_url(url) {
                Some(href) => surface.set_link(&href),
                None => surface.clear_link(),
            },
            ToolbarAction::ClearLink => surface.clear_link(),
            ToolbarAction::Undo => surface.undo(),
            ToolbarAction::Redo => surface.redo(),
        }
    }
}

/// Normalize user-entered link input.
///
/// Blank input means "remove the link". Anything without an explicit
/// http(s) scheme gets an https:// prefix.
pub fn normalize_link_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{}", trimmed))
    }
}

/// Describes one toolbar action for clients building their own UI.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionDescriptor {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    #[schema(value_type = Object)]
    pub input_schema: Value,
}

fn descriptor(name: &str, description: &str, input_schema: Value) -> ActionDescriptor {
    ActionDescriptor {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

fn no_input() -> Value {
    json!({ "type": "object", "properties": {} })
}

/// List every toolbar action with its wire name and input schema.
pub fn all_action_descriptors() -> Vec<ActionDescriptor> {
    vec![
        descriptor("bold", "Toggle bold on the current selection", no_input()),
        descriptor("italic", "Toggle italics on the current selection", no_input()),
        descriptor(
            "underline",
            "Toggle underline on the current selection",
            no_input(),
        ),
        descriptor(
            "heading",
            "Toggle a heading level on the current block",
            json!({
                "type": "object",
                "properties": {
                    "value": { "type": "integer", "minimum": 1, "maximum": 2, "description": "Heading level" }
                },
                "required": ["value"]
            }),
        ),
        descriptor("bulletList", "Toggle an unordered list", no_input()),
        descriptor("orderedList", "Toggle a numbered list", no_input()),
        descriptor(
            "align",
            "Set paragraph alignment",
            json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string", "enum": ["left", "center", "right", "justify"] }
                },
                "required": ["value"]
            }),
        ),
        descriptor(
            "textColor",
            "Set the text color of the current selection",
            json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string", "description": "CSS color value, e.g. #958DF1" }
                },
                "required": ["value"]
            }),
        ),
        descriptor(
            "setLink",
            "Link the current selection; https:// is assumed when no scheme is given",
            json!({
                "type": "object",
                "properties": {
                    "value": { "type": "string", "description": "Target URL. Blank input removes the link" }
                },
                "required": ["value"]
            }),
        ),
        descriptor("clearLink", "Remove the link from the current selection", no_input()),
        descriptor("undo", "Undo the last edit", no_input()),
        descriptor("redo", "Redo the last undone edit", no_input()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<String>,
        html: String,
        revision: u64,
    }

    impl EditingSurface for RecordingSurface {
        fn content(&self) -> String {
            self.html.clone()
        }
        fn set_content(&mut self, html: &str) {
            self.html = html.to_string();
            self.revision += 1;
        }
        fn revision(&self) -> u64 {
            self.revision
        }
        fn toggle_bold(&mut self) {
            self.calls.push("bold".to_string());
        }
        fn toggle_italic(&mut self) {
            self.calls.push("italic".to_string());
        }
        fn toggle_underline(&mut self) {
            self.calls.push("underline".to_string());
        }
        fn toggle_heading(&mut self, level: u8) {
            self.calls.push(format!("heading:{}", level));
        }
        fn toggle_bullet_list(&mut self) {
            self.calls.push("bulletList".to_string());
        }
        fn toggle_ordered_list(&mut self) {
            self.calls.push("orderedList".to_string());
        }
        fn set_text_align(&mut self, alignment: Alignment) {
            self.calls.push(format!("align:{:?}", alignment));
        }
        fn set_text_color(&mut self, color: &str) {
            self.calls.push(format!("color:{}", color));
        }
        fn set_link(&mut self, href: &str) {
            self.calls.push(format!("link:{}", href));
        }
        fn clear_link(&mut self) {
            self.calls.push("clearLink".to_string());
        }
        fn undo(&mut self) {
            self.calls.push("undo".to_string());
        }
        fn redo(&mut self) {
            self.calls.push("redo".to_string());
        }
    }

    #[test]
    fn test_actions_dispatch_to_surface_in_order() {
        let mut surface = RecordingSurface::default();
        ToolbarAction::Bold.apply(&mut surface);
        ToolbarAction::Heading(2).apply(&mut surface);
        ToolbarAction::Align(Alignment::Center).apply(&mut surface);
        ToolbarAction::Undo.apply(&mut surface);

        assert_eq!(surface.calls, vec!["bold", "heading:2", "align:Center", "undo"]);
    }

    #[test]
    fn test_set_link_prefixes_bare_domains() {
        let mut surface = RecordingSurface::default();
        ToolbarAction::SetLink("example.com/docs".to_string()).apply(&mut surface);
        assert_eq!(surface.calls, vec!["link:https://example.com/docs"]);
    }

    #[test]
    fn test_set_link_keeps_explicit_schemes() {
        assert_eq!(
            normalize_link_url("http://intranet.local"),
            Some("http://intranet.local".to_string())
        );
        assert_eq!(
            normalize_link_url("https://example.com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_blank_link_input_clears_the_link() {
        let mut surface = RecordingSurface::default();
        ToolbarAction::SetLink("   ".to_string()).apply(&mut surface);
        assert_eq!(surface.calls, vec!["clearLink"]);
    }

    #[test]
    fn test_content_roundtrip_bumps_revision() {
        let mut surface = RecordingSurface::default();
        assert_eq!(surface.revision(), 0);

        surface.set_content("<h1>Draft</h1>");
        assert_eq!(surface.content(), "<h1>Draft</h1>");
        assert_eq!(surface.revision(), 1);

        surface.set_content("<h1>Draft v2</h1>");
        assert_eq!(surface.revision(), 2);
    }

    #[test]
    fn test_wire_format_is_tagged() {
        let align = serde_json::to_value(ToolbarAction::Align(Alignment::Left)).unwrap();
        assert_eq!(align, json!({ "action": "align", "value": "left" }));

        let heading = serde_json::to_value(ToolbarAction::Heading(1)).unwrap();
        assert_eq!(heading, json!({ "action": "heading", "value": 1 }));

        let bold = serde_json::to_value(ToolbarAction::Bold).unwrap();
        assert_eq!(bold, json!({ "action": "bold" }));
    }

    #[test]
    fn test_wire_format_parses_back() {
        let action: ToolbarAction =
            serde_json::from_value(json!({ "action": "textColor", "value": "#958DF1" })).unwrap();
        assert_eq!(action, ToolbarAction::TextColor("#958DF1".to_string()));
    }

    #[test]
    fn test_descriptors_cover_every_action_once() {
        let descriptors = all_action_descriptors();
        assert_eq!(descriptors.len(), 12);

        let names: std::collections::HashSet<&str> =
            descriptors.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), 12);
        assert!(names.contains("bold"));
        assert!(names.contains("setLink"));

        for desc in &descriptors {
            assert!(!desc.description.is_empty());
            assert!(desc.input_schema.get("type").is_some());
        }
    }
}
