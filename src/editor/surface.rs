use super::actions::Alignment;

/// Command surface of a rich text editor.
///
/// Mirrors the commands the proposal toolbar issues. Hosts wrap their own
/// editor widget in this trait; [`super::ToolbarAction::apply`] drives it.
/// The document itself is opaque to the rest of the system: it goes in and
/// comes out as an HTML string, and `revision` is the only change signal.
pub trait EditingSurface {
    /// The current document as HTML.
    fn content(&self) -> String;
    /// Replace the document wholesale, as when loading a stored draft.
    fn set_content(&mut self, html: &str);
    /// Monotonic counter, bumped on every content change. Callers compare
    /// revisions to detect edits; the counter never goes backwards.
    fn revision(&self) -> u64;

    fn toggle_bold(&mut self);
    fn toggle_italic(&mut self);
    fn toggle_underline(&mut self);
    fn toggle_heading(&mut self, level: u8);
    fn toggle_bullet_list(&mut self);
    fn toggle_ordered_list(&mut self);
    fn set_text_align(&mut self, alignment: Alignment);
    fn set_text_color(&mut self, color: &str);
    fn set_link(&mut self, href: &str);
    fn clear_link(&mut self);
    fn undo(&mut self);
    fn redo(&mut self);
}
