//! Rules that discourage lifting the certificate images off the page.
//!
//! Each rule is a pure decision; the browser layer feeds it facts about the
//! event (modifier keys, whether the target sits inside a given region) and
//! acts on the answer.

/// Written to the clipboard in place of whatever was selected.
pub const ATTRIBUTION: &str = "Eduardo Cruz García";

/// The control whose context menu stays available.
pub const COPY_NAME_SELECTOR: &str = "#copyName";
/// The text region where normal copying is allowed.
pub const CERT_INFO_SELECTOR: &str = ".cert-info";

/// Whether a document-level context menu should be cancelled.
pub fn suppress_context_menu(inside_copy_name: bool) -> bool {
    !inside_copy_name
}

/// A key press with the modifiers relevant to the save shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord<'a> {
    pub ctrl: bool,
    pub meta: bool,
    pub key: &'a str,
}

impl KeyChord<'_> {
    pub fn is_save(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "s"
    }
}

/// Whether the save shortcut must be cancelled. Only while a certificate is
/// on screen; otherwise the browser keeps its default behaviour.
pub fn intercept_save(chord: KeyChord<'_>, overlay_open: bool) -> bool {
    overlay_open && chord.is_save()
}

/// Replacement clipboard text for a `copy` event, if any.
pub fn copy_override(inside_cert_info: bool) -> Option<&'static str> {
    (!inside_cert_info).then_some(ATTRIBUTION)
}
