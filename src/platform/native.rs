//! Native builds have no page to copy from; used by tests and tooling only.

/// Always reports failure so callers fall back to just showing the text.
pub fn copy_to_clipboard(content: &str) -> bool {
    log::debug!("[clipboard] no clipboard on native, {} bytes not copied", content.len());
    false
}
