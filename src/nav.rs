//! Click routing for anchors and hero call-to-action buttons.

use crate::constants::JOIN_AIRDROP_LABEL;
use crate::toast::Toast;

/// Selector for an in-page anchor's `href`, or `None` for a bare `#` or an
/// external link.
///
/// ```
/// use strutmaster::nav::anchor_selector;
///
/// assert_eq!(anchor_selector("#roadmap"), Some("#roadmap"));
/// assert_eq!(anchor_selector("#"), None);
/// ```
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Whether a secondary hero button is the "Join Airdrop" shortcut
pub fn is_airdrop_button(label: &str) -> bool {
    label.contains(JOIN_AIRDROP_LABEL)
}

/// Toast shown when the contract-address button is clicked
pub fn contract_toast(address: &str) -> Toast {
    Toast::success("CA", address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CONTRACT_ADDRESS;

    #[test]
    fn anchor_selector_requires_fragment() {
        assert_eq!(anchor_selector("#team"), Some("#team"));
        assert_eq!(anchor_selector(" #team "), Some("#team"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("https://x.com/#a"), None);
        assert_eq!(anchor_selector(""), None);
    }

    #[test]
    fn airdrop_button_matches_on_label() {
        assert!(is_airdrop_button("🎁 Join Airdrop"));
        assert!(!is_airdrop_button("Roadmap"));
        assert!(!is_airdrop_button("join airdrop"));
    }

    #[test]
    fn contract_toast_shows_address() {
        let t = contract_toast(CONTRACT_ADDRESS);
        assert_eq!(t.title, "CA");
        assert_eq!(t.description.as_deref(), Some(CONTRACT_ADDRESS));
    }
}
