//! Airdrop signup form outcome.
//!
//! Nothing is submitted anywhere; the form only validates the address and
//! answers with a toast.

use crate::email::is_valid_email;
use crate::toast::Toast;

/// Result of submitting the airdrop form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signup {
    /// Field was blank (after trimming)
    Empty,
    /// Field failed the format check
    Invalid,
    Accepted { email: String },
}

impl Signup {
    /// Classify the raw field value.
    pub fn evaluate(raw: &str) -> Self {
        let email = raw.trim();
        if email.is_empty() {
            Signup::Empty
        } else if !is_valid_email(email) {
            Signup::Invalid
        } else {
            Signup::Accepted {
                email: email.to_string(),
            }
        }
    }

    pub fn toast(&self) -> Toast {
        match self {
            Signup::Empty => Toast::error("Error", "Please enter your email address"),
            Signup::Invalid => Toast::error("Error", "Please enter a valid email address"),
            Signup::Accepted { .. } => {
                Toast::success("Success! 🎉", "You're signed up for the STRUT airdrop!")
            }
        }
    }

    /// Only an accepted address clears the field; errors leave it for editing.
    pub fn clears_input(&self) -> bool {
        matches!(self, Signup::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(Signup::evaluate(""), Signup::Empty);
        assert_eq!(Signup::evaluate("   \t"), Signup::Empty);
    }

    #[test]
    fn input_is_trimmed_before_validation() {
        assert_eq!(
            Signup::evaluate("  a@b.co \n"),
            Signup::Accepted {
                email: "a@b.co".into()
            }
        );
    }

    #[test]
    fn messages_distinguish_empty_from_invalid() {
        let empty = Signup::Empty.toast();
        let invalid = Signup::Invalid.toast();
        assert_eq!(empty.kind, ToastKind::Error);
        assert_eq!(invalid.kind, ToastKind::Error);
        assert_ne!(empty.description, invalid.description);
    }
}
