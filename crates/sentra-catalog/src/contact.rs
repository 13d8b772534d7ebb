//! Contact form state.
//!
//! The contact page simulates submission: Idle -> Submitting -> Success ->
//! back to Idle with a reset form. The timing lives in the UI layer; this
//! module only carries the field values and the status machine.

use serde::{Deserialize, Serialize};

/// Default interest selection
pub const DEFAULT_INTEREST: &str = "General Inquiry";

/// Selectable values for the interest dropdown, in display order
pub const INTEREST_OPTIONS: [&str; 6] = [
    DEFAULT_INTEREST,
    "Sentra Route Solutions",
    "Sentra Shield Solutions",
    "Sentra Insight Solutions",
    "Custom Implementation",
    "Partnership Opportunities",
];

/// Contact form field values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub interest: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            organization: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            interest: DEFAULT_INTEREST.to_string(),
        }
    }
}

impl ContactForm {
    /// True when the required fields (name, email, message) are filled
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }

    /// Clear all fields and restore the default interest
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission status of the contact form.
///
/// There is no failure variant: submissions always succeed after the
/// simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
}

impl FormStatus {
    /// Whether the submit button should be disabled
    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interest() {
        let form = ContactForm::default();
        assert_eq!(form.interest, "General Inquiry");
        assert!(!form.is_complete());
    }

    #[test]
    fn test_is_complete_requires_name_email_message() {
        let mut form = ContactForm {
            name: "Dana Reyes".into(),
            email: "dana@example.com".into(),
            message: "Requesting a consultation.".into(),
            ..Default::default()
        };
        assert!(form.is_complete());

        form.message = "   ".into();
        assert!(!form.is_complete());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = ContactForm {
            name: "Dana Reyes".into(),
            organization: "Harbor Authority".into(),
            email: "dana@example.com".into(),
            phone: "+1 555 0100".into(),
            message: "Requesting a consultation.".into(),
            interest: "Custom Implementation".into(),
        };
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_status_busy_only_while_submitting() {
        assert!(!FormStatus::Idle.is_busy());
        assert!(FormStatus::Submitting.is_busy());
        assert!(!FormStatus::Success.is_busy());
    }

    #[test]
    fn test_interest_options_start_with_default() {
        assert_eq!(INTEREST_OPTIONS[0], DEFAULT_INTEREST);
        assert_eq!(INTEREST_OPTIONS.len(), 6);
    }
}
