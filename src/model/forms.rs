//! Login and setup form state
//!
//! Controlled inputs for the two auth screens. A submission in flight
//! disables the form; the error slot holds the user-visible message picked
//! from the failure kind.

use crate::api::LoginError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub focus: AuthField,
    pub submitting: bool,
    pub error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            AuthField::Username => AuthField::Password,
            AuthField::Password => AuthField::Username,
        };
    }

    pub fn push_char(&mut self, c: char) {
        self.focused_buffer_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.focused_buffer_mut().pop();
    }

    /// Both fields filled and nothing already in flight
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
    }

    /// Record a failed submission; the message picked by the caller
    pub fn fail(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    fn focused_buffer_mut(&mut self) -> &mut String {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
        }
    }
}

/// Message for a failed login submission.
///
/// A login attempted before first-run setup gets its own wording; every
/// other failure shows the generic invalid-credentials message.
pub fn login_failure_message(error: LoginError) -> String {
    error.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_toggles_between_fields() {
        let mut form = AuthForm::new();
        assert_eq!(form.focus, AuthField::Username);
        form.toggle_focus();
        assert_eq!(form.focus, AuthField::Password);
        form.toggle_focus();
        assert_eq!(form.focus, AuthField::Username);
    }

    #[test]
    fn test_editing_targets_focused_field() {
        let mut form = AuthForm::new();
        form.push_char('a');
        form.toggle_focus();
        form.push_char('p');
        form.push_char('w');
        form.pop_char();
        assert_eq!(form.username, "a");
        assert_eq!(form.password, "p");
    }

    #[test]
    fn test_can_submit_requires_both_fields() {
        let mut form = AuthForm::new();
        assert!(!form.can_submit());
        form.username = "admin".to_string();
        assert!(!form.can_submit());
        form.password = "secret".to_string();
        assert!(form.can_submit());

        form.begin_submit();
        assert!(!form.can_submit(), "no double submission while in flight");
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = AuthForm::new();
        form.fail("Invalid credentials. Please try again.".to_string());
        assert!(form.error.is_some());
        form.begin_submit();
        assert!(form.error.is_none());
        assert!(form.submitting);
    }

    #[test]
    fn test_fail_reenables_form() {
        let mut form = AuthForm::new();
        form.username = "admin".to_string();
        form.password = "secret".to_string();
        form.begin_submit();
        form.fail("nope".to_string());
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("nope"));
        assert!(form.can_submit());
    }

    #[test]
    fn test_locked_login_picks_setup_message() {
        let locked = login_failure_message(LoginError::SetupRequired);
        let rejected = login_failure_message(LoginError::Rejected);
        assert!(locked.to_lowercase().contains("setup"));
        assert!(!locked.contains("Invalid credentials"));
        assert!(rejected.contains("Invalid credentials"));
    }
}
