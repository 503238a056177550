use crate::ActionError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Input of the sign up form before anything is sent to the API.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpForm {
    /// Rejects the form locally. Password mismatch is reported before length.
    pub fn validate(&self) -> Result<(), ActionError> {
        if self.username.trim().is_empty() || self.email.trim().is_empty() {
            return Err(ActionError::validation("Username and email are required"));
        }
        if self.password != self.confirm_password {
            return Err(ActionError::validation("Passwords do not match"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ActionError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(password: &str, confirm_password: &str) -> SignUpForm {
        SignUpForm {
            username: "mara".to_owned(),
            email: "mara@example.com".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form("hunter22", "hunter22").validate(), Ok(()));
        assert_eq!(form("sechs6", "sechs6").validate(), Ok(()));
    }

    #[test]
    fn test_mismatch_is_reported_first() {
        assert_eq!(
            form("abc", "abd").validate(),
            Err(ActionError::validation("Passwords do not match"))
        );
    }

    #[test]
    fn test_short_password() {
        assert_eq!(
            form("abcde", "abcde").validate(),
            Err(ActionError::validation("Password must be at least 6 characters"))
        );
        // counted in characters, not bytes
        assert!(form("äöüäö", "äöüäö").validate().is_err());
    }

    #[test]
    fn test_missing_fields() {
        let mut form = form("hunter22", "hunter22");
        form.email = "  ".to_owned();
        assert!(matches!(form.validate(), Err(ActionError::Validation(_))));
    }
}
