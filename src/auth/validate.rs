use lazy_static::lazy_static;
use regex::Regex;

use crate::auth::dto::RegisterRequest;

/// One failed registration check, tied to the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Check every registration rule, accumulating one message per failing
/// field. Never touches the store.
pub fn validate_registration(req: &RegisterRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if req.password.trim().is_empty() {
        errors.push(FieldError::new("password", "The password field is required"));
    }
    if req.password_confirmation.trim().is_empty() {
        errors.push(FieldError::new(
            "password_confirmation",
            "The password confirmation field is required",
        ));
    }
    // Mismatch is only reported once both password fields passed their
    // presence checks.
    if errors.is_empty() && req.password.trim() != req.password_confirmation.trim() {
        errors.push(FieldError::new("password", "The passwords must be identical"));
    }

    let email = req.email.trim();
    if email.is_empty() {
        errors.push(FieldError::new("email", "The email address is required"));
    } else if !is_valid_email(email) {
        errors.push(FieldError::new(
            "email",
            format!("The email address {} is not a valid address", email),
        ));
    }

    if req.firstname.trim().is_empty() {
        errors.push(FieldError::new("firstname", "The firstname field is required"));
    }
    if req.lastname.trim().is_empty() {
        errors.push(FieldError::new("lastname", "The lastname field is required"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        firstname: &str,
        lastname: &str,
        email: &str,
        password: &str,
        confirmation: &str,
    ) -> RegisterRequest {
        RegisterRequest {
            firstname: firstname.into(),
            lastname: lastname.into(),
            email: email.into(),
            password: password.into(),
            password_confirmation: confirmation.into(),
        }
    }

    #[test]
    fn valid_input_passes() {
        let req = request("Ada", "Lovelace", "ada@example.com", "s3cret", "s3cret");
        assert!(validate_registration(&req).is_empty());
    }

    #[test]
    fn empty_passwords_report_both_required_but_no_mismatch() {
        let req = request("Ada", "Lovelace", "ada@example.com", "", "");
        let errors = validate_registration(&req);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "password");
        assert_eq!(errors[1].field, "password_confirmation");
        assert!(errors.iter().all(|e| !e.message.contains("identical")));
    }

    #[test]
    fn mismatch_is_reported_when_both_passwords_are_present() {
        let req = request("Ada", "Lovelace", "ada@example.com", "s3cret", "other");
        let errors = validate_registration(&req);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("identical"));
    }

    #[test]
    fn mismatch_comparison_ignores_surrounding_whitespace() {
        let req = request("Ada", "Lovelace", "ada@example.com", " s3cret ", "s3cret");
        assert!(validate_registration(&req).is_empty());
    }

    #[test]
    fn missing_email_is_reported() {
        let req = request("Ada", "Lovelace", "   ", "s3cret", "s3cret");
        let errors = validate_registration(&req);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert!(errors[0].message.contains("required"));
    }

    #[test]
    fn malformed_email_names_the_value() {
        let req = request("Ada", "Lovelace", "not-an-address", "s3cret", "s3cret");
        let errors = validate_registration(&req);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("not-an-address"));
    }

    #[test]
    fn missing_names_are_each_reported() {
        let req = request("", "", "ada@example.com", "s3cret", "s3cret");
        let errors = validate_registration(&req);
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["firstname", "lastname"]);
    }

    #[test]
    fn all_failures_accumulate_in_one_pass() {
        let req = request("", "", "", "", "");
        let fields: Vec<_> = validate_registration(&req)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "password",
                "password_confirmation",
                "email",
                "firstname",
                "lastname"
            ]
        );
    }
}
