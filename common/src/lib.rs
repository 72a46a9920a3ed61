pub mod config;
pub mod logger;

use validator::ValidationErrors;

/// Flattens field errors into one `; `-separated line, sorted by field name.
///
/// Errors without a message fall back to `field: code`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(m) => m.to_string(),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{Validate, ValidationError};

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "Invalid email address"))]
        email: String,
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn joins_messages_and_falls_back_to_codes() {
        let signup = Signup {
            email: "not-an-email".into(),
            name: String::new(),
        };
        let errors = signup.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "Invalid email address; name: length"
        );
    }

    #[test]
    fn custom_error_message_is_used() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "passing_score",
            ValidationError::new("range").with_message("Passing score must be 0-100".into()),
        );
        assert_eq!(format_validation_errors(&errors), "Passing score must be 0-100");
    }
}
