//! Schema validation for the profile form
//!
//! Every rule runs on every call; a field collects one message per rule it
//! breaks, in the order the rules are declared. The password confirmation
//! check runs after all per-field rules.

mod rules;

use crate::state::{FormErrors, Gender, UserForm, UserProfile};
use rules::{CROSS_FIELD_RULES, FIELD_RULES};

pub use rules::{is_valid_email, Rule};

/// Validate the whole form.
///
/// Returns the typed profile when no rule fails, otherwise the complete
/// error mapping recomputed from scratch.
pub fn validate(form: &UserForm) -> Result<UserProfile, FormErrors> {
    let mut errors = FormErrors::new();
    for rule in FIELD_RULES.iter().chain(CROSS_FIELD_RULES) {
        if !(rule.check)(form) {
            errors.push(rule.field, rule.message);
        }
    }

    match form.gender.parse::<Gender>() {
        Ok(gender) if errors.is_empty() => Ok(UserProfile {
            name: form.name.clone(),
            email: form.email.clone(),
            age: form.age,
            password: form.password.clone(),
            confirm_password: form.confirm_password.clone(),
            phone: form.phone.clone(),
            gender,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;
    use pretty_assertions::assert_eq;

    fn valid_form() -> UserForm {
        UserForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            age: 36,
            password: "Analytical1".to_string(),
            confirm_password: "Analytical1".to_string(),
            phone: "5551234567".to_string(),
            gender: "female".to_string(),
        }
    }

    fn messages(errors: &FormErrors, field: Field) -> Vec<String> {
        errors.get(field).map(<[String]>::to_vec).unwrap_or_default()
    }

    #[test]
    fn test_valid_form_yields_typed_profile() {
        let profile = validate(&valid_form()).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.age, 36);
        assert_eq!(profile.email, "ada@example.com");
    }

    #[test]
    fn test_valid_boundaries() {
        let form = UserForm {
            name: "A".to_string(),
            age: 18,
            password: "Abcdefg1".to_string(),
            confirm_password: "Abcdefg1".to_string(),
            phone: "0123456789".to_string(),
            gender: "other".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_default_form_collects_every_standalone_rule() {
        let errors = validate(&UserForm::default()).unwrap_err();
        assert_eq!(messages(&errors, Field::Name), vec!["Name is required"]);
        assert_eq!(messages(&errors, Field::Email), vec!["Invalid email address"]);
        assert_eq!(
            messages(&errors, Field::Age),
            vec!["Must be at least 18 years old"]
        );
        assert_eq!(
            messages(&errors, Field::Password),
            vec![
                "Password must be at least 8 characters",
                "Must contain at least one uppercase letter",
                "Must contain at least one number",
            ]
        );
        assert_eq!(
            messages(&errors, Field::Phone),
            vec!["Phone number must be at least 10 digits"]
        );
        // empty password equals empty confirmation; default gender is valid
        assert!(!errors.contains(Field::ConfirmPassword));
        assert!(!errors.contains(Field::Gender));
    }

    #[test]
    fn test_short_password_with_digit() {
        let form = UserForm {
            password: "short1".to_string(),
            confirm_password: "short1".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::Password),
            vec![
                "Password must be at least 8 characters",
                "Must contain at least one uppercase letter",
            ]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_long_password_missing_digit() {
        let form = UserForm {
            password: "Abcdefghij".to_string(),
            confirm_password: "Abcdefghij".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::Password),
            vec!["Must contain at least one number"]
        );
    }

    #[test]
    fn test_password_mismatch_only_flags_confirmation() {
        let form = UserForm {
            password: "Abcdefg1".to_string(),
            confirm_password: "different".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::ConfirmPassword),
            vec!["Passwords do not match"]
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_mismatch_reported_alongside_password_errors() {
        let form = UserForm {
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(messages(&errors, Field::Password).len(), 3);
        assert_eq!(
            messages(&errors, Field::ConfirmPassword),
            vec!["Passwords do not match"]
        );
    }

    #[test]
    fn test_invalid_email_only() {
        let form = UserForm {
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(messages(&errors, Field::Email), vec!["Invalid email address"]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_underage() {
        let form = UserForm {
            age: 17,
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::Age),
            vec!["Must be at least 18 years old"]
        );
    }

    #[test]
    fn test_phone_counts_characters_not_digits() {
        let form = UserForm {
            phone: "(555) 12-3".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());

        let form = UserForm {
            phone: "555-1234".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::Phone),
            vec!["Phone number must be at least 10 digits"]
        );
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // 7 chars, but the emoji is two UTF-16 units
        let form = UserForm {
            password: "Abcde😀1".to_string(),
            confirm_password: "Abcde😀1".to_string(),
            phone: "555123456😀".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());

        let form = UserForm {
            phone: "55512345é".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            messages(&errors, Field::Phone),
            vec!["Phone number must be at least 10 digits"]
        );
    }

    #[test]
    fn test_email_edge_cases() {
        let form = UserForm {
            email: "ada'@example.com".to_string(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(messages(&errors, Field::Email), vec!["Invalid email address"]);

        let form = UserForm {
            email: "ada@my-.example.com".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_whitespace_name_is_present() {
        let form = UserForm {
            name: " ".to_string(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn test_unknown_gender() {
        for gender in ["", "Male", "robot"] {
            let form = UserForm {
                gender: gender.to_string(),
                ..valid_form()
            };
            let errors = validate(&form).unwrap_err();
            assert_eq!(
                messages(&errors, Field::Gender),
                vec!["Please select a valid gender"]
            );
        }
    }

    #[test]
    fn test_is_idempotent() {
        let form = UserForm {
            email: "bad".to_string(),
            password: "x".to_string(),
            ..valid_form()
        };
        let first = validate(&form);
        for _ in 0..3 {
            assert_eq!(validate(&form), first);
        }
        assert_eq!(validate(&valid_form()), validate(&valid_form()));
    }
}
