use crate::domain::model::{FieldError, FieldInput, FieldKind, ValidationErrors, FIRST_NAME, LAST_NAME};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("valid phone pattern"));

const MIN_NAME_CHARS: usize = 2;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Checks one control. Rules run in order and the first failure is returned.
pub fn validate_field(input: &FieldInput) -> Result<(), FieldError> {
    let value = input.value.trim();

    if input.required && value.is_empty() {
        return Err(FieldError::Required);
    }

    if value.is_empty() {
        return Ok(());
    }

    match input.kind {
        FieldKind::Email if !is_valid_email(value) => return Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => return Err(FieldError::InvalidPhone),
        _ => {}
    }

    let is_name = input.name == FIRST_NAME || input.name == LAST_NAME;
    if is_name && value.chars().count() < MIN_NAME_CHARS {
        return Err(FieldError::TooShort);
    }

    Ok(())
}

/// Validates every required control and collects all failures.
pub fn validate_form(fields: &[FieldInput]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    for field in fields.iter().filter(|f| f.required) {
        if let Err(e) = validate_field(field) {
            errors.insert(&field.name, e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{lead_fields, EMAIL, MOTIVATION, PHONE};

    fn filled_form() -> Vec<FieldInput> {
        let values = [
            ("firstName", "Olena"),
            ("lastName", "Kovalenko"),
            ("email", "olena@example.com"),
            ("phone", "+380 (67) 123-45-67"),
            ("country", "Ukraine"),
            ("experience", "beginner"),
            ("motivation", ""),
            ("selectedTariff", "pro"),
        ];
        let mut fields = lead_fields();
        for field in &mut fields {
            if let Some((_, v)) = values.iter().find(|(n, _)| *n == field.name) {
                field.value = v.to_string();
            }
        }
        fields
    }

    #[test]
    fn test_email_predicate() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_phone_predicate() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(is_valid_phone("0671234567"));
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("++1234567890"));
    }

    #[test]
    fn test_required_wins_over_other_rules() {
        let input = FieldInput::new(FIRST_NAME, FieldKind::Text, true, "   ");
        assert_eq!(validate_field(&input), Err(FieldError::Required));
    }

    #[test]
    fn test_type_rules() {
        let email = FieldInput::new(EMAIL, FieldKind::Email, true, "olena@");
        assert_eq!(validate_field(&email), Err(FieldError::InvalidEmail));

        let phone = FieldInput::new(PHONE, FieldKind::Tel, true, "call me");
        assert_eq!(validate_field(&phone), Err(FieldError::InvalidPhone));

        let optional_email = FieldInput::new("backupEmail", FieldKind::Email, false, "");
        assert!(validate_field(&optional_email).is_ok());
    }

    #[test]
    fn test_name_length() {
        let short = FieldInput::new(FIRST_NAME, FieldKind::Text, true, " O ");
        assert_eq!(validate_field(&short), Err(FieldError::TooShort));

        // counted in characters, not bytes
        let cyrillic = FieldInput::new(LAST_NAME, FieldKind::Text, true, "Їж");
        assert!(validate_field(&cyrillic).is_ok());
    }

    #[test]
    fn test_empty_optional_last_name_passes() {
        let input = FieldInput::new(LAST_NAME, FieldKind::Text, false, "");
        assert!(validate_field(&input).is_ok());
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(validate_form(&filled_form()).is_ok());
    }

    #[test]
    fn test_form_collects_every_failure() {
        let mut fields = filled_form();
        for field in &mut fields {
            match field.name.as_str() {
                "email" => field.value = "nope".to_string(),
                "country" => field.value.clear(),
                _ => {}
            }
        }

        let errors = validate_form(&fields).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(EMAIL), Some(FieldError::InvalidEmail));
        assert_eq!(errors.get("country"), Some(FieldError::Required));
    }

    #[test]
    fn test_form_skips_optional_fields() {
        let mut fields = filled_form();
        if let Some(m) = fields.iter_mut().find(|f| f.name == MOTIVATION) {
            m.value = "x".to_string();
        }
        assert!(validate_form(&fields).is_ok());
    }
}
