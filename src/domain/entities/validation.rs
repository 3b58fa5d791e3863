use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

pub const MAX_URL_LENGTH: u64 = 500;

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

/// Rejects values that are empty once surrounding whitespace is removed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "Value cannot be blank"));
    }
    Ok(())
}

/// Postgres text columns cannot store NUL.
pub fn validate_no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(new_validation_error("nul_character", "Value cannot contain NUL characters"));
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://"))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

/// Like [`validate_url`], but an empty string means "no link".
pub fn validate_optional_url(url: &str) -> Result<(), ValidationError> {
    if url.trim().is_empty() {
        return Ok(());
    }
    validate_no_nul(url)?;
    validate_url(url)
}

/// Unwraps a field that `#[validate(required)]` has already checked.
pub fn required_field(field: &'static str, value: Option<String>) -> Result<String, ValidationErrors> {
    let missing = || new_validation_error("required", "Field is required");

    let result = match value {
        Some(v) if !v.trim().is_empty() => validate_no_nul(&v).map(|_| v),
        _ => Err(missing()),
    };

    result.map_err(|err| {
        let mut errors = ValidationErrors::new();
        errors.add(field, err);
        errors
    })
}

/// Maps `None` and whitespace-only strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank("hi").is_ok());
    }

    #[test]
    fn only_http_urls_pass() {
        assert!(validate_url("https://example.com/app").is_ok());
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not a url").is_err());
    }

    #[test]
    fn empty_optional_url_is_accepted() {
        assert!(validate_optional_url("").is_ok());
        assert!(validate_optional_url("mailto:me@example.com").is_err());
    }

    #[test]
    fn required_field_reports_missing_value() {
        assert_eq!(required_field("title", Some("T".into())).unwrap(), "T");

        let errors = required_field("title", None).unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(required_field("title", Some("  ".into())).is_err());
    }

    #[test]
    fn nul_characters_are_rejected() {
        assert!(validate_no_nul("hi\0there").is_err());
        assert!(validate_no_nul("hi there").is_ok());
        assert!(validate_optional_url("https://example.com/\0").is_err());

        let errors = required_field("message", Some("hi\0there".into())).unwrap_err();
        assert!(errors.field_errors().contains_key("message"));
    }

    #[test]
    fn non_blank_trims_and_drops_empty() {
        assert_eq!(non_blank(Some("  x ".into())), Some("x".to_string()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
