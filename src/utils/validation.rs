use crate::utils::error::{FormError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FormError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Element ids end up in `getElementById`, so whitespace is never meaningful.
pub fn validate_element_id(field_name: &str, id: &str) -> Result<()> {
    validate_non_empty_string(field_name, id)?;
    if id.chars().any(char::is_whitespace) {
        return Err(FormError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: id.to_string(),
            reason: "Element ids cannot contain whitespace".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique<'a, I>(field_name: &str, values: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(FormError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("fields.max_len", 4, 1).is_ok());
        assert!(validate_positive_number("fields.max_len", 0, 1).is_err());
    }

    #[test]
    fn test_validate_element_id() {
        assert!(validate_element_id("fields.id", "nome_banco").is_ok());
        assert!(validate_element_id("fields.id", "").is_err());
        assert!(validate_element_id("fields.id", "   ").is_err());
        assert!(validate_element_id("fields.id", "nome banco").is_err());
    }

    #[test]
    fn test_validate_unique() {
        assert!(validate_unique("fields.id", ["nome", "email"]).is_ok());

        let err = validate_unique("fields.id", ["nome", "email", "nome"]).unwrap_err();
        assert!(matches!(
            err,
            FormError::InvalidConfigValueError { ref value, .. } if value == "nome"
        ));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3usize);
        let missing: Option<usize> = None;
        assert_eq!(*validate_required_field("page.value", &present).unwrap(), 3);
        assert!(validate_required_field("page.value", &missing).is_err());
    }
}
