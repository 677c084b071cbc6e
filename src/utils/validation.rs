use crate::utils::error::{RosterError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Returns the trimmed text, or a validation error if nothing is left after trimming.
pub fn require_text(field_name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RosterError::validation(field_name, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

pub fn validate_positive_id(field_name: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(RosterError::validation(field_name, "must be positive"));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| RosterError::NullArgument {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RosterError::InvalidArgument {
            message: format!("{} must not be empty", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("first_name", "  Ivan ").unwrap(), "Ivan");
        assert!(require_text("first_name", "   ").is_err());
        assert!(require_text("first_name", "").is_err());
    }

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id("id", 1).is_ok());
        assert!(validate_positive_id("id", 0).is_err());
        assert!(validate_positive_id("id", -5).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("id", &present).unwrap(), 3);
        match validate_required_field("id", &missing) {
            Err(RosterError::NullArgument { field }) => assert_eq!(field, "id"),
            other => panic!("expected NullArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "CS").is_ok());
        assert!(matches!(
            validate_non_empty_string("name", " \t"),
            Err(RosterError::InvalidArgument { .. })
        ));
    }
}
