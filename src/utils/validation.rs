use crate::utils::error::{KataError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be exactly one character".to_string(),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(KataError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_single_char() {
        assert_eq!(validate_single_char("separator", " ").unwrap(), ' ');
        assert_eq!(validate_single_char("separator", "é").unwrap(), 'é');
        assert!(validate_single_char("separator", "").is_err());
        assert!(validate_single_char("separator", ", ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("wind_direction", 0, 0, 359).is_ok());
        assert!(validate_range("wind_direction", 359, 0, 359).is_ok());
        assert!(validate_range("wind_direction", 360, 0, 359).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("response", "20;181;5.1").is_ok());
        assert!(validate_non_empty_string("response", "   ").is_err());
    }
}
