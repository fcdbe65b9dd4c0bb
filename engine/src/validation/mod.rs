// Numeric validation over canonical values. The field itself never rejects
// input; forms run these checks on the canonical string afterwards.
use serde::Deserialize;
use shared::utils::parse_canonical;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumericConstraints {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub integer_only: bool,
}

impl NumericConstraints {
    pub fn required() -> Self {
        Self { required: true, ..Self::default() }
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn integer_only(mut self) -> Self {
        self.integer_only = true;
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("A value is required")]
    Required,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{value} is below the minimum of {min}")]
    BelowMin { value: f64, min: f64 },

    #[error("{value} is above the maximum of {max}")]
    AboveMax { value: f64, max: f64 },

    #[error("{0} must be a whole number")]
    NotInteger(f64),
}

/// Checks a canonical value. An empty, non-required value is `Ok(None)`;
/// otherwise the parsed number is returned.
pub fn validate(canonical: &str, constraints: &NumericConstraints) -> Result<Option<f64>, ValidationError> {
    if canonical.is_empty() {
        return if constraints.required { Err(ValidationError::Required) } else { Ok(None) };
    }

    let value = parse_canonical(canonical).ok_or_else(|| ValidationError::NotANumber(canonical.to_string()))?;

    if let Some(min) = constraints.min {
        if value < min {
            return Err(ValidationError::BelowMin { value, min });
        }
    }
    if let Some(max) = constraints.max {
        if value > max {
            return Err(ValidationError::AboveMax { value, max });
        }
    }
    if constraints.integer_only && value.fract() != 0.0 {
        return Err(ValidationError::NotInteger(value));
    }
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value() {
        assert_eq!(validate("", &NumericConstraints::default()), Ok(None));
        assert_eq!(validate("", &NumericConstraints::required()), Err(ValidationError::Required));
    }

    #[test]
    fn test_incomplete_values_still_parse() {
        assert_eq!(validate("1500.", &NumericConstraints::required()), Ok(Some(1500.0)));
        assert_eq!(
            validate(".", &NumericConstraints::default()),
            Err(ValidationError::NotANumber(".".to_string()))
        );
    }

    #[test]
    fn test_bounds() {
        let constraints = NumericConstraints::required().with_min(10.0).with_max(100.0);
        assert_eq!(validate("50", &constraints), Ok(Some(50.0)));
        assert_eq!(validate("9.99", &constraints), Err(ValidationError::BelowMin { value: 9.99, min: 10.0 }));
        assert_eq!(validate("100.5", &constraints), Err(ValidationError::AboveMax { value: 100.5, max: 100.0 }));
    }

    #[test]
    fn test_integer_only() {
        let constraints = NumericConstraints::default().integer_only();
        assert_eq!(validate("12", &constraints), Ok(Some(12.0)));
        assert_eq!(validate("12.", &constraints), Ok(Some(12.0)));
        assert_eq!(validate("12.5", &constraints), Err(ValidationError::NotInteger(12.5)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::BelowMin { value: 5.0, min: 10.0 }.to_string(), "5 is below the minimum of 10");
        assert_eq!(ValidationError::NotInteger(2.5).to_string(), "2.5 must be a whole number");
    }
}
