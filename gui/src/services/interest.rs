// Compound interest for the demo calculator. Inputs and outputs are canonical
// strings so the form never handles locale-formatted text.
use engine::validation::{validate, NumericConstraints, ValidationError};
use shared::utils::to_canonical;

#[derive(Debug, Clone, PartialEq)]
pub struct InterestInputs {
    pub principal: String,
    pub annual_rate: String,
    pub years: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterestResult {
    /// Canonical, two decimals at most.
    pub final_amount: String,
    pub interest: String,
}

/// Per-field validation outcome. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterestErrors {
    pub principal: Option<ValidationError>,
    pub annual_rate: Option<ValidationError>,
    pub years: Option<ValidationError>,
}

impl InterestErrors {
    pub fn is_empty(&self) -> bool {
        self.principal.is_none() && self.annual_rate.is_none() && self.years.is_none()
    }
}

pub fn principal_constraints() -> NumericConstraints {
    NumericConstraints::required().with_min(0.0)
}

pub fn rate_constraints() -> NumericConstraints {
    NumericConstraints::required().with_min(0.0).with_max(1000.0)
}

pub fn years_constraints() -> NumericConstraints {
    NumericConstraints::required().with_min(1.0).with_max(100.0).integer_only()
}

/// Annual compounding: `principal * (1 + rate/100)^years`.
pub fn compound_interest(principal: f64, annual_rate_pct: f64, years: u32) -> InterestResult {
    let final_amount = principal * (1.0 + annual_rate_pct / 100.0).powi(years as i32);
    InterestResult {
        final_amount: to_canonical(final_amount, 2),
        interest: to_canonical(final_amount - principal, 2),
    }
}

/// Validates every field and computes the result when all of them pass.
pub fn evaluate(inputs: &InterestInputs) -> Result<InterestResult, InterestErrors> {
    let principal = validate(&inputs.principal, &principal_constraints());
    let rate = validate(&inputs.annual_rate, &rate_constraints());
    let years = validate(&inputs.years, &years_constraints());

    match (principal, rate, years) {
        (Ok(Some(p)), Ok(Some(r)), Ok(Some(y))) => Ok(compound_interest(p, r, y as u32)),
        (p, r, y) => Err(InterestErrors {
            principal: p.err(),
            annual_rate: r.err(),
            years: y.err(),
        }),
    }
}
