use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Longest projection accepted. Keeps the ledger to at most 12,000 rows.
pub const MAX_YEARS: u32 = 1000;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct InvestmentParameters {
    pub initial_principal: f64,
    pub monthly_contribution: f64,
    /// Nominal annual rate as a fraction, e.g. 0.10 for 10%.
    pub annual_rate: f64,
    pub years: u32,
}

impl InvestmentParameters {
    pub fn new(initial_principal: f64, monthly_contribution: f64, annual_rate: f64, years: u32) -> Self {
        Self {
            initial_principal,
            monthly_contribution,
            annual_rate,
            years,
        }
    }

    /// Builds parameters from a rate expressed in percent, the way users type it.
    pub fn with_rate_percent(initial_principal: f64, monthly_contribution: f64, rate_percent: f64, years: u32) -> Self {
        Self::new(initial_principal, monthly_contribution, rate_percent / 100.0, years)
    }

    pub fn rate_percent(&self) -> f64 {
        self.annual_rate * 100.0
    }

    pub fn months(&self) -> Result<u32, ProjectionError> {
        self.years.checked_mul(12).ok_or_else(|| {
            ProjectionError::invalid("years", format!("{} years is more months than can be counted", self.years))
        })
    }

    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_amount("initial_principal", self.initial_principal)?;
        check_amount("monthly_contribution", self.monthly_contribution)?;
        check_amount("annual_rate", self.annual_rate)?;
        if self.years < 1 {
            return Err(ProjectionError::invalid("years", "must be at least 1"));
        }
        if self.years > MAX_YEARS {
            return Err(ProjectionError::invalid("years", format!("must be at most {}", MAX_YEARS)));
        }
        Ok(())
    }
}

fn check_amount(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::invalid(field, format!("{} is not a finite number", value)));
    }
    if value < 0.0 {
        return Err(ProjectionError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zeroes() {
        let params = InvestmentParameters::new(0.0, 0.0, 0.0, 1);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_years() {
        let params = InvestmentParameters::new(1000.0, 200.0, 0.1, 0);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { field: "years", .. }));
    }

    #[test]
    fn test_validate_rejects_negative_and_non_finite() {
        let negative = InvestmentParameters::new(-1.0, 0.0, 0.1, 1);
        assert!(matches!(
            negative.validate(),
            Err(ProjectionError::InvalidInput { field: "initial_principal", .. })
        ));

        let nan = InvestmentParameters::new(0.0, f64::NAN, 0.1, 1);
        assert!(matches!(
            nan.validate(),
            Err(ProjectionError::InvalidInput { field: "monthly_contribution", .. })
        ));

        let inf = InvestmentParameters::new(0.0, 0.0, f64::INFINITY, 1);
        assert!(matches!(
            inf.validate(),
            Err(ProjectionError::InvalidInput { field: "annual_rate", .. })
        ));
    }

    #[test]
    fn test_rate_percent_conversion() {
        let params = InvestmentParameters::with_rate_percent(1000.0, 200.0, 10.0, 5);
        assert!((params.annual_rate - 0.10).abs() < 1e-12);
        assert!((params.rate_percent() - 10.0).abs() < 1e-9);
        assert_eq!(params.months(), Ok(60));
    }

    #[test]
    fn test_months_overflow_is_an_error() {
        let largest = InvestmentParameters::new(0.0, 0.0, 0.0, u32::MAX / 12);
        assert_eq!(largest.months(), Ok(u32::MAX / 12 * 12));

        let too_many = InvestmentParameters::new(0.0, 0.0, 0.0, 400_000_000);
        assert!(matches!(
            too_many.months(),
            Err(ProjectionError::InvalidInput { field: "years", .. })
        ));
    }

    #[test]
    fn test_validate_bounds_years() {
        assert!(InvestmentParameters::new(0.0, 0.0, 0.0, MAX_YEARS).validate().is_ok());
        let err = InvestmentParameters::new(0.0, 0.0, 0.0, MAX_YEARS + 1).validate().unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { field: "years", .. }));
    }
}
