//! Monthly compounding projection.
//!
//! Interest for a month is computed on the balance carried into that month,
//! and the month's contribution is added afterwards. Swapping those two steps
//! changes every figure in the ledger.

use tracing::debug;

use crate::error::ProjectionError;
use crate::model::{InvestmentParameters, MonthlyRecord, ProjectionResult};

/// Effective monthly rate equivalent to a nominal annual rate:
/// `(1 + annual)^(1/12) - 1`.
pub fn effective_monthly_rate(annual_rate: f64) -> f64 {
    (1.0 + annual_rate).powf(1.0 / 12.0) - 1.0
}

pub fn project(params: &InvestmentParameters) -> Result<ProjectionResult, ProjectionError> {
    params.validate()?;

    let monthly_rate = effective_monthly_rate(params.annual_rate);
    let months = params.months()?;

    let mut balance = params.initial_principal;
    let mut cumulative_contributions = params.initial_principal;
    let mut cumulative_interest = 0.0;

    let mut ledger = Vec::with_capacity(months as usize);
    let mut year_end_balances = Vec::with_capacity(params.years as usize);

    for month in 1..=months {
        let interest = balance * monthly_rate;
        balance += interest;
        balance += params.monthly_contribution;
        cumulative_contributions += params.monthly_contribution;
        cumulative_interest += interest;

        if !balance.is_finite() {
            return Err(ProjectionError::NonFinite { month });
        }

        ledger.push(MonthlyRecord {
            month,
            interest_this_month: interest,
            cumulative_contributions,
            cumulative_interest,
            total_balance: balance,
        });

        if month % 12 == 0 {
            year_end_balances.push(balance);
        }
    }

    debug!(
        months,
        monthly_rate,
        final_balance = balance,
        "projection complete"
    );

    Ok(ProjectionResult {
        monthly_rate,
        ledger,
        year_end_balances,
    })
}


#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-6 * a.abs().max(b.abs())
    }

    fn inputs() -> impl Strategy<Value = InvestmentParameters> {
        (0.0..1e7_f64, 0.0..1e5_f64, 0.0..0.5_f64, 1u32..=50)
            .prop_map(|(p, c, r, y)| InvestmentParameters::new(p, c, r, y))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn ledger_shape_matches_years(params in inputs()) {
            let result = project(&params).unwrap();
            prop_assert_eq!(result.ledger.len(), params.years as usize * 12);
            prop_assert_eq!(result.year_end_balances.len(), params.years as usize);
            for (k, balance) in result.year_end_balances.iter().enumerate() {
                prop_assert_eq!(*balance, result.ledger[(k + 1) * 12 - 1].total_balance);
            }
        }

        #[test]
        fn balance_is_contributions_plus_interest(params in inputs()) {
            let result = project(&params).unwrap();
            for record in &result.ledger {
                let parts = record.cumulative_contributions + record.cumulative_interest;
                prop_assert!(
                    close(record.total_balance, parts),
                    "month {}: {} vs {}", record.month, record.total_balance, parts
                );
            }
        }

        #[test]
        fn balance_never_decreases(params in inputs()) {
            let result = project(&params).unwrap();
            prop_assert!(result.ledger[0].total_balance >= params.initial_principal);
            for pair in result.ledger.windows(2) {
                prop_assert!(pair[0].total_balance <= pair[1].total_balance);
            }
        }

        #[test]
        fn zero_contribution_keeps_principal_as_invested(
            principal in 0.0..1e7_f64,
            rate in 0.0..0.5_f64,
            years in 1u32..=50,
        ) {
            let result = project(&InvestmentParameters::new(principal, 0.0, rate, years)).unwrap();
            for record in &result.ledger {
                prop_assert_eq!(record.cumulative_contributions, principal);
            }
        }

        #[test]
        fn zero_rate_earns_nothing(
            principal in 0.0..1e7_f64,
            contribution in 0.0..1e5_f64,
            years in 1u32..=50,
        ) {
            let result = project(&InvestmentParameters::new(principal, contribution, 0.0, years)).unwrap();
            for record in &result.ledger {
                prop_assert_eq!(record.cumulative_interest, 0.0);
                let expected = principal + contribution * record.month as f64;
                prop_assert!(close(record.total_balance, expected));
            }
        }
    }
}
