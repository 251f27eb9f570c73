use serde::{Deserialize, Serialize};

/// One simulated month of the ledger.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MonthlyRecord {
    pub month: u32,
    /// Interest accrued this month, before the contribution is added.
    pub interest_this_month: f64,
    /// Principal plus every contribution made so far.
    pub cumulative_contributions: f64,
    pub cumulative_interest: f64,
    pub total_balance: f64,
}

impl MonthlyRecord {
    /// 1-based year the month falls in.
    pub fn year(&self) -> u32 {
        (self.month + 11) / 12
    }

    pub fn is_year_end(&self) -> bool {
        self.month % 12 == 0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub monthly_rate: f64,
    pub ledger: Vec<MonthlyRecord>,
    pub year_end_balances: Vec<f64>,
}

impl ProjectionResult {
    /// Headline figure: the balance at the end of the last year.
    pub fn final_balance(&self) -> f64 {
        self.year_end_balances.last().copied().unwrap_or(0.0)
    }

    pub fn total_contributions(&self) -> f64 {
        self.ledger.last().map(|r| r.cumulative_contributions).unwrap_or(0.0)
    }

    pub fn total_interest(&self) -> f64 {
        self.ledger.last().map(|r| r.cumulative_interest).unwrap_or(0.0)
    }

    /// (year, balance) pairs, year starting at 1. Used for charting.
    pub fn year_summaries(&self) -> Vec<(u32, f64)> {
        self.year_end_balances
            .iter()
            .enumerate()
            .map(|(i, balance)| (i as u32 + 1, *balance))
            .collect()
    }

    pub fn year_end_records(&self) -> impl Iterator<Item = &MonthlyRecord> {
        self.ledger.iter().filter(|r| r.is_year_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32, balance: f64) -> MonthlyRecord {
        MonthlyRecord {
            month,
            interest_this_month: 0.0,
            cumulative_contributions: balance,
            cumulative_interest: 0.0,
            total_balance: balance,
        }
    }

    #[test]
    fn test_year_of_month() {
        assert_eq!(record(1, 0.0).year(), 1);
        assert_eq!(record(12, 0.0).year(), 1);
        assert_eq!(record(13, 0.0).year(), 2);
        assert!(record(24, 0.0).is_year_end());
        assert!(!record(23, 0.0).is_year_end());
    }

    #[test]
    fn test_summaries() {
        let result = ProjectionResult {
            monthly_rate: 0.0,
            ledger: (1..=24).map(|m| record(m, m as f64)).collect(),
            year_end_balances: vec![12.0, 24.0],
        };
        assert_eq!(result.final_balance(), 24.0);
        assert_eq!(result.total_contributions(), 24.0);
        assert_eq!(result.year_summaries(), vec![(1, 12.0), (2, 24.0)]);
        assert_eq!(result.year_end_records().count(), 2);
    }
}
