use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::format_amount;
use crate::model::params::InvestmentParameters;

/// A record of one successful calculation. Never mutated after creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub params: InvestmentParameters,
    pub final_balance: f64,
    pub summary: String,
}

impl HistoryEntry {
    pub fn new(params: InvestmentParameters, final_balance: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            summary: summarize(&params, final_balance),
            params,
            final_balance,
        }
    }
}

pub fn summarize(params: &InvestmentParameters, final_balance: f64) -> String {
    format!(
        "P={}, Contribution={}, r={:.2}%, n={} years => A={}",
        format_amount(params.initial_principal),
        format_amount(params.monthly_contribution),
        params.rate_percent(),
        params.years,
        format_amount(final_balance),
    )
}
