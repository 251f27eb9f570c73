use tracing::{info, warn};

use crate::engine::project;
use crate::model::{HistoryEntry, InvestmentParameters};
use crate::repository::HistoryStore;
use crate::service::dto::Outcome;

/// Request handler for one calculator session. Each call to [`handle`] is a
/// single user action; the session's history store is appended to only when
/// the projection succeeds.
///
/// [`handle`]: CalculatorService::handle
pub struct CalculatorService<S: HistoryStore> {
    store: S,
}

impl<S: HistoryStore> CalculatorService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn handle(&mut self, params: InvestmentParameters) -> Outcome {
        match project(&params) {
            Ok(result) => {
                let entry = HistoryEntry::new(params, result.final_balance());
                info!(id = %entry.id, "{}", entry.summary);
                self.store.append(entry);
                Outcome::Success(result)
            }
            Err(err) => {
                warn!(?params, "calculation rejected: {}", err);
                Outcome::from(Err(err))
            }
        }
    }

    pub fn recent_history(&self, limit: usize) -> Vec<HistoryEntry> {
        self.store.recent_entries(limit)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
