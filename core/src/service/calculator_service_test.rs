#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::model::{HistoryEntry, InvestmentParameters};
    use crate::repository::{HistoryStore, InMemoryHistoryStore};
    use crate::service::calculator_service::CalculatorService;
    use crate::service::dto::Outcome;

    #[derive(Default)]
    struct MockHistoryStore {
        entries: Vec<HistoryEntry>,
    }

    impl HistoryStore for MockHistoryStore {
        fn append(&mut self, entry: HistoryEntry) {
            self.entries.push(entry);
        }
        fn recent_entries(&self, limit: usize) -> Vec<HistoryEntry> {
            self.entries.iter().rev().take(limit).cloned().collect()
        }
        fn len(&self) -> usize {
            self.entries.len()
        }
    }

    #[test]
    fn test_success_appends_history() {
        let mut service = CalculatorService::new(MockHistoryStore::default());
        let params = InvestmentParameters::with_rate_percent(1000.0, 200.0, 10.0, 5);

        let outcome = service.handle(params);

        let result = outcome.result().expect("projection should succeed");
        assert_eq!(result.ledger.len(), 60);
        assert_eq!(service.store().len(), 1);

        let history = service.recent_history(10);
        assert_eq!(history[0].params, params);
        assert_eq!(history[0].final_balance, result.final_balance());
        assert!(history[0].summary.ends_with("=> A=16,922.76"));
    }

    #[test]
    fn test_failure_leaves_history_untouched() {
        let mut service = CalculatorService::new(MockHistoryStore::default());
        service.handle(InvestmentParameters::new(100.0, 10.0, 0.05, 1));

        let outcome = service.handle(InvestmentParameters::new(100.0, 10.0, 0.05, 0));

        match outcome {
            Outcome::Failure { kind, message } => {
                assert_eq!(kind, ErrorKind::InvalidInput);
                assert!(message.contains("years"));
            }
            Outcome::Success(_) => panic!("zero years must be rejected"),
        }
        assert_eq!(service.store().len(), 1);
        assert_eq!(service.recent_history(10)[0].params.years, 1);
    }

    #[test]
    fn test_history_is_recent_first_and_bounded() {
        let mut service = CalculatorService::new(InMemoryHistoryStore::new(10));
        for years in 1..=12 {
            assert!(service.handle(InvestmentParameters::new(0.0, 100.0, 0.0, years)).is_success());
        }

        let history = service.recent_history(10);
        assert_eq!(history.len(), 10);
        assert_eq!(history.first().map(|e| e.params.years), Some(12));
        assert_eq!(history.last().map(|e| e.params.years), Some(3));
    }

    #[test]
    fn test_independent_sessions_do_not_share_history() {
        let mut first = CalculatorService::new(InMemoryHistoryStore::default());
        let second = CalculatorService::new(InMemoryHistoryStore::default());

        first.handle(InvestmentParameters::new(1.0, 1.0, 0.01, 1));

        assert_eq!(first.store().len(), 1);
        assert!(second.store().is_empty());
    }
}
