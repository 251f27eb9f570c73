pub mod history;
pub mod params;
pub mod projection;

pub use history::HistoryEntry;
pub use params::{InvestmentParameters, MAX_YEARS};
pub use projection::{MonthlyRecord, ProjectionResult};
