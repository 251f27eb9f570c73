pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;

pub use config::Settings;
pub use engine::{effective_monthly_rate, project};
pub use error::{ErrorKind, ProjectionError};
pub use format::{format_amount, format_compact, format_percent};
pub use input::{expand_key, parse_args, parse_parameters, Field, ParsedInput};
pub use model::{HistoryEntry, InvestmentParameters, MonthlyRecord, ProjectionResult, MAX_YEARS};
pub use repository::{HistoryStore, InMemoryHistoryStore};
pub use service::{CalculatorService, Outcome};
