pub mod memory;
pub mod traits;

// Re-export
pub use memory::InMemoryHistoryStore;
pub use traits::HistoryStore;
