pub mod calculator_service;
pub mod dto;

#[cfg(test)]
mod calculator_service_test;

pub use calculator_service::CalculatorService;
pub use dto::Outcome;
