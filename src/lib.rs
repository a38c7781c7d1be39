pub mod aggregate;
pub mod calculator;
pub mod cards;
pub mod deck;
pub mod error;
pub mod evaluator;
pub mod simulator;
pub mod web;

pub use aggregate::{EquityResult, aggregate};
pub use calculator::{Calculator, CalculatorConfig};
pub use error::EquityError;
pub use simulator::{TrialCounts, simulate};
