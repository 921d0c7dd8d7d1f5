//! Escompte Engine - calculation core for a commercial-discount teaching tool
//!
//! This library provides:
//! - The five classroom formulas: commercial discount, rational discount,
//!   agios (HT/TTC), annualized rates (TRE/TP/TR), and equivalent dates
//! - A bounded per-kind calculation history (10 most recent per kind)
//! - A session layer that runs calculations and records them
//!
//! All formulas use the 360-day commercial year convention and round
//! monetary and rate outputs to 2 decimals at the output boundary only.

pub mod engine;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use engine::{Effect, EngineError};
pub use history::{CalculationKind, CalculationRecord, HistoryStore, HISTORY_CAPACITY};
pub use session::CalculationSession;
