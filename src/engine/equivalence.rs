//! Equivalent-date calculation for a set of effects
//!
//! Finds the single due date whose amount-weighted day offset from a
//! common base date equals the weighted average of the effects' offsets.
//! The base date is the earliest due date across all effects, not the
//! first in input order, and the algorithm is generic over any number of
//! effects (two or more).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// A bill or draft with a face value and a maturity date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub amount: f64,
    pub due_date: NaiveDate,
}

impl Effect {
    pub fn new(amount: f64, due_date: NaiveDate) -> Self {
        Self { amount, due_date }
    }

    /// Build an effect from an amount and an ISO-8601 date string
    pub fn parse(amount: f64, due_date: &str) -> Result<Self, EngineError> {
        let due_date = due_date
            .parse::<NaiveDate>()
            .map_err(|_| EngineError::InvalidDate {
                input: due_date.to_string(),
            })?;
        Ok(Self { amount, due_date })
    }
}

/// Result of an equivalent-date calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceResult {
    /// The amount-weighted equivalent due date
    pub equivalent_date: NaiveDate,

    /// Weighted average offset from the earliest due date, in whole days
    pub weighted_days: i64,
}

/// Compute the equivalent date of a set of effects
///
/// Day offsets use calendar-day granularity (no time-of-day component).
/// Fails on fewer than two effects, a zero total amount, or a result
/// outside the representable calendar range.
pub fn equivalent_date(effects: &[Effect]) -> Result<EquivalenceResult, EngineError> {
    if effects.len() < 2 {
        return Err(EngineError::InvalidInput {
            reason: format!(
                "equivalent date requires at least 2 effects, got {}",
                effects.len()
            ),
        });
    }

    let total_amount: f64 = effects.iter().map(|e| e.amount).sum();
    if total_amount == 0.0 {
        return Err(EngineError::DegenerateInput {
            reason: "total amount of effects is zero".to_string(),
        });
    }

    // Earliest due date is the pivot
    let mut base_date = effects[0].due_date;
    for effect in &effects[1..] {
        if effect.due_date < base_date {
            base_date = effect.due_date;
        }
    }

    let weighted_sum: f64 = effects
        .iter()
        .map(|e| e.amount * (e.due_date - base_date).num_days() as f64)
        .sum();

    let weighted_days = (weighted_sum / total_amount).round() as i64;
    let equivalent_date = base_date
        .checked_add_signed(Duration::days(weighted_days))
        .ok_or_else(|| EngineError::DegenerateInput {
            reason: "equivalent date falls outside the representable calendar range".to_string(),
        })?;

    Ok(EquivalenceResult {
        equivalent_date,
        weighted_days,
    })
}
