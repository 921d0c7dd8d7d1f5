//! Session layer tying the formula engine to the calculation history
//!
//! A session owns its history store, runs calculations through the
//! engine, and records each successful one with the stable labels the
//! presentation layer displays. A failed calculation is never recorded;
//! the error propagates to the caller instead.

use log::debug;

use crate::engine::{
    self, AgiosResult, DiscountResult, Effect, EngineError, EquivalenceResult, RatesResult,
};
use crate::history::{CalculationKind, CalculationRecord, HistoryStore};

/// One user's calculation session: engine dispatch plus owned history
///
/// In a server context each independent session gets its own instance;
/// history is never shared.
#[derive(Debug, Default)]
pub struct CalculationSession {
    history: HistoryStore,
}

fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn percent(value: f64) -> String {
    format!("{}%", value)
}

impl CalculationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commercial discount, recorded under the `commercial` kind
    pub fn commercial_discount(&mut self, nominal: f64, rate: f64, days: u32) -> DiscountResult {
        let result = engine::commercial_discount(nominal, rate, days);
        debug!("commercial discount: {} at {}% over {} days", nominal, rate, days);
        self.history.push(CalculationRecord::new(
            CalculationKind::Commercial,
            vec![
                row("Valeur nominale", nominal.to_string()),
                row("Taux", percent(rate)),
                row("Jours", days.to_string()),
            ],
            vec![
                row("Escompte", money(result.discount)),
                row("Valeur actuelle", money(result.present_value)),
            ],
        ));
        result
    }

    /// Rational discount, recorded under the `rational` kind
    pub fn rational_discount(&mut self, nominal: f64, rate: f64, days: u32) -> DiscountResult {
        let result = engine::rational_discount(nominal, rate, days);
        debug!("rational discount: {} at {}% over {} days", nominal, rate, days);
        self.history.push(CalculationRecord::new(
            CalculationKind::Rational,
            vec![
                row("Valeur nominale", nominal.to_string()),
                row("Taux", percent(rate)),
                row("Jours", days.to_string()),
            ],
            vec![
                row("Escompte", money(result.discount)),
                row("Valeur actuelle", money(result.present_value)),
            ],
        ));
        result
    }

    /// Agios before and after tax, recorded under the `agios` kind
    pub fn agios(
        &mut self,
        nominal: f64,
        rate: f64,
        days: u32,
        commission: f64,
        tva: f64,
    ) -> AgiosResult {
        let result = engine::agios(nominal, rate, days, commission, tva);
        self.history.push(CalculationRecord::new(
            CalculationKind::Agios,
            vec![
                row("Valeur nominale", nominal.to_string()),
                row("Taux", percent(rate)),
                row("Jours", days.to_string()),
                row("Commission", percent(commission)),
                row("TVA", percent(tva)),
            ],
            vec![
                row("Agios HT", money(result.agios_ht)),
                row("Agios TTC", money(result.agios_ttc)),
                row("Net HT", money(result.net_ht)),
                row("Net TTC", money(result.net_ttc)),
            ],
        ));
        result
    }

    /// Annualized rates, recorded under the `rates` kind on success
    pub fn rates(
        &mut self,
        nominal: f64,
        rate: f64,
        days: u32,
        commission: f64,
    ) -> Result<RatesResult, EngineError> {
        let result = engine::rates(nominal, rate, days, commission)?;
        self.history.push(CalculationRecord::new(
            CalculationKind::Rates,
            vec![
                row("Valeur nominale", nominal.to_string()),
                row("Taux", percent(rate)),
                row("Jours", days.to_string()),
                row("Commission", percent(commission)),
            ],
            vec![
                row("TRE", percent(result.tre)),
                row("TP", percent(result.tp)),
                row("TR", percent(result.tr)),
            ],
        ));
        Ok(result)
    }

    /// Equivalent date of a set of effects, recorded under the
    /// `equivalent` kind on success
    pub fn equivalent_date(&mut self, effects: &[Effect]) -> Result<EquivalenceResult, EngineError> {
        let result = engine::equivalent_date(effects)?;

        let mut inputs = Vec::with_capacity(effects.len() * 2);
        for (i, effect) in effects.iter().enumerate() {
            inputs.push(row(&format!("Montant {}", i + 1), effect.amount.to_string()));
            inputs.push(row(&format!("Date {}", i + 1), effect.due_date.to_string()));
        }

        self.history.push(CalculationRecord::new(
            CalculationKind::Equivalent,
            inputs,
            vec![
                row("Date d'équivalence", result.equivalent_date.to_string()),
                row("Jours moyens", result.weighted_days.to_string()),
            ],
        ));
        Ok(result)
    }

    /// Read access to the recorded history
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Clear one kind's history, or everything when no kind is given
    pub fn clear_history(&mut self, kind: Option<CalculationKind>) {
        match kind {
            Some(kind) => self.history.clear_kind(kind),
            None => self.history.clear_all(),
        }
    }
}
