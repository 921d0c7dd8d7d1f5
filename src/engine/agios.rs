//! Agios (total bank charges) and annualized rate calculations
//!
//! Agios combine the commercial discount with a flat commission on the
//! nominal, before (HT) and after (TTC) value-added tax. The rate
//! calculation annualizes those charges back into effective percentages
//! over the 360-day year:
//! - TRE: effective discount rate, charges relative to the nominal
//! - TP: placement rate, charges relative to the net received
//! - TR: cost rate, equal to TP under this formulation

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::rounding::round2;

/// Result of an agios calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgiosResult {
    /// Total charges before tax (discount + commission)
    pub agios_ht: f64,

    /// Total charges including VAT
    pub agios_ttc: f64,

    /// Amount received before tax
    pub net_ht: f64,

    /// Amount received after tax
    pub net_ttc: f64,
}

/// Result of an annualized rate calculation, all values in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatesResult {
    /// Taux reel d'escompte: agios annualized over the nominal
    pub tre: f64,

    /// Taux de placement: agios annualized over the net received
    pub tp: f64,

    /// Taux de revient: coincides with TP in this formulation
    pub tr: f64,
}

/// Unrounded charges and net: shared by the agios and rate calculations
fn raw_agios(nominal: f64, rate_percent: f64, days: u32, commission_percent: f64) -> (f64, f64) {
    let discount = nominal * (rate_percent / 100.0) * days as f64 / 360.0;
    let commission_amount = nominal * commission_percent / 100.0;
    let agios = discount + commission_amount;
    (agios, nominal - agios)
}

/// Total bank charges for discounting an effect, before and after VAT
pub fn agios(
    nominal: f64,
    rate_percent: f64,
    days: u32,
    commission_percent: f64,
    tva_percent: f64,
) -> AgiosResult {
    let (agios_ht, net_ht) = raw_agios(nominal, rate_percent, days, commission_percent);
    let agios_ttc = agios_ht * (1.0 + tva_percent / 100.0);
    let net_ttc = nominal - agios_ttc;

    AgiosResult {
        agios_ht: round2(agios_ht),
        agios_ttc: round2(agios_ttc),
        net_ht: round2(net_ht),
        net_ttc: round2(net_ttc),
    }
}

/// Annualized effective rates implied by the agios
///
/// Fails on zero nominal, zero days, or zero net rather than producing
/// NaN or Infinity.
pub fn rates(
    nominal: f64,
    rate_percent: f64,
    days: u32,
    commission_percent: f64,
) -> Result<RatesResult, EngineError> {
    if nominal == 0.0 {
        return Err(EngineError::DegenerateInput {
            reason: "nominal value is zero in rate calculation".to_string(),
        });
    }
    if days == 0 {
        return Err(EngineError::DegenerateInput {
            reason: "day count is zero in rate calculation".to_string(),
        });
    }

    let (agios, net) = raw_agios(nominal, rate_percent, days, commission_percent);
    if net == 0.0 {
        return Err(EngineError::DegenerateInput {
            reason: "net value is zero in rate calculation".to_string(),
        });
    }

    let tre = agios * 360.0 / (nominal * days as f64) * 100.0;
    let tp = agios * 360.0 / (net * days as f64) * 100.0;
    // Taux de revient uses the same formula as taux de placement here;
    // the equality is intentional and preserved as-is.
    let tr = tp;

    Ok(RatesResult {
        tre: round2(tre),
        tp: round2(tp),
        tr: round2(tr),
    })
}
