//! Contribution-margin simulation.
//!
//! `compute_margin` is the one piece of real arithmetic in the app. It is
//! pure and deterministic, so the UI can re-run it on every keystroke.
//! Currency math uses `Decimal` end to end; intermediate values are never
//! rounded (rounding happens only in the display formatters). Percentages
//! and hours are display-only and use `f64`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::types::{Consumable, Procedure};
use crate::error::CareFlowError;

/// Editable simulation parameters plus the fixed per-procedure cost inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub price_per_session: Decimal,
    pub session_count: u32,
    pub consumables: Vec<Consumable>,
    pub session_duration_minutes: u32,
    pub professional_cost_per_session: Decimal,
}

impl SimulationInput {
    /// Seed simulation parameters from a procedure's catalog defaults.
    pub fn from_procedure(procedure: &Procedure) -> Self {
        Self {
            price_per_session: procedure.suggested_price,
            session_count: procedure.session_count,
            consumables: procedure.consumables.clone(),
            session_duration_minutes: procedure.session_duration_minutes,
            professional_cost_per_session: procedure.professional_cost_per_session,
        }
    }
}

/// Derived simulation output. Recomputed on every parameter change,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_revenue: Decimal,
    pub total_variable_cost: Decimal,
    pub contribution_margin: Decimal,
    pub margin_percentage: f64,
    pub margin_per_session: Decimal,
    pub total_time_hours: f64,
    pub profit_per_hour: f64,
    pub variable_cost_per_session: Decimal,
}

/// Run the contribution-margin simulation.
///
/// Fails with `InvalidInput` when `session_count` or
/// `session_duration_minutes` is zero (the division guards); the unsigned
/// types make negative counts unrepresentable. Prices and costs accept
/// negative values so callers can model discounts and losses; negative
/// results are surfaced, not clamped.
///
/// Zero total revenue yields a margin percentage of 0 rather than NaN,
/// so the UI never has to render an undefined percentage.
pub fn compute_margin(input: &SimulationInput) -> Result<SimulationResult, CareFlowError> {
    if input.session_count == 0 {
        return Err(CareFlowError::InvalidInput(
            "session count must be at least 1".to_string(),
        ));
    }
    if input.session_duration_minutes == 0 {
        return Err(CareFlowError::InvalidInput(
            "session duration must be positive".to_string(),
        ));
    }

    let sessions = Decimal::from(input.session_count);

    let variable_cost_per_session = input
        .consumables
        .iter()
        .map(|c| c.cost)
        .sum::<Decimal>()
        + input.professional_cost_per_session;

    let total_revenue = input.price_per_session * sessions;
    let total_variable_cost = variable_cost_per_session * sessions;
    let contribution_margin = total_revenue - total_variable_cost;
    let margin_per_session = contribution_margin / sessions;

    let margin_percentage = if total_revenue.is_zero() {
        0.0
    } else {
        (contribution_margin / total_revenue)
            .to_f64()
            .unwrap_or(0.0)
            * 100.0
    };

    let total_time_hours =
        (input.session_duration_minutes as f64 * input.session_count as f64) / 60.0;
    let profit_per_hour = contribution_margin.to_f64().unwrap_or(0.0) / total_time_hours;

    Ok(SimulationResult {
        total_revenue,
        total_variable_cost,
        contribution_margin,
        margin_percentage,
        margin_per_session,
        total_time_hours,
        profit_per_hour,
        variable_cost_per_session,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consumable(name: &str, cost: i64) -> Consumable {
        Consumable {
            name: name.to_string(),
            cost: Decimal::from(cost),
        }
    }

    fn baseline_input() -> SimulationInput {
        SimulationInput {
            price_per_session: Decimal::from(200),
            session_count: 4,
            consumables: vec![consumable("Serum", 10), consumable("Gloves", 5)],
            session_duration_minutes: 30,
            professional_cost_per_session: Decimal::from(50),
        }
    }

    #[test]
    fn test_baseline_simulation() {
        let result = compute_margin(&baseline_input()).unwrap();

        assert_eq!(result.variable_cost_per_session, Decimal::from(65));
        assert_eq!(result.total_revenue, Decimal::from(800));
        assert_eq!(result.total_variable_cost, Decimal::from(260));
        assert_eq!(result.contribution_margin, Decimal::from(540));
        assert_eq!(result.margin_per_session, Decimal::from(135));
        assert_eq!(result.margin_percentage, 67.5);
        assert_eq!(result.total_time_hours, 2.0);
        assert_eq!(result.profit_per_hour, 270.0);
    }

    #[test]
    fn test_zero_price_yields_negative_margin_and_zero_percentage() {
        let mut input = baseline_input();
        input.price_per_session = Decimal::ZERO;
        let result = compute_margin(&input).unwrap();

        assert_eq!(result.contribution_margin, Decimal::from(-260));
        // Documented policy: zero revenue reports 0%, not NaN.
        assert_eq!(result.margin_percentage, 0.0);
    }

    #[test]
    fn test_zero_sessions_is_invalid_input() {
        let mut input = baseline_input();
        input.session_count = 0;
        assert!(matches!(
            compute_margin(&input),
            Err(CareFlowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_duration_is_invalid_input() {
        let mut input = baseline_input();
        input.session_duration_minutes = 0;
        assert!(matches!(
            compute_margin(&input),
            Err(CareFlowError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_costs_are_accepted() {
        let mut input = baseline_input();
        // A rebate on consumables is a valid modeling input.
        input.consumables = vec![consumable("Rebate", -20)];
        input.professional_cost_per_session = Decimal::from(10);
        let result = compute_margin(&input).unwrap();

        assert_eq!(result.variable_cost_per_session, Decimal::from(-10));
        assert_eq!(result.contribution_margin, Decimal::from(840));
    }

    #[test]
    fn test_determinism() {
        let input = baseline_input();
        assert_eq!(
            compute_margin(&input).unwrap(),
            compute_margin(&input).unwrap()
        );
    }

    #[test]
    fn test_algebraic_identities_hold_for_fractional_inputs() {
        let input = SimulationInput {
            price_per_session: Decimal::new(19990, 2), // 199.90
            session_count: 3,
            consumables: vec![Consumable {
                name: "Ampoule".to_string(),
                cost: Decimal::new(1235, 2), // 12.35
            }],
            session_duration_minutes: 50,
            professional_cost_per_session: Decimal::new(4575, 2), // 45.75
        };
        let result = compute_margin(&input).unwrap();
        let sessions = Decimal::from(input.session_count);

        assert_eq!(
            result.total_variable_cost,
            result.variable_cost_per_session * sessions
        );
        assert_eq!(
            result.contribution_margin,
            result.total_revenue - result.total_variable_cost
        );
        // No drift: 199.90 * 3 is exact in decimal.
        assert_eq!(result.total_revenue, Decimal::new(59970, 2));
    }

    #[test]
    fn test_seeding_from_procedure_defaults() {
        use crate::catalog::types::Classification;

        let procedure = Procedure {
            id: 7,
            name: "Botox Premium".to_string(),
            suggested_price: Decimal::from(200),
            session_count: 4,
            session_duration_minutes: 30,
            description: String::new(),
            classification: Classification::HighTicket,
            consumables: vec![consumable("Toxin", 10), consumable("Needles", 5)],
            professional_cost_per_session: Decimal::from(50),
            labels: vec![],
        };

        let input = SimulationInput::from_procedure(&procedure);
        let result = compute_margin(&input).unwrap();
        assert_eq!(result.contribution_margin, Decimal::from(540));
    }
}
