//! Catalog data model: immutable procedure records plus the ephemeral
//! filter state the UI feeds into the filter engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filter::{price_bounds, time_bounds};

/// Category tag used to group procedures for display.
///
/// This is a closed set: unknown values in the catalog are a parse error,
/// not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "High-Ticket")]
    HighTicket,
    Entry,
    Recurring,
    Package,
}

impl Classification {
    /// Display name, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::HighTicket => "High-Ticket",
            Classification::Entry => "Entry",
            Classification::Recurring => "Recurring",
            Classification::Package => "Package",
        }
    }
}

/// Top-level lens over the catalog. Each view shows a fixed subset of
/// classifications; a procedure never appears under both views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Financial,
    Commercial,
}

impl ViewMode {
    pub fn classifications(&self) -> &'static [Classification] {
        match self {
            ViewMode::Financial => &[Classification::HighTicket, Classification::Entry],
            ViewMode::Commercial => &[Classification::Recurring, Classification::Package],
        }
    }
}

/// A named, costed material consumed once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consumable {
    pub name: String,
    pub cost: Decimal,
}

/// A catalog entry describing a billable treatment offering.
///
/// Catalog records are static reference data: loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Procedure {
    pub id: u32,
    pub name: String,
    pub suggested_price: Decimal,
    pub session_count: u32,
    pub session_duration_minutes: u32,
    pub description: String,
    pub classification: Classification,
    pub consumables: Vec<Consumable>,
    pub professional_cost_per_session: Decimal,
    pub labels: Vec<String>,
}

/// User-controlled filter state. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub selected_labels: Vec<String>,
    pub time_min: u32,
    pub time_max: u32,
    pub price_min: Decimal,
    pub price_max: Decimal,
}

impl FilterState {
    /// Default filter state for a catalog: no search, no labels, price and
    /// time bounds wide enough to pass every record through.
    pub fn for_catalog(procedures: &[Procedure]) -> Self {
        let (price_min, price_max) = price_bounds(procedures);
        let (time_min, time_max) = time_bounds(procedures);
        Self {
            search_term: String::new(),
            selected_labels: Vec::new(),
            time_min,
            time_max,
            price_min,
            price_max,
        }
    }
}

/// One display group: a classification and the procedures under it,
/// in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcedureGroup {
    pub classification: Classification,
    pub procedures: Vec<Procedure>,
}
