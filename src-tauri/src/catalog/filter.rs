//! Catalog filter/group engine.
//!
//! All functions here are pure and O(n) in catalog size; the UI calls them
//! on every filter input event. Filtering is a stable pass over the catalog:
//! result order is catalog order, never re-sorted.

use rust_decimal::Decimal;

use super::types::{FilterState, Procedure, ProcedureGroup, ViewMode};

/// Fallback price range when the catalog is empty.
const FALLBACK_PRICE_MAX: i64 = 1000;
/// Fallback session-duration range (minutes) when the catalog is empty.
const FALLBACK_TIME_MAX: u32 = 120;

/// Filter the catalog. A procedure survives only if every dimension matches:
/// search term (case-insensitive substring over name and description),
/// labels (at least one shared label, empty selection matches all), and
/// inclusive duration and price bounds.
pub fn filter_procedures(procedures: &[Procedure], filters: &FilterState) -> Vec<Procedure> {
    let term = filters.search_term.to_lowercase();

    procedures
        .iter()
        .filter(|p| {
            let matches_search = term.is_empty()
                || p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term);

            let matches_labels = filters.selected_labels.is_empty()
                || filters.selected_labels.iter().any(|l| p.labels.contains(l));

            let matches_time = p.session_duration_minutes >= filters.time_min
                && p.session_duration_minutes <= filters.time_max;

            let matches_price =
                p.suggested_price >= filters.price_min && p.suggested_price <= filters.price_max;

            matches_search && matches_labels && matches_time && matches_price
        })
        .cloned()
        .collect()
}

/// Partition procedures into display groups for a view.
///
/// Procedures whose classification does not belong to the view are dropped
/// first; survivors are grouped by their literal classification. Group order
/// is first-seen order, members keep catalog order. An empty result is a
/// valid empty state, not an error.
pub fn group_by_view(procedures: &[Procedure], view: ViewMode) -> Vec<ProcedureGroup> {
    let allowed = view.classifications();
    let mut groups: Vec<ProcedureGroup> = Vec::new();

    for procedure in procedures
        .iter()
        .filter(|p| allowed.contains(&p.classification))
    {
        match groups
            .iter_mut()
            .find(|g| g.classification == procedure.classification)
        {
            Some(group) => group.procedures.push(procedure.clone()),
            None => groups.push(ProcedureGroup {
                classification: procedure.classification,
                procedures: vec![procedure.clone()],
            }),
        }
    }

    groups
}

/// All labels across the catalog: deduplicated, case-sensitive,
/// lexicographically sorted.
pub fn distinct_labels(procedures: &[Procedure]) -> Vec<String> {
    let mut labels: Vec<String> = procedures
        .iter()
        .flat_map(|p| p.labels.iter().cloned())
        .collect();
    labels.sort();
    labels.dedup();
    labels
}

/// Observed min/max of suggested prices, or `(0, 1000)` for an empty catalog.
pub fn price_bounds(procedures: &[Procedure]) -> (Decimal, Decimal) {
    let mut prices = procedures.iter().map(|p| p.suggested_price);
    let first = match prices.next() {
        Some(p) => p,
        None => return (Decimal::ZERO, Decimal::from(FALLBACK_PRICE_MAX)),
    };
    prices.fold((first, first), |(min, max), p| (min.min(p), max.max(p)))
}

/// Observed min/max of session durations, or `(0, 120)` for an empty catalog.
pub fn time_bounds(procedures: &[Procedure]) -> (u32, u32) {
    let mut times = procedures.iter().map(|p| p.session_duration_minutes);
    let first = match times.next() {
        Some(t) => t,
        None => return (0, FALLBACK_TIME_MAX),
    };
    times.fold((first, first), |(min, max), t| (min.min(t), max.max(t)))
}
