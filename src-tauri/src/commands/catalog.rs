use rust_decimal::Decimal;
use serde::Serialize;
use tauri::State;
use tracing::debug;

use crate::catalog::{
    distinct_labels, filter_procedures, group_by_view, price_bounds, time_bounds, CatalogState,
    FilterState, Procedure, ProcedureGroup, ViewMode,
};

/// Observed catalog ranges, used by the UI to seed the filter sliders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBounds {
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub time_min: u32,
    pub time_max: u32,
}

#[tauri::command]
pub fn list_procedures(catalog: State<CatalogState>) -> Vec<Procedure> {
    catalog.procedures().to_vec()
}

#[tauri::command]
pub fn filter_catalog(catalog: State<CatalogState>, filters: FilterState) -> Vec<Procedure> {
    debug!("Filtering catalog: {:?}", filters);
    filter_procedures(catalog.procedures(), &filters)
}

#[tauri::command]
pub fn group_catalog(
    catalog: State<CatalogState>,
    filters: FilterState,
    view: ViewMode,
) -> Vec<ProcedureGroup> {
    debug!("Grouping catalog for {:?}", view);
    let filtered = filter_procedures(catalog.procedures(), &filters);
    group_by_view(&filtered, view)
}

#[tauri::command]
pub fn catalog_labels(catalog: State<CatalogState>) -> Vec<String> {
    distinct_labels(catalog.procedures())
}

#[tauri::command]
pub fn catalog_bounds(catalog: State<CatalogState>) -> CatalogBounds {
    let (price_min, price_max) = price_bounds(catalog.procedures());
    let (time_min, time_max) = time_bounds(catalog.procedures());
    CatalogBounds {
        price_min,
        price_max,
        time_min,
        time_max,
    }
}
