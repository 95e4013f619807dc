//! Embedded catalog loading.
//!
//! The procedure catalog is static reference data bundled with the app.
//! It is parsed once at startup; records that violate the catalog
//! invariants are dropped here with a warning so the engines downstream
//! can trust every record they see.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::CareFlowError;

use super::types::Procedure;

static CATALOG_JSON: &str = include_str!("../../data/procedures.json");

/// The loaded, validated catalog. Managed as Tauri state; read-only.
pub struct CatalogState {
    procedures: Vec<Procedure>,
}

impl CatalogState {
    /// Parse and validate the embedded catalog.
    pub fn load() -> Result<Self, CareFlowError> {
        let procedures = parse_catalog(CATALOG_JSON)
            .map_err(|e| CareFlowError::Config(format!("{:#}", e)))?;
        info!("Loaded catalog with {} procedures", procedures.len());
        Ok(Self { procedures })
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }
}

fn parse_catalog(json: &str) -> Result<Vec<Procedure>> {
    let raw: Vec<Procedure> =
        serde_json::from_str(json).context("embedded procedure catalog is malformed")?;
    Ok(validate(raw))
}

/// Drop records that break the catalog invariants. The catalog ships with
/// the app, so a dropped record is a packaging mistake worth a warning,
/// never a runtime error.
fn validate(raw: Vec<Procedure>) -> Vec<Procedure> {
    raw.into_iter()
        .filter(|p| {
            if p.session_count == 0 {
                warn!("Dropping procedure '{}': session count is zero", p.name);
                return false;
            }
            if p.session_duration_minutes == 0 {
                warn!("Dropping procedure '{}': session duration is zero", p.name);
                return false;
            }
            if p.professional_cost_per_session < Decimal::ZERO {
                warn!(
                    "Dropping procedure '{}': negative professional cost",
                    p.name
                );
                return false;
            }
            if p.consumables.iter().any(|c| c.cost < Decimal::ZERO) {
                warn!("Dropping procedure '{}': negative consumable cost", p.name);
                return false;
            }
            true
        })
        .collect()
}
