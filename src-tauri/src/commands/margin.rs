use tracing::debug;

use crate::margin::{compute_margin, SimulationInput, SimulationResult};

/// Run the margin simulation for the current parameter set. Invoked on
/// every parameter edit; errors become a "cannot compute" state in the UI.
#[tauri::command]
pub fn simulate_margin(input: SimulationInput) -> Result<SimulationResult, String> {
    debug!(
        "Simulating margin: {} sessions at {}",
        input.session_count, input.price_per_session
    );
    compute_margin(&input).map_err(Into::into)
}
