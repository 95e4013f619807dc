use tauri::{AppHandle, State};
use tracing::{info, warn};

use crate::api::types::{LoginCredentials, User, UserUpdate};
use crate::api::ApiState;

use super::config::api_base_url;

#[tauri::command]
pub async fn login(
    app: AppHandle,
    state: State<'_, ApiState>,
    credentials: LoginCredentials,
) -> Result<User, String> {
    info!("Logging in as {}", credentials.email);
    let client = state.client(&api_base_url(&app))?;
    let response = client.login(&credentials).await?;
    state.open_session(response.access_token, response.user.clone());
    Ok(response.user)
}

/// End the session. The backend call is best-effort: the local session is
/// destroyed even when the server is unreachable.
#[tauri::command]
pub async fn logout(app: AppHandle, state: State<'_, ApiState>) -> Result<(), String> {
    if let Ok(token) = state.token() {
        let client = state.client(&api_base_url(&app))?;
        if let Err(e) = client.logout(&token).await {
            warn!("Logout request failed: {}", e);
        }
    }
    state.close_session();
    info!("Session closed");
    Ok(())
}

/// Update the signed-in user's own profile. Role changes are stripped
/// before the request; the refreshed user replaces the cached one.
#[tauri::command]
pub async fn update_profile(
    app: AppHandle,
    state: State<'_, ApiState>,
    update: UserUpdate,
) -> Result<User, String> {
    info!("Updating own profile");
    let token = state.token()?;
    let client = state.client(&api_base_url(&app))?;
    let user = client.update_me(&token, &update.for_self()).await?;
    state.refresh_user(user.clone());
    Ok(user)
}

/// The session's cached user, without a network round trip.
#[tauri::command]
pub fn current_user(state: State<'_, ApiState>) -> Option<User> {
    state.current_user()
}

/// Verify the session against the backend and refresh the cached user.
/// An invalid token destroys the session.
#[tauri::command]
pub async fn check_auth(app: AppHandle, state: State<'_, ApiState>) -> Result<Option<User>, String> {
    let token = match state.token() {
        Ok(token) => token,
        Err(_) => return Ok(None),
    };

    let client = state.client(&api_base_url(&app))?;
    match client.current_user(&token).await {
        Ok(user) => {
            state.refresh_user(user.clone());
            Ok(Some(user))
        }
        Err(e) => {
            warn!("Session check failed, closing session: {}", e);
            state.close_session();
            Ok(None)
        }
    }
}
