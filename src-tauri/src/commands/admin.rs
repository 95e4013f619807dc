//! Admin panel commands: user, company and module management.
//!
//! Every command forwards to the REST backend with the session's bearer
//! token. Role enforcement lives server-side; the UI only mirrors it for
//! gating.

use tauri::{AppHandle, State};
use tracing::info;

use crate::api::types::{
    Company, CompanyPayload, ModuleInfo, PasswordReset, User, UserCreate, UserUpdate,
};
use crate::api::{ApiClient, ApiState};

use super::config::api_base_url;

fn client(app: &AppHandle, state: &ApiState) -> Result<ApiClient, String> {
    state.client(&api_base_url(app)).map_err(Into::into)
}

// -- Users --

#[tauri::command]
pub async fn list_users(app: AppHandle, state: State<'_, ApiState>) -> Result<Vec<User>, String> {
    let token = state.token()?;
    Ok(client(&app, &state)?.list_users(&token).await?)
}

#[tauri::command]
pub async fn create_user(
    app: AppHandle,
    state: State<'_, ApiState>,
    user: UserCreate,
) -> Result<User, String> {
    info!("Creating user {}", user.email);
    let token = state.token()?;
    Ok(client(&app, &state)?.create_user(&token, &user).await?)
}

#[tauri::command]
pub async fn update_user(
    app: AppHandle,
    state: State<'_, ApiState>,
    user_id: u32,
    update: UserUpdate,
) -> Result<User, String> {
    info!("Updating user {}", user_id);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .update_user(&token, user_id, &update)
        .await?)
}

#[tauri::command]
pub async fn delete_user(
    app: AppHandle,
    state: State<'_, ApiState>,
    user_id: u32,
) -> Result<(), String> {
    info!("Deleting user {}", user_id);
    let token = state.token()?;
    Ok(client(&app, &state)?.delete_user(&token, user_id).await?)
}

#[tauri::command]
pub async fn set_user_active(
    app: AppHandle,
    state: State<'_, ApiState>,
    user_id: u32,
    active: bool,
) -> Result<(), String> {
    info!("Setting user {} active={}", user_id, active);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .set_user_active(&token, user_id, active)
        .await?)
}

#[tauri::command]
pub async fn set_user_admin(
    app: AppHandle,
    state: State<'_, ApiState>,
    user_id: u32,
    admin: bool,
) -> Result<(), String> {
    info!("Setting user {} admin={}", user_id, admin);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .set_user_admin(&token, user_id, admin)
        .await?)
}

#[tauri::command]
pub async fn reset_user_password(
    app: AppHandle,
    state: State<'_, ApiState>,
    user_id: u32,
) -> Result<PasswordReset, String> {
    info!("Resetting password for user {}", user_id);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .reset_user_password(&token, user_id)
        .await?)
}

// -- Companies --

#[tauri::command]
pub async fn list_companies(
    app: AppHandle,
    state: State<'_, ApiState>,
) -> Result<Vec<Company>, String> {
    let token = state.token()?;
    Ok(client(&app, &state)?.list_companies(&token).await?)
}

#[tauri::command]
pub async fn create_company(
    app: AppHandle,
    state: State<'_, ApiState>,
    company: CompanyPayload,
) -> Result<Company, String> {
    info!("Creating company {}", company.name);
    let token = state.token()?;
    Ok(client(&app, &state)?.create_company(&token, &company).await?)
}

#[tauri::command]
pub async fn update_company(
    app: AppHandle,
    state: State<'_, ApiState>,
    company_id: u32,
    company: CompanyPayload,
) -> Result<Company, String> {
    info!("Updating company {}", company_id);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .update_company(&token, company_id, &company)
        .await?)
}

#[tauri::command]
pub async fn deactivate_company(
    app: AppHandle,
    state: State<'_, ApiState>,
    company_id: u32,
) -> Result<(), String> {
    info!("Deactivating company {}", company_id);
    let token = state.token()?;
    Ok(client(&app, &state)?
        .deactivate_company(&token, company_id)
        .await?)
}

// -- Modules --

#[tauri::command]
pub async fn list_modules(
    app: AppHandle,
    state: State<'_, ApiState>,
) -> Result<Vec<ModuleInfo>, String> {
    let token = state.token()?;
    Ok(client(&app, &state)?.list_modules(&token).await?)
}
