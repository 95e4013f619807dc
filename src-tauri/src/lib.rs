pub mod api;
pub mod catalog;
mod commands;
mod error;
pub mod margin;

pub use error::CareFlowError;

use catalog::CatalogState;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let catalog = CatalogState::load().expect("embedded procedure catalog failed to load");

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .manage(catalog)
        .manage(api::ApiState::new())
        .invoke_handler(tauri::generate_handler![
            commands::config::get_preference,
            commands::config::set_preference,
            commands::catalog::list_procedures,
            commands::catalog::filter_catalog,
            commands::catalog::group_catalog,
            commands::catalog::catalog_labels,
            commands::catalog::catalog_bounds,
            commands::margin::simulate_margin,
            commands::auth::login,
            commands::auth::logout,
            commands::auth::current_user,
            commands::auth::check_auth,
            commands::admin::list_users,
            commands::admin::create_user,
            commands::admin::update_user,
            commands::admin::delete_user,
            commands::admin::set_user_active,
            commands::admin::set_user_admin,
            commands::admin::reset_user_password,
            commands::admin::list_companies,
            commands::admin::create_company,
            commands::admin::update_company,
            commands::admin::deactivate_company,
            commands::admin::list_modules,
            commands::auth::update_profile,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
