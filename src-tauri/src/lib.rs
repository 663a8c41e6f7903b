//! StockDesk Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - auth: Signed admin session credential
//! - commands: Tauri command handlers

use std::path::PathBuf;
use tauri::{Emitter, Manager};

mod auth;
mod commands;
mod config;
mod domain;
mod repository;

use auth::SessionState;
use config::Config;
use repository::{init_db, DbState, StockRepository};

/// Application state shared across commands
pub struct AppState {
    pub db_state: DbState,
    pub stock_repo: StockRepository,
    pub session: SessionState,
    pub config: Config,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().unwrap();
    std::fs::create_dir_all(&app_dir).unwrap();
    app_dir.join("stockdesk.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                    #[cfg(desktop)]
                    if let Some(window) = _app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let app_handle = app.handle().clone();

            // Initialize logging
            rolling_logger::init_logger(
                app_handle.path().app_log_dir().expect("failed to get log dir"),
                "StockDesk",
            )
            .expect("failed to init rolling logger");

            let db_path = get_db_path(&app_handle);
            let db_state = DbState::new(db_path.clone());

            // Manage state immediately; commands fail soft until the DB is up
            app.manage(AppState {
                stock_repo: StockRepository::new(db_state.conn.clone()),
                db_state: db_state.clone(),
                session: SessionState::new(),
                config: Config::from_env(),
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path).await {
                    Ok(initialized) => {
                        let _ = rolling_logger::info("Async DB init success");
                        {
                            let mut conn_guard = db_state.conn.lock().await;
                            *conn_guard = initialized.conn.lock().await.take();
                        }
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            log::error!("Failed to emit db-initialized: {}", e);
                        }
                    }
                    Err(e) => {
                        let _ = rolling_logger::error(&format!("Async DB init failed: {}", e));
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Stock CRUD + quantity
            commands::list_stock,
            commands::add_stock,
            commands::update_stock,
            commands::delete_stock,
            commands::set_stock_quantity,
            // Admin session
            commands::login_admin,
            commands::verify_admin,
            commands::logout_admin,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
