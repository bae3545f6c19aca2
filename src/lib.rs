pub mod board;
mod commands;
pub mod error;
mod logging;
mod validation;

use std::sync::{Arc, Mutex, MutexGuard};

use tauri::Manager;

use crate::error::AppError;

/// Shared application state accessible from all Tauri commands.
///
/// The board is the single source of truth for projects, the roster,
/// committed assignments, and the in-flight dialog session. Handlers run to
/// completion on the dispatch thread, so a plain mutex is enough.
pub struct AppState {
    board: Mutex<board::Board>,
}

impl AppState {
    pub fn new(board: board::Board) -> Self {
        AppState {
            board: Mutex::new(board),
        }
    }

    pub fn board(&self) -> Result<MutexGuard<'_, board::Board>, AppError> {
        self.board
            .lock()
            .map_err(|_| AppError::Internal("board state lock poisoned".into()))
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    tracing::info!("Starting StaffFlow Desktop v{}", env!("CARGO_PKG_VERSION"));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|_app, _argv, _cwd| {}))
        .plugin(tauri_plugin_window_state::Builder::new().build())
        .setup(|app| {
            let app_data_dir = app.path().app_data_dir()?;
            logging::install_crash_hook(&app_data_dir);

            let board = board::Board::seeded()?;
            tracing::info!(
                projects = board.projects().len(),
                employees = board.employees().len(),
                months = board.months().len(),
                "Board seeded"
            );
            app.manage(Arc::new(AppState::new(board)));

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Board
            commands::board::list_projects,
            commands::board::list_employees,
            commands::board::get_months,
            commands::board::search_projects,
            commands::board::search_employees,
            commands::board::list_assignments,
            // Assignments
            commands::assignments::drop_employee,
            commands::assignments::get_pending_assignment,
            commands::assignments::toggle_month,
            commands::assignments::confirm_assignment,
            commands::assignments::cancel_assignment,
            commands::assignments::unassign_role,
            commands::assignments::get_role_cells,
            // System
            commands::system::get_app_version,
            commands::system::get_crash_logs,
            commands::system::clear_crash_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
