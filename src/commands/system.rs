use tauri::Manager;

use crate::error::AppError;
use crate::logging::{self, CrashLogEntry};

#[tauri::command]
pub fn get_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[tauri::command]
pub fn get_crash_logs(app: tauri::AppHandle) -> Result<Vec<CrashLogEntry>, AppError> {
    let dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(logging::read_crash_logs(&dir))
}

#[tauri::command]
pub fn clear_crash_logs(app: tauri::AppHandle) -> Result<(), AppError> {
    let dir = app
        .path()
        .app_data_dir()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    logging::clear_crash_logs(&dir)
}
