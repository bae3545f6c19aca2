use std::sync::Arc;
use tauri::State;

use crate::board::{Assignment, Employee, Project};
use crate::error::AppError;
use crate::AppState;

#[tauri::command]
pub fn list_projects(state: State<'_, Arc<AppState>>) -> Result<Vec<Project>, AppError> {
    Ok(state.board()?.projects().to_vec())
}

/// Roster for the availabilities column, most available first.
#[tauri::command]
pub fn list_employees(state: State<'_, Arc<AppState>>) -> Result<Vec<Employee>, AppError> {
    Ok(state.board()?.employees_by_availability())
}

#[tauri::command]
pub fn get_months(state: State<'_, Arc<AppState>>) -> Result<Vec<String>, AppError> {
    Ok(state.board()?.months().to_vec())
}

#[tauri::command]
pub fn search_projects(
    state: State<'_, Arc<AppState>>,
    query: String,
) -> Result<Vec<Project>, AppError> {
    Ok(state.board()?.search_projects(&query))
}

#[tauri::command]
pub fn search_employees(
    state: State<'_, Arc<AppState>>,
    query: String,
) -> Result<Vec<Employee>, AppError> {
    Ok(state.board()?.search_employees(&query))
}

#[tauri::command]
pub fn list_assignments(state: State<'_, Arc<AppState>>) -> Result<Vec<Assignment>, AppError> {
    Ok(state.board()?.assignments())
}
