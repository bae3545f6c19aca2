use std::sync::Arc;
use tauri::State;

use crate::board::{Assignment, CellSlot, DragPayload, PendingAssignment};
use crate::error::AppError;
use crate::validation::{require_non_empty, require_valid_id};
use crate::AppState;

/// Drop an employee card onto a role row. Returns the opened dialog session,
/// or `None` when the drag payload was incomplete (the drop is ignored).
#[tauri::command]
pub fn drop_employee(
    state: State<'_, Arc<AppState>>,
    role_id: String,
    payload: DragPayload,
) -> Result<Option<PendingAssignment>, AppError> {
    require_valid_id("role_id", &role_id)?;
    state.board()?.drop_employee(&role_id, payload)
}

#[tauri::command]
pub fn get_pending_assignment(
    state: State<'_, Arc<AppState>>,
) -> Result<Option<PendingAssignment>, AppError> {
    Ok(state.board()?.pending().cloned())
}

/// Toggle a month badge in the open dialog; returns the updated session.
#[tauri::command]
pub fn toggle_month(
    state: State<'_, Arc<AppState>>,
    month: String,
) -> Result<PendingAssignment, AppError> {
    require_non_empty("month", &month)?;
    state.board()?.toggle_month(&month)
}

#[tauri::command]
pub fn confirm_assignment(state: State<'_, Arc<AppState>>) -> Result<Assignment, AppError> {
    state.board()?.confirm_assignment()
}

#[tauri::command]
pub fn cancel_assignment(state: State<'_, Arc<AppState>>) -> Result<(), AppError> {
    state.board()?.cancel_assignment();
    Ok(())
}

/// Dismiss an existing assignment. Returns whether one was removed.
#[tauri::command]
pub fn unassign_role(
    state: State<'_, Arc<AppState>>,
    role_id: String,
) -> Result<bool, AppError> {
    require_valid_id("role_id", &role_id)?;
    Ok(state.board()?.unassign(&role_id))
}

/// Per-cell render states for one role row.
#[tauri::command]
pub fn get_role_cells(
    state: State<'_, Arc<AppState>>,
    role_id: String,
) -> Result<Vec<CellSlot>, AppError> {
    require_valid_id("role_id", &role_id)?;
    state.board()?.role_cells(&role_id)
}
