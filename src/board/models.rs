use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::board::selection::MonthSelection;

// ============================================================================
// Employees
// ============================================================================

/// Booking status shown on the roster card. Independent from `availability`;
/// neither field is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EmployeeStatus {
    Free,
    Partial,
    Booked,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Free => "Available",
            EmployeeStatus::Partial => "Partially Booked",
            EmployeeStatus::Booked => "Fully Booked",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Job title, e.g. "Senior Developer".
    pub role: String,
    /// Percentage 0-100. Display-only, deliberately not clamped.
    pub availability: u32,
    pub status: EmployeeStatus,
    pub skills: Vec<String>,
}

// ============================================================================
// Projects & roles
// ============================================================================

/// One cell of a role row. `assigned` is the static pre-flag from the seed
/// plan, retained independently of any live [`Assignment`].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MonthCell {
    pub month: String,
    pub assigned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Role {
    pub id: String,
    /// Free-form tag, commonly DEV / UX / ASN.
    #[serde(rename = "type")]
    pub role_type: String,
    /// Positionally aligned 1:1 with the board's global month list.
    pub months: Vec<MonthCell>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub scenario: String,
    pub roles: Vec<Role>,
}

// ============================================================================
// Assignments
// ============================================================================

/// A committed staffing decision, keyed by role id in the board. At most one
/// per role; assigning again overwrites.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assignment {
    pub role_id: String,
    pub employee_id: String,
    pub employee_name: String,
    /// Subset of the global month list, in click order, non-empty.
    pub months: Vec<String>,
    pub created_at: String,
}

impl Assignment {
    pub fn covers(&self, month: &str) -> bool {
        self.months.iter().any(|m| m == month)
    }
}

/// Typed drag-transfer object carried from an employee card to a role cell.
/// Both fields must be non-blank for a drop to take effect.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DragPayload {
    pub employee_id: String,
    pub employee_name: String,
}

impl DragPayload {
    pub fn is_complete(&self) -> bool {
        !self.employee_id.trim().is_empty() && !self.employee_name.trim().is_empty()
    }
}

/// The in-flight dialog session created by a valid drop. Lives in app state
/// until confirmed or cancelled; a new drop replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PendingAssignment {
    pub role_id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub project_name: String,
    pub role_type: String,
    /// The dialog's working set. Always starts empty on open.
    pub selected_months: MonthSelection,
}
