use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::board::models::{Assignment, MonthCell};

/// Render state of one role/month cell. A live assignment covering the month
/// wins over the static pre-flag; the pre-flag wins over plain availability.
/// The static flag is never erased by an assignment, only out-prioritized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum CellState {
    Available,
    PreFlagged,
    ActivelyAssigned { employee_name: String },
}

impl CellState {
    /// Tooltip text matching the card UI.
    pub fn tooltip(&self) -> &str {
        match self {
            CellState::Available => "Available",
            CellState::PreFlagged => "Assigned",
            CellState::ActivelyAssigned { employee_name } => employee_name,
        }
    }
}

/// One cell of a role row as the frontend renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CellSlot {
    pub month: String,
    pub state: CellState,
}

/// Compute the three-way cell state for one month cell of a role.
pub fn cell_state(cell: &MonthCell, assignment: Option<&Assignment>) -> CellState {
    if let Some(a) = assignment {
        if a.covers(&cell.month) {
            return CellState::ActivelyAssigned {
                employee_name: a.employee_name.clone(),
            };
        }
    }
    if cell.assigned {
        CellState::PreFlagged
    } else {
        CellState::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(month: &str, assigned: bool) -> MonthCell {
        MonthCell {
            month: month.into(),
            assigned,
        }
    }

    fn assignment(months: &[&str]) -> Assignment {
        Assignment {
            role_id: "2".into(),
            employee_id: "1".into(),
            employee_name: "Sarah Chen".into(),
            months: months.iter().map(|m| m.to_string()).collect(),
            created_at: "2026-01-01T00:00:00Z".into(),
        }
    }

    #[test]
    fn assignment_wins_over_pre_flag() {
        // Static flags Jan:true, Feb:false, Mar:false with a live assignment
        // covering Feb only.
        let a = assignment(&["Feb"]);

        assert_eq!(cell_state(&cell("Jan", true), Some(&a)), CellState::PreFlagged);
        assert_eq!(
            cell_state(&cell("Feb", false), Some(&a)),
            CellState::ActivelyAssigned {
                employee_name: "Sarah Chen".into()
            }
        );
        assert_eq!(cell_state(&cell("Mar", false), Some(&a)), CellState::Available);
    }

    #[test]
    fn assignment_overrides_without_erasing_flag() {
        // The same month both pre-flagged and assigned renders as assigned,
        // and falls back to pre-flagged once the assignment is gone.
        let flagged = cell("Jan", true);
        let a = assignment(&["Jan"]);

        assert!(matches!(
            cell_state(&flagged, Some(&a)),
            CellState::ActivelyAssigned { .. }
        ));
        assert_eq!(cell_state(&flagged, None), CellState::PreFlagged);
    }

    #[test]
    fn tooltips() {
        assert_eq!(CellState::Available.tooltip(), "Available");
        assert_eq!(CellState::PreFlagged.tooltip(), "Assigned");
        assert_eq!(
            CellState::ActivelyAssigned {
                employee_name: "Marcus Johnson".into()
            }
            .tooltip(),
            "Marcus Johnson"
        );
    }
}
