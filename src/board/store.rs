use std::collections::HashMap;

use crate::board::cells::{cell_state, CellSlot};
use crate::board::models::{
    Assignment, DragPayload, Employee, PendingAssignment, Project, Role,
};
use crate::board::seed;
use crate::board::selection::MonthSelection;
use crate::error::AppError;

/// In-memory staffing board: the project grid, the roster, committed
/// assignments keyed by role id, and the single in-flight dialog session.
///
/// All mutation goes through the methods below; commands hold the board
/// behind a mutex and delegate.
#[derive(Debug)]
pub struct Board {
    months: Vec<String>,
    projects: Vec<Project>,
    employees: Vec<Employee>,
    assignments: HashMap<String, Assignment>,
    pending: Option<PendingAssignment>,
}

impl Board {
    pub fn new(
        months: Vec<String>,
        projects: Vec<Project>,
        employees: Vec<Employee>,
    ) -> Result<Self, AppError> {
        let board = Board {
            months,
            projects,
            employees,
            assignments: HashMap::new(),
            pending: None,
        };
        board.check_alignment()?;
        Ok(board)
    }

    pub fn seeded() -> Result<Self, AppError> {
        Board::new(seed::months(), seed::projects()?, seed::employees()?)
    }

    /// Every role row must carry exactly one cell per global month, with
    /// labels in the same order.
    pub fn check_alignment(&self) -> Result<(), AppError> {
        for project in &self.projects {
            for role in &project.roles {
                if role.months.len() != self.months.len() {
                    return Err(AppError::Validation(format!(
                        "role {} has {} month cells, expected {}",
                        role.id,
                        role.months.len(),
                        self.months.len()
                    )));
                }
                for (cell, month) in role.months.iter().zip(&self.months) {
                    if &cell.month != month {
                        return Err(AppError::Validation(format!(
                            "role {} cell '{}' out of position, expected '{}'",
                            role.id, cell.month, month
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Roster sorted by time availability, most available first. Stable, so
    /// ties keep seed order.
    pub fn employees_by_availability(&self) -> Vec<Employee> {
        let mut roster = self.employees.clone();
        roster.sort_by(|a, b| b.availability.cmp(&a.availability));
        roster
    }

    /// Case-insensitive substring match on project name.
    pub fn search_projects(&self, query: &str) -> Vec<Project> {
        let needle = query.trim().to_lowercase();
        self.projects
            .iter()
            .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on name, job title, or any skill,
    /// sorted by availability like the roster column.
    pub fn search_employees(&self, query: &str) -> Vec<Employee> {
        let needle = query.trim().to_lowercase();
        let mut hits: Vec<Employee> = self
            .employees
            .iter()
            .filter(|e| {
                needle.is_empty()
                    || e.name.to_lowercase().contains(&needle)
                    || e.role.to_lowercase().contains(&needle)
                    || e.skills.iter().any(|s| s.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.availability.cmp(&a.availability));
        hits
    }

    pub fn assignment(&self, role_id: &str) -> Option<&Assignment> {
        self.assignments.get(role_id)
    }

    /// All committed assignments, ordered by role id for a stable IPC shape.
    pub fn assignments(&self) -> Vec<Assignment> {
        let mut all: Vec<Assignment> = self.assignments.values().cloned().collect();
        all.sort_by(|a, b| a.role_id.cmp(&b.role_id));
        all
    }

    pub fn pending(&self) -> Option<&PendingAssignment> {
        self.pending.as_ref()
    }

    fn find_role(&self, role_id: &str) -> Option<(&Project, &Role)> {
        self.projects.iter().find_map(|p| {
            p.roles
                .iter()
                .find(|r| r.id == role_id)
                .map(|r| (p, r))
        })
    }

    /// Render plan for one role row under the three-way precedence: a live
    /// assignment month beats the static pre-flag beats plain availability.
    pub fn role_cells(&self, role_id: &str) -> Result<Vec<CellSlot>, AppError> {
        let (_, role) = self
            .find_role(role_id)
            .ok_or_else(|| AppError::NotFound(format!("Role {role_id}")))?;
        let assignment = self.assignments.get(role_id);
        Ok(role
            .months
            .iter()
            .map(|cell| CellSlot {
                month: cell.month.clone(),
                state: cell_state(cell, assignment),
            })
            .collect())
    }

    // ------------------------------------------------------------------
    // Drag & drop protocol
    // ------------------------------------------------------------------

    /// Handle an employee card dropped on a role row. An incomplete payload
    /// is silently ignored, matching the drop handler contract: no session,
    /// no error. A valid drop opens a fresh dialog session (empty working
    /// set), replacing any session already open.
    pub fn drop_employee(
        &mut self,
        role_id: &str,
        payload: DragPayload,
    ) -> Result<Option<PendingAssignment>, AppError> {
        if !payload.is_complete() {
            tracing::debug!(role_id, "drop ignored: incomplete drag payload");
            return Ok(None);
        }

        let (project, role) = self
            .find_role(role_id)
            .ok_or_else(|| AppError::NotFound(format!("Role {role_id}")))?;

        let pending = PendingAssignment {
            role_id: role.id.clone(),
            employee_id: payload.employee_id.trim().to_string(),
            employee_name: payload.employee_name.trim().to_string(),
            project_name: project.name.clone(),
            role_type: role.role_type.clone(),
            selected_months: MonthSelection::default(),
        };

        tracing::info!(
            role_id,
            employee = %pending.employee_name,
            project = %pending.project_name,
            "assignment dialog opened"
        );
        self.pending = Some(pending.clone());
        Ok(Some(pending))
    }

    /// Toggle a month in the open dialog session, preserving click order.
    pub fn toggle_month(&mut self, month: &str) -> Result<PendingAssignment, AppError> {
        if !self.months.iter().any(|m| m == month) {
            return Err(AppError::Validation(format!(
                "'{month}' is not on the board's month list"
            )));
        }
        let pending = self
            .pending
            .as_mut()
            .ok_or_else(|| AppError::Validation("no assignment in progress".into()))?;
        pending.selected_months.toggle(month);
        Ok(pending.clone())
    }

    /// Commit the open session as an [`Assignment`]. The UI disables confirm
    /// while the working set is empty; the backend guards anyway.
    pub fn confirm_assignment(&mut self) -> Result<Assignment, AppError> {
        let pending = self
            .pending
            .take()
            .ok_or_else(|| AppError::Validation("no assignment in progress".into()))?;

        if pending.selected_months.is_empty() {
            // Put the session back so the dialog stays open.
            let err = AppError::Validation("select at least one month".into());
            self.pending = Some(pending);
            return Err(err);
        }

        let assignment = Assignment {
            role_id: pending.role_id.clone(),
            employee_id: pending.employee_id,
            employee_name: pending.employee_name,
            months: pending.selected_months.into_months(),
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        tracing::info!(
            role_id = %assignment.role_id,
            employee = %assignment.employee_name,
            months = ?assignment.months,
            "assignment committed"
        );
        self.assignments
            .insert(assignment.role_id.clone(), assignment.clone());
        Ok(assignment)
    }

    /// Close the dialog without committing. Idempotent; also covers
    /// dismiss-outside-click.
    pub fn cancel_assignment(&mut self) {
        if self.pending.take().is_some() {
            tracing::debug!("assignment dialog cancelled");
        }
    }

    /// Remove a role's assignment. Returns whether anything was removed.
    pub fn unassign(&mut self, role_id: &str) -> bool {
        match self.assignments.remove(role_id) {
            Some(a) => {
                tracing::info!(role_id, employee = %a.employee_name, "assignment removed");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cells::CellState;

    fn payload(id: &str, name: &str) -> DragPayload {
        DragPayload {
            employee_id: id.into(),
            employee_name: name.into(),
        }
    }

    #[test]
    fn seeded_board_is_aligned() {
        let board = Board::seeded().unwrap();
        for project in board.projects() {
            for role in &project.roles {
                assert_eq!(role.months.len(), board.months().len());
                for (cell, month) in role.months.iter().zip(board.months()) {
                    assert_eq!(&cell.month, month);
                }
            }
        }
    }

    #[test]
    fn misaligned_rows_are_rejected() {
        let mut projects = seed::projects().unwrap();
        projects[0].roles[0].months.pop();
        let err = Board::new(seed::months(), projects, vec![]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn incomplete_drop_is_silently_ignored() {
        let mut board = Board::seeded().unwrap();

        let opened = board.drop_employee("5", payload("1", "  ")).unwrap();
        assert!(opened.is_none());
        assert!(board.pending().is_none());

        let opened = board.drop_employee("5", payload("", "Sarah Chen")).unwrap();
        assert!(opened.is_none());
        assert!(board.pending().is_none());
    }

    #[test]
    fn drop_on_unknown_role_is_not_found() {
        let mut board = Board::seeded().unwrap();
        let err = board
            .drop_employee("99", payload("1", "Sarah Chen"))
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn drop_then_confirm_commits_assignment() {
        let mut board = Board::seeded().unwrap();

        // Drag Sarah Chen onto role 5 (Project 2, DEV)
        let pending = board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap()
            .expect("valid drop should open the dialog");
        assert_eq!(pending.project_name, "Project 2");
        assert_eq!(pending.role_type, "DEV");
        assert!(pending.selected_months.is_empty());

        board.toggle_month("Feb").unwrap();
        board.toggle_month("Mar").unwrap();
        let committed = board.confirm_assignment().unwrap();

        // Click order, exactly once, session closed
        assert_eq!(committed.months, ["Feb", "Mar"]);
        assert!(board.pending().is_none());

        let stored = board.assignment("5").unwrap();
        assert_eq!(stored.employee_id, "1");
        assert_eq!(stored.employee_name, "Sarah Chen");
    }

    #[test]
    fn confirm_requires_a_month() {
        let mut board = Board::seeded().unwrap();
        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();

        let err = board.confirm_assignment().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        // Session survives a rejected confirm
        assert!(board.pending().is_some());
    }

    #[test]
    fn confirm_without_session_is_rejected() {
        let mut board = Board::seeded().unwrap();
        assert!(board.confirm_assignment().is_err());
        assert!(board.toggle_month("Jan").is_err());
    }

    #[test]
    fn toggle_rejects_unknown_month() {
        let mut board = Board::seeded().unwrap();
        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();
        let err = board.toggle_month("Apr").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn cancel_clears_the_working_set() {
        let mut board = Board::seeded().unwrap();
        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();
        board.toggle_month("Jan").unwrap();

        board.cancel_assignment();
        assert!(board.pending().is_none());

        // Reopening starts from an empty selection
        let pending = board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap()
            .unwrap();
        assert!(pending.selected_months.is_empty());
    }

    #[test]
    fn new_drop_replaces_open_session() {
        let mut board = Board::seeded().unwrap();
        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();
        board.toggle_month("Jan").unwrap();

        let pending = board
            .drop_employee("3", payload("2", "Marcus Johnson"))
            .unwrap()
            .unwrap();
        assert_eq!(pending.role_id, "3");
        assert_eq!(pending.project_name, "Project 1");
        assert_eq!(pending.role_type, "UX");
        assert!(pending.selected_months.is_empty());
    }

    #[test]
    fn reassigning_a_role_overwrites() {
        let mut board = Board::seeded().unwrap();

        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();
        board.toggle_month("Jan").unwrap();
        board.confirm_assignment().unwrap();

        board
            .drop_employee("5", payload("3", "Elena Rodriguez"))
            .unwrap();
        board.toggle_month("Mar").unwrap();
        board.confirm_assignment().unwrap();

        let stored = board.assignment("5").unwrap();
        assert_eq!(stored.employee_name, "Elena Rodriguez");
        assert_eq!(stored.months, ["Mar"]);
        assert_eq!(board.assignments().len(), 1);
    }

    #[test]
    fn unassign_removes_once() {
        let mut board = Board::seeded().unwrap();
        board
            .drop_employee("5", payload("1", "Sarah Chen"))
            .unwrap();
        board.toggle_month("Feb").unwrap();
        board.confirm_assignment().unwrap();

        assert!(board.unassign("5"));
        assert!(!board.unassign("5"));
        assert!(board.assignment("5").is_none());
    }

    #[test]
    fn role_cells_follow_precedence() {
        let mut board = Board::seeded().unwrap();

        // Role 2 static flags: Jan:true, Feb:false, Mar:false.
        board
            .drop_employee("2", payload("1", "Sarah Chen"))
            .unwrap();
        board.toggle_month("Feb").unwrap();
        board.confirm_assignment().unwrap();

        let cells = board.role_cells("2").unwrap();
        assert_eq!(cells[0].state, CellState::PreFlagged);
        assert_eq!(
            cells[1].state,
            CellState::ActivelyAssigned {
                employee_name: "Sarah Chen".into()
            }
        );
        assert_eq!(cells[2].state, CellState::Available);

        // Unassigning restores the static view
        board.unassign("2");
        let cells = board.role_cells("2").unwrap();
        assert_eq!(cells[0].state, CellState::PreFlagged);
        assert_eq!(cells[1].state, CellState::Available);
    }

    #[test]
    fn role_cells_unknown_role() {
        let board = Board::seeded().unwrap();
        assert!(matches!(
            board.role_cells("nope"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn roster_sorts_by_availability_desc() {
        let board = Board::seeded().unwrap();
        let roster = board.employees_by_availability();
        let availabilities: Vec<u32> = roster.iter().map(|e| e.availability).collect();
        assert_eq!(availabilities, [90, 80, 70, 0]);
    }

    #[test]
    fn search_filters_projects_and_employees() {
        let board = Board::seeded().unwrap();

        assert_eq!(board.search_projects("project 2").len(), 1);
        assert_eq!(board.search_projects("").len(), 2);
        assert!(board.search_projects("zzz").is_empty());

        // Matches name, job title, and skills
        assert_eq!(board.search_employees("sarah").len(), 1);
        assert_eq!(board.search_employees("developer").len(), 3);
        assert_eq!(board.search_employees("figma").len(), 1);
        assert_eq!(board.search_employees("").len(), 4);
    }
}
