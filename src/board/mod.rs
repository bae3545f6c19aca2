pub mod cells;
pub mod models;
pub mod seed;
pub mod selection;
pub mod store;

pub use cells::{CellSlot, CellState};
pub use models::{
    Assignment, DragPayload, Employee, EmployeeStatus, MonthCell, PendingAssignment, Project,
    Role,
};
pub use selection::MonthSelection;
pub use store::Board;
