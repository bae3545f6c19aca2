pub mod assignments;
pub mod board;
pub mod system;
