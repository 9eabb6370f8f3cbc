pub mod board;
pub mod task;

pub use board::BoardState;
pub use task::{date_input_value, format_wire_date, Task, TaskPayload, DEFAULT_STAGES};
