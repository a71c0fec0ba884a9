//! Entity structs for the Nodebucket document model.
//!
//! One employee document per employee, holding two ordered task lists.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! schema registry can validate them.

mod employee;
mod task;

pub use employee::Employee;
pub use task::Task;
