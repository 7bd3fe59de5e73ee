//! View models: pure producers of display data, no I/O. Rendering rules
//! live here so they can be tested without any UI toolkit.

pub mod manager_vm;
pub mod order_vm;

pub use manager_vm::ManagerViewModel;
pub use order_vm::{OrderForm, OrderView, OrderViewModel, SummaryView};
