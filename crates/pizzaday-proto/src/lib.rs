pub mod date;
pub mod error;
pub mod menu;
pub mod order;
pub mod types;

pub use date::*;
pub use error::*;
pub use menu::*;
pub use order::*;
pub use types::*;
