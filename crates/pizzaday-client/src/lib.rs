//! Client logic for the school pizza-day fundraiser: session state,
//! backend API calls, and the view models both pages render from.

pub mod api;
pub mod config;
pub mod error;
pub mod manager_client;
pub mod order_client;
pub mod session;
pub mod viewmodel;


pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use manager_client::ManagerClient;
pub use order_client::OrderClient;
pub use session::{FileSessionStore, MemoryStore, Session, SessionStore};
