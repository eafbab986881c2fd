//! Event Handlers
//!
//! - keyboard: keyboard input dispatch
//! - fetch: responses from the simulated fetch service

pub mod fetch;
pub mod keyboard;

pub use fetch::handle_fetch_response;
pub use keyboard::handle_key;
