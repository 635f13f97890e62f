//! Services module
//!
//! Contains the request dispatcher and output formatting

pub mod dispatcher;
pub mod formatter;

pub use dispatcher::RequestDispatcher;
