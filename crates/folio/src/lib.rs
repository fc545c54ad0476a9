//! Services page for the portfolio site: content fixtures, the inquiry form and its
//! validation, server-side rendering, and the HTTP routes that serve them.

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod page;
pub mod site;
pub mod telemetry;
