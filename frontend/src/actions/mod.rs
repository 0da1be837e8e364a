//! User-triggered actions. Each one validates its input locally, shows a
//! placeholder, makes a single request and writes the result to its display.
//!
//! Errors from the request are returned to the caller. Unless failure
//! reporting is enabled the placeholder stays on screen.

pub mod health;
pub mod query;
pub mod upload;

pub use health::HealthAction;
pub use query::QueryAction;
pub use upload::UploadAction;
