pub mod actions;
pub mod backend;
pub mod config;
pub mod controls;
pub mod models;
pub mod sequence;

#[cfg(test)]
pub(crate) mod test_utils;

pub use actions::{HealthAction, QueryAction, UploadAction};
pub use backend::{Backend, HttpBackend};
pub use config::FrontendConfig;
pub use controls::{DisplayArea, FileSelection, InputField, SelectedFiles, TextInput, TextOutput};
pub use models::*;
pub use sequence::RequestSequence;
