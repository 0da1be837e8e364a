//! Page controls the actions read from and write to.
//!
//! Each action receives the controls it needs instead of looking elements up
//! by id, so a terminal, a test, or any other host can stand in for the page.

use crate::models::FileHandle;
use std::sync::{Arc, Mutex, MutexGuard};

/// The file picker (`fileInput`).
pub trait FileSelection: Send + Sync {
    fn selected_files(&self) -> Vec<FileHandle>;
}

/// A single-line text input (`question`).
pub trait TextInput: Send + Sync {
    fn value(&self) -> String;
}

/// A region whose text is replaced on every write (`uploadStatus`, `answerBox`).
pub trait TextOutput: Send + Sync {
    fn set_text(&self, text: &str);
}

#[derive(Debug, Clone, Default)]
pub struct SelectedFiles {
    files: Arc<Mutex<Vec<FileHandle>>>,
}

impl SelectedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file: FileHandle) -> Self {
        let selection = Self::new();
        selection.select(vec![file]);
        selection
    }

    pub fn select(&self, files: Vec<FileHandle>) {
        *lock(&self.files) = files;
    }

    pub fn clear(&self) {
        lock(&self.files).clear();
    }
}

impl FileSelection for SelectedFiles {
    fn selected_files(&self) -> Vec<FileHandle> {
        lock(&self.files).clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputField {
    value: Arc<Mutex<String>>,
}

impl InputField {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.into())),
        }
    }

    pub fn set_value(&self, value: impl Into<String>) {
        *lock(&self.value) = value.into();
    }
}

impl TextInput for InputField {
    fn value(&self) -> String {
        lock(&self.value).clone()
    }
}

/// In-memory display region. Keeps every text it was given, oldest first.
#[derive(Debug, Clone, Default)]
pub struct DisplayArea {
    history: Arc<Mutex<Vec<String>>>,
}

impl DisplayArea {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text, empty if nothing was written yet.
    pub fn text(&self) -> String {
        lock(&self.history).last().cloned().unwrap_or_default()
    }

    pub fn history(&self) -> Vec<String> {
        lock(&self.history).clone()
    }
}

impl TextOutput for DisplayArea {
    fn set_text(&self, text: &str) {
        lock(&self.history).push(text.to_string());
    }
}

// A panicked writer leaves plain strings behind, which are still usable.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
