pub mod faker_source;
pub mod file_source;

use crate::core::config::AppConfig;
use crate::core::error::{AppError, AppResult};
use async_trait::async_trait;

pub use faker_source::FakerNameSource;
pub use file_source::FileNameSource;

/// Ordered name list: trimmed non-empty lines, `#` comments excluded.
/// Immutable once loaded; a reload replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct NameList {
    entries: Vec<String>,
}

impl NameList {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Parse newline-separated text: trim each line, drop blanks and
    /// lines starting with `#`.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(String::from)
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[async_trait]
pub trait NameSource: Send + Sync {
    /// Load the (first names, last names) pair. Both lists are non-empty
    /// on success.
    async fn load(&self) -> AppResult<(NameList, NameList)>;
}

pub fn get_name_source(config: &AppConfig) -> Box<dyn NameSource> {
    match (&config.first_path, &config.last_path) {
        (Some(first), Some(last)) => Box::new(FileNameSource::new(first, last)),
        _ => Box::new(FakerNameSource::default()),
    }
}

pub(crate) fn ensure_loaded(first: NameList, last: NameList) -> AppResult<(NameList, NameList)> {
    if first.is_empty() {
        return Err(AppError::EmptyNameList { which: "first" });
    }
    if last.is_empty() {
        return Err(AppError::EmptyNameList { which: "last" });
    }
    Ok((first, last))
}
