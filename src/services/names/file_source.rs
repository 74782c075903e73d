use super::{ensure_loaded, NameList, NameSource};
use crate::core::error::{AppError, AppResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Reads the two name lists from plain text files.
pub struct FileNameSource {
    first_path: PathBuf,
    last_path: PathBuf,
}

impl FileNameSource {
    pub fn new(first_path: impl Into<PathBuf>, last_path: impl Into<PathBuf>) -> Self {
        Self {
            first_path: first_path.into(),
            last_path: last_path.into(),
        }
    }
}

async fn read_list(path: &Path) -> AppResult<NameList> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::NameSource {
            path: path.display().to_string(),
            source,
        })?;
    Ok(NameList::parse(&text))
}

#[async_trait]
impl NameSource for FileNameSource {
    async fn load(&self) -> AppResult<(NameList, NameList)> {
        info!(
            "Reading name lists from {} and {}",
            self.first_path.display(),
            self.last_path.display()
        );

        let first = read_list(&self.first_path).await?;
        let last = read_list(&self.last_path).await?;

        let (first, last) = ensure_loaded(first, last)?;
        info!(
            "Loaded {} first names and {} last names",
            first.len(),
            last.len()
        );
        Ok((first, last))
    }
}
