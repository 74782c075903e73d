use super::{ensure_loaded, NameList, NameSource};
use crate::core::error::AppResult;
use async_trait::async_trait;
use fake::faker::name::raw::*;
use fake::locales::*;
use fake::Fake;
use tracing::info;

/// Generated name pool for when no list files are supplied.
pub struct FakerNameSource {
    pool_size: usize,
}

impl FakerNameSource {
    pub fn new(pool_size: usize) -> Self {
        Self { pool_size }
    }
}

impl Default for FakerNameSource {
    fn default() -> Self {
        Self { pool_size: 40 }
    }
}

#[async_trait]
impl NameSource for FakerNameSource {
    async fn load(&self) -> AppResult<(NameList, NameList)> {
        info!("Generating a pool of {} names per list", self.pool_size);

        let first: Vec<String> = (0..self.pool_size).map(|_| FirstName(EN).fake()).collect();
        let last: Vec<String> = (0..self.pool_size).map(|_| LastName(EN).fake()).collect();

        ensure_loaded(NameList::new(first), NameList::new(last))
    }
}
