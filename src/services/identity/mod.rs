pub mod dob;
pub mod slug;
pub mod username;

use crate::core::error::{AppError, AppResult};
use crate::core::rng::{choose, RandomSource};
use crate::services::names::NameList;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One generated identity. Value type, recreated fresh on every call;
/// no history is kept anywhere.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityRecord {
    pub full_name: String,
    pub username: String,
    pub dob_display: String,
    pub age: i32,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
}

impl IdentityRecord {
    /// Multi-line text block, the same shape the record is copied around in.
    pub fn to_text(&self) -> String {
        format!(
            "Name: {}\nUsername: {}\nDOB: {}",
            self.full_name, self.username, self.dob_display
        )
    }
}

pub struct IdentityGenerator;

impl IdentityGenerator {
    /// Produce one record: uniform first/last draw, username synthesis,
    /// DOB synthesis. No retry at this level; the sub-synthesizers own
    /// their own fallback logic.
    pub fn generate(
        first_names: &NameList,
        last_names: &NameList,
        today: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> AppResult<IdentityRecord> {
        if first_names.is_empty() {
            return Err(AppError::EmptyNameList { which: "first" });
        }
        if last_names.is_empty() {
            return Err(AppError::EmptyNameList { which: "last" });
        }

        let first = choose(rng, first_names.entries());
        let last = choose(rng, last_names.entries());

        let username = username::synthesize(first, last, rng);
        let dob = dob::synthesize_dob(today, rng);

        Ok(IdentityRecord {
            full_name: format!("{} {}", first, last),
            username,
            dob_display: dob.display,
            age: dob.age,
            birth_year: dob.year,
            birth_month: dob.month0 + 1,
            birth_day: dob.day,
        })
    }
}
