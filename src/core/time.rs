use chrono::{Local, NaiveDate};
use std::sync::{Arc, Mutex};

/// Calendar-date clock. Age computation only cares about year/month/day,
/// so the provider hands out a `NaiveDate` rather than a full timestamp.
pub trait TimeProvider: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

pub struct MockTimeProvider {
    current_date: Arc<Mutex<NaiveDate>>,
}

impl MockTimeProvider {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            current_date: Arc::new(Mutex::new(date)),
        }
    }

    pub fn set_today(&self, date: NaiveDate) {
        let mut d = self.current_date.lock().unwrap();
        *d = date;
    }
}

impl TimeProvider for MockTimeProvider {
    fn today(&self) -> NaiveDate {
        *self.current_date.lock().unwrap()
    }
}
