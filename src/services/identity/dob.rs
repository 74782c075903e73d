use crate::core::rng::RandomSource;
use chrono::{Datelike, NaiveDate};

pub const DOB_YEAR_MIN: i64 = 2009;
pub const DOB_YEAR_MAX: i64 = 2012;

pub const MONTH_NAMES: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A synthesized birth date plus the age it implies as of the injected
/// clock date.
#[derive(Debug, Clone, PartialEq)]
pub struct Dob {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
    pub age: i32,
    pub display: String,
}

/// Draw a birth date in [2009, 2012] with a leap-aware day bound and
/// compute the age relative to `today`.
pub fn synthesize_dob(today: NaiveDate, rng: &mut dyn RandomSource) -> Dob {
    let year = rng.int_in_range(DOB_YEAR_MIN, DOB_YEAR_MAX) as i32;
    let month0 = rng.int_in_range(0, 11) as u32;
    let day_max = days_in_month(year, month0);
    let day = rng.int_in_range(1, day_max as i64) as u32;

    let age = calc_age(today, year, month0, day);
    let display = format!(
        "{} {}, {} (Age: {})",
        MONTH_NAMES[month0 as usize], day, year, age
    );

    Dob {
        year,
        month0,
        day,
        age,
        display,
    }
}

/// Age as of `today`, one less if this year's birthday is still ahead.
/// Deliberately unclamped: a clock before the birth year goes negative.
pub fn calc_age(today: NaiveDate, year: i32, month0: u32, day: u32) -> i32 {
    let mut age = today.year() - year;
    if (today.month0(), today.day()) < (month0, day) {
        age -= 1;
    }
    age
}

pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
