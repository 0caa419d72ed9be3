//! Date source for note filenames

use chrono::{Local, NaiveDate};

use crate::constants::{MARKDOWN_EXTENSION, NOTE_DATE_FORMAT};

/// Something that knows what day it is
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the running process
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one day
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Filename for a note dated `date`: YYYYMMDD.md
pub fn date_file_name(date: NaiveDate) -> String {
    format!("{}{}", date.format(NOTE_DATE_FORMAT), MARKDOWN_EXTENSION)
}

/// Filename for today's note according to `clock`
pub fn today(clock: &dyn Clock) -> String {
    date_file_name(clock.today())
}
