use chrono::NaiveDate;
use serde::Serialize;

use crate::entry::Record;

/// Correct/incorrect totals accumulated over some slice of the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub correct: u64,
    pub incorrect: u64,
}

impl Tally {
    pub fn new(correct: u64, incorrect: u64) -> Self {
        Self { correct, incorrect }
    }

    pub fn attempts(&self) -> u64 {
        self.correct + self.incorrect
    }

    /// Fold one record's counts into the totals.
    pub fn add(&mut self, record: &Record) {
        self.correct += u64::from(record.correct);
        self.incorrect += u64::from(record.incorrect);
    }
}

impl From<(u64, u64)> for Tally {
    fn from(v: (u64, u64)) -> Self {
        Tally {
            correct: v.0,
            incorrect: v.1,
        }
    }
}

impl From<Tally> for (u64, u64) {
    fn from(t: Tally) -> Self {
        (t.correct, t.incorrect)
    }
}

/// One calendar day's totals in a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayTally {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub tally: Tally,
}

impl DayTally {
    /// A zero entry for a day with no recorded activity.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            tally: Tally::default(),
        }
    }
}
