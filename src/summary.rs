use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use itertools::Itertools;

use crate::entry::Line;
use crate::error::Result;
use crate::stats::StatsLog;
use crate::tally::{DayTally, Tally};

/// Read-only summaries over the store. Every query is a fresh linear scan;
/// nothing is cached between calls.
impl StatsLog {
    /// Total correct/incorrect across every record in `category`, any date.
    pub fn category_tally(&self, category: &str) -> Result<Tally> {
        let mut tally = Tally::default();
        for line in self.read_lines()? {
            if let Line::Record(record) = Line::parse(&line) {
                if record.category == category {
                    tally.add(&record);
                }
            }
        }
        Ok(tally)
    }

    /// Total correct/incorrect across every well-formed record in the store.
    pub fn lifetime_tally(&self) -> Result<Tally> {
        let mut tally = Tally::default();
        for line in self.read_lines()? {
            if let Line::Record(record) = Line::parse(&line) {
                tally.add(&record);
            }
        }
        Ok(tally)
    }

    /// Per-category totals, sorted by category name.
    pub fn category_breakdown(&self) -> Result<Vec<(String, Tally)>> {
        let mut by_category: HashMap<String, Tally> = HashMap::new();
        for line in self.read_lines()? {
            if let Line::Record(record) = Line::parse(&line) {
                by_category
                    .entry(record.category.clone())
                    .or_default()
                    .add(&record);
            }
        }
        Ok(by_category
            .into_iter()
            .sorted_by(|a, b| a.0.cmp(&b.0))
            .collect())
    }

    /// Daily totals for the last `days` calendar days ending at the local
    /// system date.
    pub fn daily(&self, days: usize) -> Result<Vec<DayTally>> {
        self.daily_on(days, Local::now().date_naive())
    }

    /// Daily totals for the last `days` calendar days ending at `today`,
    /// oldest first.
    ///
    /// Blocks are walked newest to oldest; each becomes one entry, and every
    /// calendar day without a block (between today and the newest block,
    /// between blocks, or past the oldest block) becomes a zero entry, so
    /// adjacent entries always differ by exactly one day. An empty store
    /// yields `days` zero entries ending at `today`. A block whose date is
    /// not strictly earlier than the previous block's is ignored here.
    pub fn daily_on(&self, days: usize, today: NaiveDate) -> Result<Vec<DayTally>> {
        // built newest-first, reversed at the end
        let mut series: Vec<DayTally> = Vec::with_capacity(days);
        let mut next_day = today;
        let mut open: Option<DayTally> = None;

        'scan: for line in self.read_lines()? {
            match Line::parse(&line) {
                Line::Date(date) => {
                    if let Some(block) = open.take() {
                        series.push(block);
                        next_day = prev_day(block.date);
                    }
                    if series.len() == days {
                        break 'scan;
                    }
                    if date > next_day {
                        // out of descending order; records up to the next
                        // marker stay unattributed
                        continue;
                    }
                    while next_day > date {
                        series.push(DayTally::empty(next_day));
                        next_day = prev_day(next_day);
                        if series.len() == days {
                            break 'scan;
                        }
                    }
                    open = Some(DayTally::empty(date));
                }
                Line::Record(record) => {
                    if let Some(block) = &mut open {
                        block.tally.add(&record);
                    }
                }
                Line::Other(_) => {}
            }
        }

        if let Some(block) = open.take() {
            if series.len() < days {
                series.push(block);
                next_day = prev_day(block.date);
            }
        }
        while series.len() < days {
            series.push(DayTally::empty(next_day));
            next_day = prev_day(next_day);
        }

        series.reverse();
        Ok(series)
    }
}

fn prev_day(date: NaiveDate) -> NaiveDate {
    date.pred_opt().expect("calendar underflow")
}
