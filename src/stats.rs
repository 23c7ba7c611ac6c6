use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::entry::{date_line, Line, Outcome, Record};
use crate::error::{Result, StatsError};

/// Statistics log over a date-partitioned flat file.
///
/// The file holds one block per day, newest first: a `date\t<yyyy-mm-dd>`
/// marker followed by `word\tcorrect\tincorrect\tcategory` records. Every
/// rewrite goes through a sibling temp file and a rename, so the store is
/// only ever the old complete content or the new one.
#[derive(Debug, Clone)]
pub struct StatsLog {
    path: PathBuf,
}

impl StatsLog {
    /// Open the log at `path`, creating an empty file (and parent
    /// directories) if it does not exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| StatsError::io(&path, e))?;
                }
            }
            File::create(&path).map_err(|e| StatsError::io(&path, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record one outcome against the local system date.
    pub fn record(&self, word: &str, outcome: Outcome, category: &str) -> Result<()> {
        self.record_on(word, outcome, category, Local::now().date_naive())
    }

    /// Record one outcome for `today`.
    ///
    /// Creates today's block at the very top of the store on the first
    /// statistic of the day, appends a fresh record to the block for a word
    /// not yet seen today, and increments the matching counter in place
    /// otherwise. All other lines are copied through unchanged.
    pub fn record_on(
        &self,
        word: &str,
        outcome: Outcome,
        category: &str,
        today: NaiveDate,
    ) -> Result<()> {
        let mut lines = self.read_lines()?;
        let change = plan_change(&lines, word, category, today);
        log::debug!("recording {word} ({category}) as {outcome:?}: {change:?}");

        match change {
            Change::NewBlock => {
                lines.insert(0, Record::first(word, category, outcome).line());
                lines.insert(0, date_line(today));
            }
            Change::Insert { at } => {
                lines.insert(at, Record::first(word, category, outcome).line());
            }
            Change::Bump { at, mut record } => {
                record.bump(outcome);
                lines[at] = record.line();
            }
        }

        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        write_atomic(&self.path, &content).map_err(|e| StatsError::io(&self.path, e))
    }

    /// All store lines, in file order. A missing file reads as empty.
    pub(crate) fn read_lines(&self) -> Result<Vec<String>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StatsError::io(&self.path, e)),
        };
        BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<String>>>()
            .map_err(|e| StatsError::io(&self.path, e))
    }
}

/// Where in the file one new outcome lands.
#[derive(Debug, PartialEq)]
enum Change {
    /// No block for today yet: open one at the very top.
    NewBlock,
    /// Today's block exists but the word does not: insert before line `at`.
    Insert { at: usize },
    /// The record at line `at` matches word and category: bump a counter.
    Bump { at: usize, record: Record },
}

fn plan_change(lines: &[String], word: &str, category: &str, today: NaiveDate) -> Change {
    let Some(start) = lines
        .iter()
        .position(|line| matches!(Line::parse(line), Line::Date(date) if date == today))
    else {
        return Change::NewBlock;
    };

    for at in start + 1..lines.len() {
        match Line::parse(&lines[at]) {
            // next block begins: the word was not recorded today
            Line::Date(_) => return Change::Insert { at },
            Line::Record(record) if record.word == word && record.category == category => {
                return Change::Bump { at, record };
            }
            _ => {}
        }
    }
    Change::Insert { at: lines.len() }
}

/// Write the full replacement to a sibling temp file, then rename it over
/// the store. Readers see either the old content or the new, never a mix;
/// on failure the temp file is removed and the store is untouched.
fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}
