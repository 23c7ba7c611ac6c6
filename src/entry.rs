use chrono::NaiveDate;

/// First token of a block marker line.
pub const DATE_TAG: &str = "date";

/// On-disk date format, e.g. `2016-10-15`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// One word's correct/incorrect tally for one category within a date block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub word: String,
    pub correct: u32,
    pub incorrect: u32,
    pub category: String,
}

impl Record {
    /// A fresh record for a word's first outcome of the day.
    pub fn first(word: &str, category: &str, outcome: Outcome) -> Self {
        let mut record = Record {
            word: word.to_string(),
            correct: 0,
            incorrect: 0,
            category: category.to_string(),
        };
        record.bump(outcome);
        record
    }

    /// Count one more outcome against this record.
    pub fn bump(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.incorrect += 1,
        }
    }

    /// The tab-separated store representation, without the trailing newline.
    pub fn line(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.word, self.correct, self.incorrect, self.category
        )
    }
}

/// A parsed line of the store file.
///
/// Anything that is not a well-formed marker or record is `Other`: the
/// recorder copies such lines through byte-for-byte and the summaries skip
/// them, so a corrupt line never takes the rest of the store with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// A `date\t<yyyy-mm-dd>` marker opening a block.
    Date(NaiveDate),
    /// A `word\tcorrect\tincorrect\tcategory` record.
    Record(Record),
    /// Everything else, preserved verbatim.
    Other(String),
}

impl Line {
    pub fn parse(raw: &str) -> Line {
        let tokens: Vec<&str> = raw.split('\t').collect();
        match tokens.as_slice() {
            [tag, date] if *tag == DATE_TAG => {
                match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                    Ok(date) => Line::Date(date),
                    Err(_) => Line::Other(raw.to_string()),
                }
            }
            [word, correct, incorrect, category] => {
                match (correct.parse::<u32>(), incorrect.parse::<u32>()) {
                    (Ok(correct), Ok(incorrect)) => Line::Record(Record {
                        word: word.to_string(),
                        correct,
                        incorrect,
                        category: category.to_string(),
                    }),
                    _ => Line::Other(raw.to_string()),
                }
            }
            _ => Line::Other(raw.to_string()),
        }
    }
}

/// The marker line opening a block for `date`, without the trailing newline.
pub fn date_line(date: NaiveDate) -> String {
    format!("{}\t{}", DATE_TAG, date.format(DATE_FORMAT))
}
