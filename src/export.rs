use std::io::Write;

use crate::entry::{Line, DATE_FORMAT};
use crate::error::Result;
use crate::stats::StatsLog;

/// Flatten the store into `date,word,correct,incorrect,category` CSV rows.
///
/// Records above the first date marker get an empty date field; malformed
/// lines are skipped.
pub fn write_csv<W: Write>(log: &StatsLog, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["date", "word", "correct", "incorrect", "category"])?;

    let mut current_date = String::new();
    for line in log.read_lines()? {
        match Line::parse(&line) {
            Line::Date(date) => current_date = date.format(DATE_FORMAT).to_string(),
            Line::Record(record) => {
                let correct = record.correct.to_string();
                let incorrect = record.incorrect.to_string();
                writer.write_record([
                    current_date.as_str(),
                    record.word.as_str(),
                    correct.as_str(),
                    incorrect.as_str(),
                    record.category.as_str(),
                ])?;
            }
            Line::Other(_) => {}
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Outcome;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn export_flattens_blocks_into_rows() {
        let dir = tempdir().unwrap();
        let log = StatsLog::open(dir.path().join("stats.tsv")).unwrap();
        let d14 = NaiveDate::from_ymd_opt(2016, 10, 14).unwrap();
        let d15 = NaiveDate::from_ymd_opt(2016, 10, 15).unwrap();
        log.record_on("hello", Outcome::Correct, "greetings", d14)
            .unwrap();
        log.record_on("cat", Outcome::Incorrect, "animals", d15)
            .unwrap();

        let mut out = Vec::new();
        write_csv(&log, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "date,word,correct,incorrect,category\n\
             2016-10-15,cat,0,1,animals\n\
             2016-10-14,hello,1,0,greetings\n"
        );
    }

    #[test]
    fn export_skips_malformed_lines() {
        let dir = tempdir().unwrap();
        let log = StatsLog::open(dir.path().join("stats.tsv")).unwrap();
        fs::write(
            log.path(),
            "orphan\t1\t0\tmisc\ndate\t2016-10-15\nnoise\nhello\t1\t1\tgreetings\n",
        )
        .unwrap();

        let mut out = Vec::new();
        write_csv(&log, &mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "date,word,correct,incorrect,category\n\
             ,orphan,1,0,misc\n\
             2016-10-15,hello,1,1,greetings\n"
        );
    }
}
