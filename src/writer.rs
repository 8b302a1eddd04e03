use crate::error::Result;
use crate::event::Outcome;
use std::io::Write;

/// Writes outcomes as CSV to any `Write` sink.
///
/// All outcome kinds share one header so the output stays rectangular; fields
/// that do not apply to a row are left empty.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcomes(&mut self, outcomes: &[Outcome]) -> Result<()> {
        self.writer
            .write_record(["event", "minutes", "cents", "nickels", "dimes", "quarters"])?;
        for outcome in outcomes {
            let record = match *outcome {
                Outcome::Display { minutes } => [
                    "display".into(),
                    minutes.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
                Outcome::Receipt { minutes } => [
                    "receipt".into(),
                    minutes.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
                Outcome::Refund {
                    nickels,
                    dimes,
                    quarters,
                } => [
                    "refund".into(),
                    String::new(),
                    String::new(),
                    nickels.to_string(),
                    dimes.to_string(),
                    quarters.to_string(),
                ],
                Outcome::Collected { cents } => [
                    "collected".into(),
                    String::new(),
                    cents.to_string(),
                    String::new(),
                    String::new(),
                    String::new(),
                ],
            };
            self.writer.write_record(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_csv_layout() {
        let outcomes = vec![
            Outcome::Display { minutes: 14 },
            Outcome::Receipt { minutes: 14 },
            Outcome::Refund {
                nickels: 1,
                dimes: 0,
                quarters: 1,
            },
            Outcome::Collected { cents: 85 },
        ];

        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer);
        writer.write_outcomes(&outcomes).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "event,minutes,cents,nickels,dimes,quarters");
        assert_eq!(lines[1], "display,14,,,,");
        assert_eq!(lines[2], "receipt,14,,,,");
        assert_eq!(lines[3], "refund,,,1,0,1");
        assert_eq!(lines[4], "collected,,85,,,");
    }

    #[test]
    fn test_writer_empty_report() {
        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer);
        writer.write_outcomes(&[]).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.trim(), "event,minutes,cents,nickels,dimes,quarters");
    }
}
