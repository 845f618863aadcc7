//! Error type shared by the roster, the detail editor and configuration loading.
//!
//! Validation errors never reach the user: `App::update` logs them and leaves
//! the state untouched.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // === Validation ===
    /// A student name was empty after trimming.
    #[error("student name must not be blank")]
    BlankName,

    /// A subject name was empty after trimming.
    #[error("subject name must not be blank")]
    BlankSubjectName,

    /// Marks text was not an integer between 0 and 100.
    #[error("marks must be a whole number from 0 to 100, got {input:?}")]
    InvalidMarks {
        /// The text as entered.
        input: String,
    },

    /// Attendance for this date has already been recorded.
    #[error("attendance for {0} is already recorded")]
    AlreadyMarked(NaiveDate),

    // === Configuration ===
    #[error("failed to read configuration at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_marks_message_quotes_input() {
        let err = Error::InvalidMarks { input: "abc".to_string() };
        assert_eq!(err.to_string(), "marks must be a whole number from 0 to 100, got \"abc\"");
    }

    #[test]
    fn test_already_marked_message() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(Error::AlreadyMarked(date).to_string(), "attendance for 2024-03-05 is already recorded");
    }

    #[test]
    fn test_config_read_message_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::ConfigRead { path: PathBuf::from("x.json"), source: io };
        assert_eq!(err.to_string(), "failed to read configuration at x.json: denied");
    }
}
