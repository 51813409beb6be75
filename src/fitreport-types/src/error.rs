use thiserror::Error;

use crate::ActivityCode;

#[derive(Debug, Error, PartialEq)]
pub enum FitReportError {
    #[error("unsupported activity type `{0}`")]
    UnsupportedActivity(String),
    #[error("{code} expects {expected} values, got {actual}")]
    InvalidValueCount {
        code: ActivityCode,
        expected: usize,
        actual: usize,
    },
    #[error("action count must be a whole number, got {0}")]
    InvalidActionCount(f64),
}
