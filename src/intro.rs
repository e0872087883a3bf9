//! Error-handling warm-up: a task that always fails and a renderer for
//! its outcome.

use crate::errors::TaskError;

pub fn do_something() -> Result<(), TaskError> {
    Err(TaskError)
}

/// `Success`, or `Error: <reason>`.
pub fn describe(outcome: &Result<(), TaskError>) -> String {
    match outcome {
        Ok(()) => "Success".to_string(),
        Err(e) => format!("Error: {e}"),
    }
}
