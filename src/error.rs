//! Error types for the task store and the planner glue

use thiserror::Error;

/// An error from the remote task store.
///
/// Transport failures and HTTP-level failures carry different messages, and stay
/// distinguishable here in case a caller wants to branch on them. The bundled
/// [`Planner`](crate::planner::Planner) treats them alike.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never got a response (DNS failure, connection refused...)
    #[error("Error: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Server Error: {status} - {message}")]
    Server { status: u16, message: String },
}

impl StoreError {
    pub fn is_transport(&self) -> bool {
        match self {
            StoreError::Transport(_) => true,
            _ => false,
        }
    }
}

/// A single rejected field of a task form.
///
/// `Display` gives the message shown next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Title must be at most {0} characters")]
    TitleTooLong(usize),
    #[error("Date is required")]
    MissingDate,
    #[error("Task type is required")]
    MissingTaskType,
}

/// An error from a planner operation: either the form was rejected before any
/// request was sent, or the store refused the round trip.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("{}", format_violations(.0))]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Store(#[from] StoreError),
}

fn format_violations(violations: &[ValidationError]) -> String {
    let messages: Vec<String> = violations.iter()
        .map(|v| v.to_string())
        .collect();
    messages.join("; ")
}
