//! Normalized progress vocabulary (host-internal).
//!
//! This is the only shape the host player's callbacks need to understand;
//! raw wire messages never cross the dispatcher boundary.

use serde_json::Value;

/// Learner status within an embedded activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    Started,
    InProgress,
    Completed,
}

impl ProgressStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProgressStatus::Started => "started",
            ProgressStatus::InProgress => "in_progress",
            ProgressStatus::Completed => "completed",
        }
    }
}

/// Normalized event emitted to the host's progress callback.
///
/// Either a status update (optionally carrying percent progress and a
/// score) or a delivered artifact. Out-of-order updates are possible on
/// a lossy transport; a `progress` arriving after `completed` should be
/// treated by the host as overwrite-or-ignore, never as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    Status {
        status: ProgressStatus,
        progress: Option<f64>,
        score: Option<f64>,
    },
    Submission {
        submission_type: String,
        content: Value,
    },
}

impl ProgressEvent {
    pub fn started() -> Self {
        ProgressEvent::Status {
            status: ProgressStatus::Started,
            progress: None,
            score: None,
        }
    }

    pub fn in_progress(percent: f64) -> Self {
        ProgressEvent::Status {
            status: ProgressStatus::InProgress,
            progress: Some(percent),
            score: None,
        }
    }

    /// Completion always normalizes to 100 percent.
    pub fn completed(score: Option<f64>) -> Self {
        ProgressEvent::Status {
            status: ProgressStatus::Completed,
            progress: Some(100.0),
            score,
        }
    }

    pub fn submission(submission_type: impl Into<String>, content: Value) -> Self {
        ProgressEvent::Submission {
            submission_type: submission_type.into(),
            content,
        }
    }
}
