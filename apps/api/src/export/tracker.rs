use std::sync::Mutex;

use serde::Serialize;
use tracing::{debug, warn};

use crate::export::ExportError;

const CANCELLED: &str = "export cancelled";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExportState {
    Idle,
    Capturing,
    Encoding,
    #[serde(rename_all = "camelCase")]
    Saved { file_name: String },
    Failed { message: String },
}

impl ExportState {
    pub fn in_flight(&self) -> bool {
        matches!(self, ExportState::Capturing | ExportState::Encoding)
    }
}

#[derive(Debug)]
struct Inner {
    state: ExportState,
    last_failure: Option<String>,
}

/// Per-session export state machine. Only one export may be in flight at a time.
#[derive(Debug)]
pub struct ExportTracker {
    inner: Mutex<Inner>,
}

impl Default for ExportTracker {
    fn default() -> Self {
        ExportTracker {
            inner: Mutex::new(Inner {
                state: ExportState::Idle,
                last_failure: None,
            }),
        }
    }
}

impl ExportTracker {
    pub fn state(&self) -> ExportState {
        self.lock().state.clone()
    }

    /// Message of the most recent failure, kept after the state returns to `Idle`.
    pub fn last_failure(&self) -> Option<String> {
        self.lock().last_failure.clone()
    }

    /// `Idle | Saved → Capturing`. Refuses while another export is running.
    ///
    /// The returned run must be settled with `saved` or `failed`. Dropping it unsettled
    /// (the request went away mid-export) records a cancellation and returns to `Idle`.
    pub fn begin(&self) -> Result<ExportRun<'_>, ExportError> {
        let mut inner = self.lock();
        if inner.state.in_flight() {
            return Err(ExportError::Busy);
        }
        transition(&mut inner.state, ExportState::Capturing);
        Ok(ExportRun {
            tracker: self,
            settled: false,
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// An export in flight on one tracker.
#[derive(Debug)]
pub struct ExportRun<'a> {
    tracker: &'a ExportTracker,
    settled: bool,
}

impl ExportRun<'_> {
    /// `Capturing → Encoding`.
    pub fn encoding(&self) {
        transition(&mut self.tracker.lock().state, ExportState::Encoding);
    }

    /// `Encoding → Saved`.
    pub fn saved(mut self, file_name: &str) {
        self.settled = true;
        transition(
            &mut self.tracker.lock().state,
            ExportState::Saved {
                file_name: file_name.to_string(),
            },
        );
    }

    /// `Capturing | Encoding → Failed → Idle`.
    pub fn failed(mut self, message: &str) {
        self.settled = true;
        fail(&mut self.tracker.lock(), message);
    }
}

impl Drop for ExportRun<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Export cancelled before it finished");
            fail(&mut self.tracker.lock(), CANCELLED);
        }
    }
}

fn fail(inner: &mut Inner, message: &str) {
    transition(
        &mut inner.state,
        ExportState::Failed {
            message: message.to_string(),
        },
    );
    inner.last_failure = Some(message.to_string());
    transition(&mut inner.state, ExportState::Idle);
}

fn transition(state: &mut ExportState, next: ExportState) {
    debug!("Export state {:?} -> {:?}", state, next);
    *state = next;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path() {
        let tracker = ExportTracker::default();
        assert_eq!(tracker.state(), ExportState::Idle);
        let run = tracker.begin().unwrap();
        assert_eq!(tracker.state(), ExportState::Capturing);
        run.encoding();
        assert_eq!(tracker.state(), ExportState::Encoding);
        run.saved("CV-Ada.pdf");
        assert_eq!(
            tracker.state(),
            ExportState::Saved {
                file_name: "CV-Ada.pdf".to_string()
            }
        );
        assert_eq!(tracker.last_failure(), None);
    }

    #[test]
    fn test_second_begin_while_running_is_rejected() {
        let tracker = ExportTracker::default();
        let run = tracker.begin().unwrap();
        assert!(matches!(tracker.begin(), Err(ExportError::Busy)));
        run.encoding();
        assert!(matches!(tracker.begin(), Err(ExportError::Busy)));
        run.failed("boom");
    }

    #[test]
    fn test_failure_returns_to_idle_and_is_remembered() {
        let tracker = ExportTracker::default();
        tracker.begin().unwrap().failed("boom");
        assert_eq!(tracker.state(), ExportState::Idle);
        assert_eq!(tracker.last_failure().as_deref(), Some("boom"));
        assert!(tracker.begin().is_ok());
    }

    #[test]
    fn test_can_export_again_after_saved() {
        let tracker = ExportTracker::default();
        let run = tracker.begin().unwrap();
        run.encoding();
        run.saved("a.pdf");
        assert!(tracker.begin().is_ok());
    }

    #[test]
    fn test_dropped_run_returns_to_idle() {
        let tracker = ExportTracker::default();
        {
            let run = tracker.begin().unwrap();
            run.encoding();
        }
        assert_eq!(tracker.state(), ExportState::Idle);
        assert_eq!(tracker.last_failure().as_deref(), Some(CANCELLED));
        assert!(tracker.begin().is_ok());
    }

    #[test]
    fn test_state_serializes_tagged() {
        let json = serde_json::to_value(ExportState::Saved {
            file_name: "CV-A.pdf".to_string(),
        })
        .unwrap();
        assert_eq!(json["state"], "saved");
        assert_eq!(json["fileName"], "CV-A.pdf");
    }
}
