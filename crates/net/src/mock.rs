use crate::http::{SubmitCallback, SubmitRequest, SubmitTransport};
use core_types::SubmitOutcome;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted transport for tests: records every request and replays queued
/// outcomes synchronously on the caller's thread.
///
/// With nothing scripted it reports a transport failure, so a test that
/// forgets to queue an outcome fails loudly through the ordinary error path.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<SubmitOutcome>>,
    requests: Mutex<Vec<SubmitRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_outcome(&self, outcome: SubmitOutcome) {
        self.outcomes.lock().expect("mock outcomes lock").push_back(outcome);
    }

    /// Queue a clean response with the given status.
    pub fn push_status(&self, status: u16) {
        self.push_outcome(SubmitOutcome {
            status: Some(status),
            error: None,
            duration_ms: 1,
        });
    }

    /// Queue a transport-level failure.
    pub fn push_failure(&self, message: &str) {
        self.push_outcome(SubmitOutcome {
            status: None,
            error: Some(message.to_string()),
            duration_ms: 1,
        });
    }

    /// Every request seen so far, oldest first.
    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }
}

impl SubmitTransport for MockTransport {
    fn submit(&self, request: SubmitRequest, callback: SubmitCallback) {
        self.requests.lock().expect("mock requests lock").push(request);
        let outcome = self
            .outcomes
            .lock()
            .expect("mock outcomes lock")
            .pop_front()
            .unwrap_or(SubmitOutcome {
                status: None,
                error: Some("mock transport: no scripted outcome".to_string()),
                duration_ms: 0,
            });
        callback(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;

    #[test]
    fn outcomes_replay_in_scripted_order() {
        let mock = MockTransport::new();
        mock.push_status(200);
        mock.push_failure("connection reset");

        let seen: Arc<Mutex<Vec<SubmitOutcome>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: SubmitCallback = Arc::new(move |outcome| {
            sink.lock().unwrap().push(outcome);
        });

        let request = SubmitRequest {
            action: "https://example.org/f".into(),
            fields: vec![("name".into(), "Ada".into())],
        };
        mock.submit(request.clone(), callback.clone());
        mock.submit(request.clone(), callback.clone());
        mock.submit(request.clone(), callback);

        let outcomes = seen.lock().unwrap();
        assert!(outcomes[0].is_success());
        assert_eq!(outcomes[1].error.as_deref(), Some("connection reset"));
        // exhausted script degrades to a loud failure
        assert!(outcomes[2].error.as_deref().unwrap().contains("no scripted outcome"));
        assert_eq!(mock.requests().len(), 3);
        assert_eq!(mock.requests()[0], request);
    }
}
