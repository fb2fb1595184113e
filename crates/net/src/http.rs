use crate::multipart::MultipartForm;
use core_types::SubmitOutcome;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// One form submission as handed to a transport.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitRequest {
    /// The form's declared `action` URL.
    pub action: String,
    /// `(name, value)` pairs in document order.
    pub fields: Vec<(String, String)>,
}

pub type SubmitCallback = Arc<dyn Fn(SubmitOutcome) + Send + Sync>;

/// Carries a submission to its endpoint and reports the outcome through the
/// callback exactly once. Implementations decide the thread the callback
/// runs on; the engine only ever consumes outcomes through its channel.
pub trait SubmitTransport {
    fn submit(&self, request: SubmitRequest, callback: SubmitCallback);
}

/// Blocking HTTP POST on a worker thread.
///
/// The action URL is validated up front; a request that can never be sent is
/// reported as a failure outcome from the caller's thread without spawning.
pub struct HttpTransport {
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitTransport for HttpTransport {
    fn submit(&self, request: SubmitRequest, callback: SubmitCallback) {
        let action = request.action.trim().to_string();
        match url::Url::parse(&action) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                callback(SubmitOutcome {
                    status: None,
                    error: Some(format!("unsupported form action scheme: {}", parsed.scheme())),
                    duration_ms: 0,
                });
                return;
            }
            Err(err) => {
                callback(SubmitOutcome {
                    status: None,
                    error: Some(format!("invalid form action: {err}")),
                    duration_ms: 0,
                });
                return;
            }
        }

        let timeout = self.timeout;
        thread::spawn(move || {
            let start = Instant::now();
            let form = MultipartForm::new(&request.fields);
            let result = ureq::post(&action)
                .timeout(timeout)
                .set("Accept", "application/json")
                .set("Content-Type", &form.content_type())
                .send_bytes(form.body());

            let duration_ms = start.elapsed().as_millis() as u64;
            let outcome = match result {
                Ok(response) => SubmitOutcome {
                    status: Some(response.status()),
                    error: None,
                    duration_ms,
                },
                // the endpoint answered, just not with a 2xx
                Err(ureq::Error::Status(code, _)) => SubmitOutcome {
                    status: Some(code),
                    error: None,
                    duration_ms,
                },
                Err(err) => SubmitOutcome {
                    status: None,
                    error: Some(err.to_string()),
                    duration_ms,
                },
            };
            log::debug!(
                target: "net",
                "POST {action}: status {:?}, error {:?}, {duration_ms}ms",
                outcome.status,
                outcome.error
            );
            callback(outcome);
        });
    }
}
