//! Contact-form submission transport: multipart/form-data encoding and a
//! blocking HTTP client run on a worker thread, with the outcome handed back
//! through a callback. The `mock` feature adds a scripted in-process
//! transport for tests.

mod http;
mod multipart;
#[cfg(feature = "mock")]
mod mock;

pub use http::{HttpTransport, SubmitCallback, SubmitRequest, SubmitTransport};
pub use multipart::MultipartForm;

#[cfg(feature = "mock")]
pub use mock::MockTransport;
