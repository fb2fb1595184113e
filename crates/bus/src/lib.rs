//! Event plumbing for the page engine: the `UiEvent` vocabulary, a
//! registered-handler dispatch table with a fixed single-threaded delivery
//! order, one-shot timers over a virtual clock, a per-frame callback queue,
//! and the mpsc channel that carries worker-thread results back in.

mod channel;
mod dispatch;
mod event;
mod frame;
mod timer;

pub use channel::{BackgroundEvent, Bus};
pub use dispatch::{DispatchOutcome, Dispatcher, EventState, ListenTarget, ListenerId};
pub use event::{EventKind, UiEvent};
pub use frame::FrameScheduler;
pub use timer::{DueTimer, TimerId, TimerQueue};
