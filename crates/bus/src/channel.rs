use core_types::{NodeId, SubmitOutcome};
use std::sync::mpsc::{Receiver, Sender, channel};

/// Completion notices crossing from worker threads back to the page thread.
#[derive(Debug)]
pub enum BackgroundEvent {
    SubmitFinished {
        form: NodeId,
        outcome: SubmitOutcome,
    },
}

/// The channel pair between transport workers and the engine.
///
/// The sender side is cloned into each worker callback; the engine keeps the
/// receiver and drains it once per frame.
pub struct Bus {
    pub tx: Sender<BackgroundEvent>,
    pub rx: Receiver<BackgroundEvent>,
}

impl Bus {
    pub fn new() -> Self {
        let (tx, rx) = channel();
        Self { tx, rx }
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_cross_threads_in_send_order() {
        let bus = Bus::new();
        let tx = bus.tx.clone();

        std::thread::spawn(move || {
            for status in [200u16, 500] {
                tx.send(BackgroundEvent::SubmitFinished {
                    form: NodeId::from_raw(7),
                    outcome: SubmitOutcome {
                        status: Some(status),
                        error: None,
                        duration_ms: 1,
                    },
                })
                .expect("receiver alive");
            }
        })
        .join()
        .expect("sender thread");

        let statuses: Vec<Option<u16>> = bus
            .rx
            .try_iter()
            .map(|event| match event {
                BackgroundEvent::SubmitFinished { outcome, .. } => outcome.status,
            })
            .collect();
        assert_eq!(statuses, vec![Some(200), Some(500)]);
    }
}
