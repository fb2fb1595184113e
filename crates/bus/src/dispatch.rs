use crate::event::{EventKind, UiEvent};
use core_types::NodeId;

/// Where a listener is attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenTarget {
    Node(NodeId),
    Document,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Per-dispatch flags a listener can raise.
#[derive(Debug, Default)]
pub struct EventState {
    stopped: bool,
    default_prevented: bool,
}

impl EventState {
    /// End delivery after the current listener; in particular, keeps a
    /// node-phase event away from document-phase listeners.
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// What a dispatch left behind for the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub default_prevented: bool,
    /// How many listeners actually ran.
    pub delivered: usize,
}

struct ListenerEntry<C> {
    id: ListenerId,
    target: ListenTarget,
    kind: EventKind,
    callback: Box<dyn FnMut(&mut C, &UiEvent, &mut EventState)>,
}

/// Registered-handler dispatch table with a fixed, single-threaded delivery
/// order: target-phase listeners in registration order, then document-phase
/// listeners in registration order.
pub struct Dispatcher<C> {
    listeners: Vec<ListenerEntry<C>>,
    next_id: u64,
}

impl<C> Dispatcher<C> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add_listener(
        &mut self,
        target: ListenTarget,
        kind: EventKind,
        callback: impl FnMut(&mut C, &UiEvent, &mut EventState) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push(ListenerEntry {
            id,
            target,
            kind,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a listener. Returns `true` if it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|entry| entry.id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` through the table.
    ///
    /// Both phases share one `EventState`: `prevent_default` set anywhere
    /// survives into the outcome, and `stop_propagation` ends delivery after
    /// the listener that raised it.
    pub fn dispatch(&mut self, ctx: &mut C, event: &UiEvent) -> DispatchOutcome {
        let kind = event.kind();
        let target = event.target();
        let mut state = EventState::default();
        let mut delivered = 0;

        if let Some(node) = target {
            self.run_phase(ctx, event, ListenTarget::Node(node), kind, &mut state, &mut delivered);
        }
        if !state.is_stopped() {
            self.run_phase(ctx, event, ListenTarget::Document, kind, &mut state, &mut delivered);
        }

        log::trace!(target: "bus", "dispatched {kind:?} to {delivered} listener(s)");
        DispatchOutcome {
            default_prevented: state.is_default_prevented(),
            delivered,
        }
    }

    fn run_phase(
        &mut self,
        ctx: &mut C,
        event: &UiEvent,
        phase: ListenTarget,
        kind: EventKind,
        state: &mut EventState,
        delivered: &mut usize,
    ) {
        for entry in &mut self.listeners {
            if entry.target != phase || entry.kind != kind {
                continue;
            }
            (entry.callback)(ctx, event, state);
            *delivered += 1;
            if state.is_stopped() {
                return;
            }
        }
    }
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
