use core_types::{NodeId, SubmitOutcome};

/// One user-interface event, as the embedder or the engine delivers it.
///
/// Pointer coordinates are viewport-relative CSS px. A `Click` without a
/// target models a click that hit no element (bare document background).
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    Click {
        target: Option<NodeId>,
    },
    PointerMove {
        target: Option<NodeId>,
        x: f32,
        y: f32,
    },
    PointerLeave {
        target: Option<NodeId>,
    },
    Scroll,
    Submit {
        form: NodeId,
    },
    /// A form submission's transport result, re-entering from the worker.
    SubmitFinished {
        form: NodeId,
        outcome: SubmitOutcome,
    },
    /// Full resource load (the `window.load` analogue).
    Loaded,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Click { .. } => EventKind::Click,
            UiEvent::PointerMove { .. } => EventKind::PointerMove,
            UiEvent::PointerLeave { .. } => EventKind::PointerLeave,
            UiEvent::Scroll => EventKind::Scroll,
            UiEvent::Submit { .. } => EventKind::Submit,
            UiEvent::SubmitFinished { .. } => EventKind::SubmitFinished,
            UiEvent::Loaded => EventKind::Loaded,
        }
    }

    /// The element this event is addressed to, when it has one.
    pub fn target(&self) -> Option<NodeId> {
        match self {
            UiEvent::Click { target }
            | UiEvent::PointerMove { target, .. }
            | UiEvent::PointerLeave { target } => *target,
            UiEvent::Submit { form } | UiEvent::SubmitFinished { form, .. } => Some(*form),
            UiEvent::Scroll | UiEvent::Loaded => None,
        }
    }
}

/// Listener registration key; mirrors the `UiEvent` variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    PointerMove,
    PointerLeave,
    Scroll,
    Submit,
    SubmitFinished,
    Loaded,
}
