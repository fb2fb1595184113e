use crate::intersect::{RootMargin, intersection};
use crate::scroll::Viewport;
use core_types::NodeId;
use dom::Document;

/// Handle to one registered intersection watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObserverId(usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the target for it to count as observed.
    pub threshold: f32,
    pub root_margin: RootMargin,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: RootMargin::none(),
        }
    }
}

/// One delivered observation. `is_intersecting` reports the observation
/// state: geometric intersection with the margined root AND ratio at or
/// above the observer's threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub is_intersecting: bool,
    pub ratio: f32,
}

/// Operations a callback may request against its own observer. They take
/// effect when the callback returns.
#[derive(Default)]
pub struct ObserverOps {
    unobserved: Vec<NodeId>,
}

impl ObserverOps {
    pub fn unobserve(&mut self, target: NodeId) {
        self.unobserved.push(target);
    }
}

pub type ObserverCallback = Box<dyn FnMut(&mut Document, &[IntersectionEntry], &mut ObserverOps)>;

struct Watched {
    target: NodeId,
    /// `None` until the initial delivery; afterwards the last reported state.
    last_state: Option<bool>,
}

struct Observer {
    options: ObserverOptions,
    callback: ObserverCallback,
    watched: Vec<Watched>,
}

/// Owns every intersection watcher on the page and delivers entries when a
/// target's observation state changes.
///
/// Each target also gets one initial delivery after `observe`, whatever its
/// state, matching how the browser observer reports newly watched elements.
/// Entries for one observer arrive in observation order within a single
/// callback invocation; that iteration order is authoritative for
/// last-write-wins consumers.
pub struct ObserverRegistry {
    observers: Vec<Observer>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub fn add_observer(
        &mut self,
        options: ObserverOptions,
        callback: impl FnMut(&mut Document, &[IntersectionEntry], &mut ObserverOps) + 'static,
    ) -> ObserverId {
        self.observers.push(Observer {
            options,
            callback: Box::new(callback),
            watched: Vec::new(),
        });
        ObserverId(self.observers.len() - 1)
    }

    /// Start watching `target`. Re-observing an already watched target is a
    /// no-op.
    pub fn observe(&mut self, id: ObserverId, target: NodeId) {
        let observer = &mut self.observers[id.0];
        if observer.watched.iter().any(|w| w.target == target) {
            return;
        }
        observer.watched.push(Watched {
            target,
            last_state: None,
        });
    }

    pub fn unobserve(&mut self, id: ObserverId, target: NodeId) {
        self.observers[id.0].watched.retain(|w| w.target != target);
    }

    pub fn watched_count(&self, id: ObserverId) -> usize {
        self.observers[id.0].watched.len()
    }

    /// Evaluate every observer against the current viewport and invoke the
    /// callbacks that have entries to report.
    pub fn deliver(&mut self, doc: &mut Document, viewport: &Viewport) {
        let visible = viewport.visible_rect();
        for (index, observer) in self.observers.iter_mut().enumerate() {
            let root = observer.options.root_margin.apply(visible);
            let mut entries = Vec::new();
            for watched in &mut observer.watched {
                let Some(element) = doc.get(watched.target) else {
                    continue;
                };
                let (intersecting, ratio) = intersection(&element.rect, &root);
                let state = intersecting && ratio >= observer.options.threshold;
                if watched.last_state != Some(state) {
                    watched.last_state = Some(state);
                    entries.push(IntersectionEntry {
                        target: watched.target,
                        is_intersecting: state,
                        ratio,
                    });
                }
            }
            if entries.is_empty() {
                continue;
            }
            log::trace!(
                target: "viewport",
                "observer {index}: delivering {} entr{}",
                entries.len(),
                if entries.len() == 1 { "y" } else { "ies" }
            );
            let mut ops = ObserverOps::default();
            (observer.callback)(doc, &entries, &mut ops);
            for target in ops.unobserved {
                observer.watched.retain(|w| w.target != target);
            }
        }
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
