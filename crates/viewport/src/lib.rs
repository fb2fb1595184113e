//! The engine's window onto the document: clamped and animated scrolling,
//! intersection geometry with px/percent root margins, and the registry that
//! owns intersection watchers and delivers their entries.

mod intersect;
mod observer;
mod scroll;

pub use intersect::{Margin, RootMargin, intersection};
pub use observer::{
    IntersectionEntry, ObserverCallback, ObserverId, ObserverOps, ObserverOptions,
    ObserverRegistry,
};
pub use scroll::{SMOOTH_SCROLL_MS, Viewport};
