//! Page-enhancement behaviors over the headless document model.
//!
//! [`Engine`] owns the dispatch table and drives a [`Page`] (document,
//! viewport, observers, timers, frames, transport). Installation wires each
//! behavior module against the markup contract in [`contract`]; pages
//! missing a behavior's markup simply skip that behavior.

mod active_nav;
mod anchors;
mod boot;
mod chrome;
mod config;
mod contact;
pub mod contract;
mod diagnostics;
mod engine;
mod nav;
mod reveal;
mod tilt;

pub use config::EnhanceConfig;
pub use diagnostics::Diagnostics;
pub use engine::{Engine, FRAME_MS, Page, PageAction};
