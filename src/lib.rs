//! Client-side page enhancements over a headless browser model.
//!
//! The embedder supplies the environment: a [`Document`] built from the
//! page's markup with element rects from its own layout, a [`Viewport`], and
//! an [`EnhanceConfig`]. [`enhance_page`] wires the default HTTP transport
//! and installs every behavior; the embedder then feeds the [`Engine`]
//! events (`dispatch`), user scrolls (`scroll_to`), frames (`run_frame`),
//! and virtual time (`advance`), and honors the [`PageAction`]s it returns.
//!
//! Behaviors bind to the markup contract in [`contract`]; a page missing a
//! behavior's markup simply skips that behavior.

pub use bus::{DispatchOutcome, EventKind, ListenTarget, UiEvent};
pub use core_types::{NodeId, Rect, SubmitOutcome};
pub use dom::{Document, DocumentBuilder, ReadyState, form_data, reset_form};
pub use enhance::{Diagnostics, EnhanceConfig, Engine, FRAME_MS, Page, PageAction, contract};
pub use net::{HttpTransport, SubmitRequest, SubmitTransport};
pub use viewport::{Margin, ObserverRegistry, RootMargin, Viewport};

use std::sync::Arc;

/// Install every enhancement on the document, submitting forms over HTTP.
///
/// On a still-parsing document installation is deferred; call
/// [`Engine::document_parsed`] when parsing finishes.
pub fn enhance_page(document: Document, viewport: Viewport, config: EnhanceConfig) -> Engine {
    enhance_page_with(document, viewport, config, Arc::new(HttpTransport::new()))
}

/// [`enhance_page`] with a caller-chosen submission transport.
pub fn enhance_page_with(
    document: Document,
    viewport: Viewport,
    config: EnhanceConfig,
    transport: Arc<dyn SubmitTransport>,
) -> Engine {
    let mut engine = Engine::new(document, viewport, config, transport);
    engine.install();
    engine
}
