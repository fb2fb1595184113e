use crate::contract::{HEADER_ID, SCROLL_TOP_ID, SCROLLED_CLASS, VISIBLE_CLASS};
use crate::engine::Page;
use bus::{Dispatcher, EventKind, ListenTarget};
use core_types::NodeId;
use std::cell::Cell;
use std::rc::Rc;

/// Offset beyond which the header takes its scrolled presentation.
pub(crate) const HEADER_SCROLLED_AT: f32 = 50.0;
/// Offset beyond which the scroll-to-top control is shown.
pub(crate) const SCROLL_TOP_VISIBLE_AT: f32 = 400.0;

/// Scroll-driven chrome: header state, scroll-to-top visibility, and the
/// animated return to the top.
///
/// Scroll events are coalesced to one evaluation per frame: while one is
/// pending, further events are dropped, and the evaluation reads whatever
/// offset is current when the frame runs.
pub(crate) fn install(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    let Some(header) = page.document.by_html_id(HEADER_ID) else {
        log::debug!(target: "enhance", "chrome: no #{HEADER_ID}, skipped");
        return;
    };
    let Some(scroll_top) = page.document.by_html_id(SCROLL_TOP_ID) else {
        log::debug!(target: "enhance", "chrome: no #{SCROLL_TOP_ID}, skipped");
        return;
    };

    let ticking = Rc::new(Cell::new(false));
    dispatcher.add_listener(
        ListenTarget::Document,
        EventKind::Scroll,
        move |page: &mut Page, _, _| {
            if ticking.get() {
                return;
            }
            ticking.set(true);
            let ticking = ticking.clone();
            page.request_frame(move |page| {
                apply_chrome_state(page, header, scroll_top);
                ticking.set(false);
            });
        },
    );

    dispatcher.add_listener(
        ListenTarget::Node(scroll_top),
        EventKind::Click,
        move |page: &mut Page, _, _| {
            page.viewport.start_smooth_scroll(0.0);
        },
    );
}

fn apply_chrome_state(page: &mut Page, header: NodeId, scroll_top: NodeId) {
    let offset = page.viewport.scroll_y();
    page.document
        .element_mut(header)
        .classes
        .set(SCROLLED_CLASS, offset > HEADER_SCROLLED_AT);
    page.document
        .element_mut(scroll_top)
        .classes
        .set(VISIBLE_CLASS, offset > SCROLL_TOP_VISIBLE_AT);
}
