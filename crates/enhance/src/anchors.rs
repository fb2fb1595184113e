use crate::contract::HEADER_ID;
use crate::engine::Page;
use bus::{Dispatcher, EventKind, ListenTarget};
use core_types::NodeId;

/// Gap kept between the header's bottom edge and a scrolled-to target.
pub(crate) const SCROLL_BUFFER_PX: f32 = 20.0;

/// Animated in-page scrolling for every `a[href^="#"]`.
///
/// A bare `#` only suppresses the default jump. A fragment that resolves gets
/// the default prevented and an animated scroll to the target's top, offset
/// by the header height and a fixed buffer. A fragment that does not resolve
/// is left entirely to the default action.
pub(crate) fn install(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    let anchors: Vec<NodeId> = page
        .document
        .by_tag("a")
        .into_iter()
        .filter(|&anchor| {
            page.document
                .element(anchor)
                .attr("href")
                .is_some_and(|href| href.starts_with('#'))
        })
        .collect();

    for anchor in anchors {
        dispatcher.add_listener(
            ListenTarget::Node(anchor),
            EventKind::Click,
            move |page: &mut Page, _, state| {
                // the href is read at click time, not captured at install
                let Some(href) = page.document.element(anchor).attr("href") else {
                    return;
                };
                if href == "#" {
                    state.prevent_default();
                    return;
                }
                let Some(fragment) = href.strip_prefix('#') else {
                    return;
                };
                let Some(target) = page.document.by_html_id(fragment) else {
                    return;
                };
                state.prevent_default();
                let header_height = page
                    .document
                    .by_html_id(HEADER_ID)
                    .map(|header| page.document.element(header).rect.height)
                    .unwrap_or(0.0);
                let top = page.document.element(target).rect.y - header_height - SCROLL_BUFFER_PX;
                page.viewport.start_smooth_scroll(top);
            },
        );
    }
}
