use crate::contract::CARD_CLASS;
use crate::engine::Page;
use bus::{Dispatcher, EventKind, ListenTarget, UiEvent};

/// Divisor from pointer offset (px from the card center) to degrees of tilt.
pub(crate) const TILT_DAMPING: f32 = 20.0;

const FOLLOW_TRANSITION: &str = "transform 0.1s linear";
const REST_TRANSITION: &str = "transform 0.35s cubic-bezier(0.4, 0, 0.2, 1)";
const REST_TRANSFORM: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)";

/// 3D tilt on every `.card`: the card leans toward the pointer while it
/// moves and glides back upright when it leaves. Stateless per event; the
/// rotation is recomputed from the card's on-screen rect each time.
pub(crate) fn install(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    for card in page.document.by_class(CARD_CLASS) {
        dispatcher.add_listener(
            ListenTarget::Node(card),
            EventKind::PointerMove,
            move |page: &mut Page, event, _| {
                let &UiEvent::PointerMove { x, y, .. } = event else {
                    return;
                };
                let screen = page.viewport.to_viewport(page.document.element(card).rect);
                let rotate_x = ((y - screen.y) - screen.height / 2.0) / TILT_DAMPING;
                let rotate_y = (screen.width / 2.0 - (x - screen.x)) / TILT_DAMPING;
                let style = &mut page.document.element_mut(card).style;
                style.set("transition", FOLLOW_TRANSITION);
                style.set(
                    "transform",
                    format!(
                        "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) \
                         translateY(-8px) scale(1.02)"
                    ),
                );
            },
        );
        dispatcher.add_listener(
            ListenTarget::Node(card),
            EventKind::PointerLeave,
            move |page: &mut Page, _, _| {
                let style = &mut page.document.element_mut(card).style;
                style.set("transition", REST_TRANSITION);
                style.set("transform", REST_TRANSFORM);
            },
        );
    }
}
