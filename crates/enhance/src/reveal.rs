use crate::contract::ANIMATION_ATTR;
use crate::engine::Page;
use viewport::{Margin, ObserverOptions, RootMargin};

const REVEAL_THRESHOLD: f32 = 0.15;
/// Pulls the root's bottom edge up so elements reveal a little after they
/// enter, not the instant their first pixel does.
const REVEAL_BOTTOM_MARGIN_PX: f32 = -100.0;

const HIDDEN_OPACITY: &str = "0";
const HIDDEN_TRANSFORM: &str = "translateY(40px)";
const REVEAL_TRANSITION: &str =
    "opacity 0.8s cubic-bezier(0.4, 0, 0.2, 1), transform 0.8s cubic-bezier(0.4, 0, 0.2, 1)";

/// Reveal-on-scroll for every `[data-animation]` element: hidden and offset
/// at install, restored on the first qualifying intersection, then released
/// from observation so the reveal is permanent.
pub(crate) fn install(page: &mut Page) {
    let targets = page.document.with_attr(ANIMATION_ATTR);
    if targets.is_empty() {
        return;
    }
    log::debug!(target: "enhance", "reveal: observing {} element(s)", targets.len());

    let options = ObserverOptions {
        threshold: REVEAL_THRESHOLD,
        root_margin: RootMargin::new(
            Margin::Px(0.0),
            Margin::Px(0.0),
            Margin::Px(REVEAL_BOTTOM_MARGIN_PX),
            Margin::Px(0.0),
        ),
    };
    let observer = page.observers.add_observer(options, |doc, entries, ops| {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let style = &mut doc.element_mut(entry.target).style;
            style.set("opacity", "1");
            style.set("transform", "translateY(0)");
            ops.unobserve(entry.target);
        }
    });

    for target in targets {
        let style = &mut page.document.element_mut(target).style;
        style.set("opacity", HIDDEN_OPACITY);
        style.set("transform", HIDDEN_TRANSFORM);
        style.set("transition", REVEAL_TRANSITION);
        page.observers.observe(observer, target);
    }
}
