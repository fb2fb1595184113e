use crate::contract::{ACTIVE_CLASS, NAV_LINK_CLASS, NAV_MENU_ID, NAV_TOGGLE_ID};
use crate::engine::Page;
use bus::{Dispatcher, EventKind, ListenTarget};
use core_types::NodeId;

/// Mobile menu: toggle on the hamburger, close on any nav link, close on a
/// click outside both while open. Menu class, toggle class, and the body
/// scroll-lock always change together within one handler.
pub(crate) fn install(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    let Some(toggle) = page.document.by_html_id(NAV_TOGGLE_ID) else {
        log::debug!(target: "enhance", "nav: no #{NAV_TOGGLE_ID}, skipped");
        return;
    };
    let Some(menu) = page.document.by_html_id(NAV_MENU_ID) else {
        log::debug!(target: "enhance", "nav: no #{NAV_MENU_ID}, skipped");
        return;
    };
    let links = page.document.by_class(NAV_LINK_CLASS);

    dispatcher.add_listener(
        ListenTarget::Node(toggle),
        EventKind::Click,
        move |page: &mut Page, _, state| {
            // keep this click away from the outside-click listener below
            state.stop_propagation();
            let open = !is_open(page, menu);
            set_open(page, toggle, menu, open);
        },
    );

    for link in links {
        dispatcher.add_listener(
            ListenTarget::Node(link),
            EventKind::Click,
            move |page: &mut Page, _, _| {
                set_open(page, toggle, menu, false);
            },
        );
    }

    dispatcher.add_listener(
        ListenTarget::Document,
        EventKind::Click,
        move |page: &mut Page, event, _| {
            if !is_open(page, menu) {
                return;
            }
            let outside = match event.target() {
                Some(node) => {
                    !page.document.contains(toggle, node) && !page.document.contains(menu, node)
                }
                // a click that hit no element is outside by definition
                None => true,
            };
            if outside {
                set_open(page, toggle, menu, false);
            }
        },
    );
}

fn is_open(page: &Page, menu: NodeId) -> bool {
    page.document.element(menu).classes.contains(ACTIVE_CLASS)
}

fn set_open(page: &mut Page, toggle: NodeId, menu: NodeId, open: bool) {
    page.document
        .element_mut(menu)
        .classes
        .set(ACTIVE_CLASS, open);
    page.document
        .element_mut(toggle)
        .classes
        .set(ACTIVE_CLASS, open);
    let body = page.document.body();
    if open {
        page.document.element_mut(body).style.set("overflow", "hidden");
    } else {
        page.document.element_mut(body).style.remove("overflow");
    }
}
