use crate::contract::{FOOTER_TEXT_CLASS, LOADED_CLASS};
use crate::engine::Page;
use crate::{active_nav, anchors, chrome, contact, nav, reveal, tilt};
use bus::{Dispatcher, EventKind, ListenTarget};
use chrono::Datelike;

/// Delay after install before the page counts as loaded for presentation,
/// ahead of the full resource load.
pub(crate) const LOADED_DELAY_MS: u64 = 100;

/// The startup sequence. Each installer is independent; they compose only by
/// running in this order, once.
pub(crate) fn install_all(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    log::debug!(target: "enhance", "installing page enhancements");
    nav::install(page, dispatcher);
    chrome::install(page, dispatcher);
    active_nav::install(page);
    anchors::install(page, dispatcher);
    reveal::install(page);
    tilt::install(page, dispatcher);
    stamp_copyright(page);
    install_loaded_marker(dispatcher);
    contact::install(page, dispatcher);

    page.schedule_timer(LOADED_DELAY_MS, mark_loaded);
}

/// Rewrite the footer text to `© {year} {owner}` (or the year alone).
fn stamp_copyright(page: &mut Page) {
    let Some(footer) = page.document.by_class(FOOTER_TEXT_CLASS).into_iter().next() else {
        return;
    };
    let year = chrono::Local::now().year();
    let text = match &page.config.copyright_owner {
        Some(owner) => format!("© {year} {owner}"),
        None => format!("© {year}"),
    };
    page.document.element_mut(footer).text = text;
}

fn install_loaded_marker(dispatcher: &mut Dispatcher<Page>) {
    dispatcher.add_listener(
        ListenTarget::Document,
        EventKind::Loaded,
        |page: &mut Page, _, _| mark_loaded(page),
    );
}

fn mark_loaded(page: &mut Page) {
    let body = page.document.body();
    page.document.element_mut(body).classes.add(LOADED_CLASS);
}
