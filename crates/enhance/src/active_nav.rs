use crate::contract::{ACTIVE_CLASS, NAV_LINK_CLASS, SECTION_CLASS};
use crate::engine::Page;
use core_types::NodeId;
use dom::Document;
use viewport::{Margin, ObserverOptions, RootMargin};

/// Keeps the nav link matching the section under the reading line marked
/// `active`.
///
/// The observer root is shrunk to a line 20% down the viewport (top -20%,
/// bottom -80%): a section is "current" while it spans that line. Every
/// intersecting entry re-marks the whole link set, so when several sections
/// touch the line in one delivery the last one in observation order wins.
pub(crate) fn install(page: &mut Page) {
    let sections = page.document.by_class(SECTION_CLASS);
    let links = page.document.by_class(NAV_LINK_CLASS);
    if sections.is_empty() || links.is_empty() {
        log::debug!(target: "enhance", "active-nav: no sections or links, skipped");
        return;
    }

    let options = ObserverOptions {
        threshold: 0.0,
        root_margin: RootMargin::new(
            Margin::Percent(-20.0),
            Margin::Px(0.0),
            Margin::Percent(-80.0),
            Margin::Px(0.0),
        ),
    };
    let observer = page.observers.add_observer(options, move |doc, entries, _| {
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            mark_active(doc, &links, entry.target);
        }
    });
    for section in sections {
        page.observers.observe(observer, section);
    }
}

/// Mark exactly the links whose fragment href names `section`'s id. A
/// section without an id matches nothing and clears the whole set.
fn mark_active(doc: &mut Document, links: &[NodeId], section: NodeId) {
    let id = doc.element(section).html_id().map(str::to_string);
    for &link in links {
        let matches = match (&id, doc.element(link).attr("href")) {
            (Some(id), Some(href)) => href.strip_prefix('#') == Some(id.as_str()),
            _ => false,
        };
        doc.element_mut(link).classes.set(ACTIVE_CLASS, matches);
    }
}
