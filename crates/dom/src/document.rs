use crate::element::Element;
use core_types::NodeId;

/// Parse progress of the hosting document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// Append-only element arena rooted at `body`.
///
/// Nodes are never removed, so a `NodeId` handed out by a document stays
/// valid for that document's lifetime. All queries walk the tree in document
/// (depth-first) order.
pub struct Document {
    elements: Vec<Element>,
    body: NodeId,
    ready_state: ReadyState,
}

impl Document {
    pub fn new() -> Self {
        let body = Element::new("body");
        Self {
            elements: vec![body],
            body: NodeId(0),
            ready_state: ReadyState::Loading,
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        log::trace!(target: "dom", "ready state -> {state:?}");
        self.ready_state = state;
    }

    pub fn node_count(&self) -> usize {
        self.elements.len()
    }

    /// Append a new element under `parent` and return its id.
    pub fn append_child(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        debug_assert!(parent.index() < self.elements.len(), "unknown parent id");
        let id = NodeId::from_raw(self.elements.len() as u32);
        element.parent = Some(parent);
        log::trace!(target: "dom", "append <{}> #{} under #{}", element.tag, id.0, parent.0);
        self.elements.push(element);
        self.elements[parent.index()].children.push(id);
        id
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.elements[id.index()]
    }

    pub fn element_mut(&mut self, id: NodeId) -> &mut Element {
        &mut self.elements[id.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// `true` if `node` is `ancestor` or one of its descendants.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.element(id).parent;
        }
        false
    }

    // --- Queries (document order) ---

    /// First element whose `id` attribute equals `id`.
    pub fn by_html_id(&self, id: &str) -> Option<NodeId> {
        self.find(self.body, &mut |el| el.html_id() == Some(id))
    }

    /// All elements carrying `class`.
    pub fn by_class(&self, class: &str) -> Vec<NodeId> {
        self.collect(self.body, true, &mut |el| el.classes.contains(class))
    }

    /// Descendants of `root` carrying `class`; `root` itself is excluded.
    pub fn by_class_within(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.collect(root, false, &mut |el| el.classes.contains(class))
    }

    /// All elements with the given tag name.
    pub fn by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.collect(self.body, true, &mut |el| el.tag.eq_ignore_ascii_case(tag))
    }

    /// All elements that carry the attribute `name`, with or without a value.
    pub fn with_attr(&self, name: &str) -> Vec<NodeId> {
        self.collect(self.body, true, &mut |el| el.has_attr(name))
    }

    fn find(&self, root: NodeId, accept: &mut dyn FnMut(&Element) -> bool) -> Option<NodeId> {
        let el = self.element(root);
        if accept(el) {
            return Some(root);
        }
        for &child in &el.children {
            if let Some(found) = self.find(child, accept) {
                return Some(found);
            }
        }
        None
    }

    fn collect(
        &self,
        root: NodeId,
        include_root: bool,
        accept: &mut dyn FnMut(&Element) -> bool,
    ) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_into(root, include_root, accept, &mut out);
        out
    }

    fn collect_into(
        &self,
        node: NodeId,
        include_node: bool,
        accept: &mut dyn FnMut(&Element) -> bool,
        out: &mut Vec<NodeId>,
    ) {
        let el = self.element(node);
        if include_node && accept(el) {
            out.push(node);
        }
        for &child in &el.children {
            self.collect_into(child, true, accept, out);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DocumentBuilder;

    fn sample() -> Document {
        let mut b = DocumentBuilder::new();
        b.open("header").attr("id", "header");
        b.open("nav");
        b.leaf("a").class("nav__link").attr("href", "#home");
        b.leaf("a").class("nav__link").attr("href", "#about");
        b.close(); // nav
        b.close(); // header
        b.open("section").attr("id", "home").class("section");
        b.leaf("div").class("card");
        b.leaf("div").class("card").attr("data-animation", "fade");
        b.close();
        b.build()
    }

    #[test]
    fn by_html_id_finds_first_match() {
        let doc = sample();
        let header = doc.by_html_id("header").expect("header exists");
        assert_eq!(doc.element(header).tag, "header");
        assert_eq!(doc.by_html_id("nope"), None);
    }

    #[test]
    fn by_class_returns_document_order() {
        let doc = sample();
        let links = doc.by_class("nav__link");
        assert_eq!(links.len(), 2);
        assert_eq!(doc.element(links[0]).attr("href"), Some("#home"));
        assert_eq!(doc.element(links[1]).attr("href"), Some("#about"));
    }

    #[test]
    fn by_class_within_excludes_the_root() {
        let mut b = DocumentBuilder::new();
        b.open("form").class("panel");
        b.leaf("div").class("panel");
        b.close();
        let doc = b.build();

        let form = doc.by_class("panel")[0];
        let inner = doc.by_class_within(form, "panel");
        assert_eq!(inner.len(), 1);
        assert_ne!(inner[0], form);
    }

    #[test]
    fn with_attr_matches_bare_attributes() {
        let doc = sample();
        let animated = doc.with_attr("data-animation");
        assert_eq!(animated.len(), 1);
        assert_eq!(doc.element(animated[0]).data_attr("animation"), Some("fade"));
    }

    #[test]
    fn contains_covers_self_and_descendants() {
        let doc = sample();
        let header = doc.by_html_id("header").unwrap();
        let link = doc.by_class("nav__link")[0];
        let card = doc.by_class("card")[0];

        assert!(doc.contains(header, header));
        assert!(doc.contains(header, link));
        assert!(!doc.contains(header, card));
        assert!(doc.contains(doc.body(), card));
    }

    #[test]
    fn empty_selections_are_empty_not_errors() {
        let doc = Document::new();
        assert!(doc.by_class("card").is_empty());
        assert!(doc.by_tag("a").is_empty());
        assert!(doc.with_attr("data-animation").is_empty());
    }
}
