use crate::document::{Document, ReadyState};
use crate::element::Element;
use core_types::{NodeId, Rect};

/// Programmatic document construction for embedders and test fixtures.
///
/// `open` starts an element that will receive children until the matching
/// `close`; `leaf` appends a childless element. The chainable setters apply
/// to the most recently created element:
///
/// ```
/// use dom::DocumentBuilder;
///
/// let mut b = DocumentBuilder::new();
/// b.open("header").attr("id", "header").rect(0.0, 0.0, 1200.0, 70.0);
/// b.leaf("a").class("nav__link").attr("href", "#home");
/// b.close();
/// let doc = b.build();
/// assert!(doc.by_html_id("header").is_some());
/// ```
pub struct DocumentBuilder {
    doc: Document,
    stack: Vec<NodeId>,
    cursor: NodeId,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        let doc = Document::new();
        let body = doc.body();
        Self {
            doc,
            stack: vec![body],
            cursor: body,
        }
    }

    /// Append an element under the current parent and descend into it.
    pub fn open(&mut self, tag: &str) -> &mut Self {
        let id = self.append(tag);
        self.stack.push(id);
        self
    }

    /// Append a childless element under the current parent.
    pub fn leaf(&mut self, tag: &str) -> &mut Self {
        self.append(tag);
        self
    }

    /// Close the innermost open element. Closing past `body` is a no-op.
    pub fn close(&mut self) -> &mut Self {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            debug_assert!(false, "close without matching open");
        }
        self
    }

    pub fn attr(&mut self, name: &str, value: &str) -> &mut Self {
        let cursor = self.cursor;
        self.doc
            .element_mut(cursor)
            .set_attr(name, Some(value.to_string()));
        self
    }

    /// A valueless attribute such as `data-animation`.
    pub fn bare_attr(&mut self, name: &str) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).set_attr(name, None);
        self
    }

    pub fn class(&mut self, name: &str) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).classes.add(name);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).text = text.to_string();
        self
    }

    /// Document-space box for the element, as layout would have produced.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).rect = Rect::new(x, y, width, height);
        self
    }

    /// Mark the element as a form control with the given current value.
    pub fn value(&mut self, value: &str) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).value = Some(value.to_string());
        self
    }

    pub fn disabled(&mut self, disabled: bool) -> &mut Self {
        let cursor = self.cursor;
        self.doc.element_mut(cursor).disabled = disabled;
        self
    }

    /// Id of the most recently created element.
    pub fn last(&self) -> NodeId {
        self.cursor
    }

    /// Finish construction; the document comes out parsed (`Interactive`).
    pub fn build(mut self) -> Document {
        debug_assert!(self.stack.len() == 1, "unclosed elements at build");
        self.doc.set_ready_state(ReadyState::Interactive);
        self.doc
    }

    fn append(&mut self, tag: &str) -> NodeId {
        let parent = self.stack.last().copied().unwrap_or(self.doc.body());
        let id = self.doc.append_child(parent, Element::new(tag));
        self.cursor = id;
        id
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}
