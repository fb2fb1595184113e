use core_types::{NodeId, Rect};

/// Ordered, deduplicated set of class names.
///
/// Class names live here rather than in the `class` attribute; queries and
/// behavior code only ever consult this list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Add a class. Returns `true` if it was not already present.
    pub fn add(&mut self, name: &str) -> bool {
        if self.contains(name) {
            return false;
        }
        self.classes.push(name.to_string());
        true
    }

    /// Remove a class. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != name);
        self.classes.len() != before
    }

    /// Toggle a class and return its new presence.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.remove(name) {
            false
        } else {
            self.classes.push(name.to_string());
            true
        }
    }

    /// Force a class on or off.
    pub fn set(&mut self, name: &str, on: bool) {
        if on {
            self.add(name);
        } else {
            self.remove(name);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Inline style declarations, in insertion order.
///
/// Setting an existing property overwrites its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    props: Vec<(String, String)>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self { props: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self
            .props
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            slot.1 = value;
        } else {
            self.props.push((name.to_string(), value));
        }
    }

    /// Remove a property. Returns `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.props.len();
        self.props.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.props.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }
}

/// One element in the document arena.
///
/// `rect` is the element's document-space box, supplied by the embedder or a
/// test fixture; this crate never computes layout. `value`/`disabled` carry
/// form-field state for elements that are form controls (`value` is `Some`
/// for controls, `None` for everything else).
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, Option<String>)>,
    pub classes: ClassList,
    pub style: InlineStyle,
    pub text: String,
    pub value: Option<String>,
    pub disabled: bool,
    pub rect: Rect,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            classes: ClassList::new(),
            style: InlineStyle::new(),
            text: String::new(),
            value: None,
            disabled: false,
            rect: Rect::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Set or replace an attribute. A `None` value models a bare attribute.
    pub fn set_attr(&mut self, name: &str, value: Option<String>) {
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            slot.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
    }

    /// The `id` attribute, if any.
    pub fn html_id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// A `data-*` attribute by its suffix (`data_attr("animation")` reads
    /// `data-animation`).
    pub fn data_attr(&self, name: &str) -> Option<&str> {
        self.attr(&format!("data-{name}"))
    }

    /// The `name` attribute used for form-field collection.
    pub fn field_name(&self) -> Option<&str> {
        self.attr("name")
    }
}
