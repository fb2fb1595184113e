//! Headless document model: an element arena carrying the class, style,
//! attribute, text, and form state that page enhancements read and write.
//!
//! Layout is external. Element rects are document-space values supplied by
//! the embedder (or a test fixture) and are treated as read-only facts here.

mod builder;
mod document;
mod element;
mod forms;

pub use builder::DocumentBuilder;
pub use document::{Document, ReadyState};
pub use element::{ClassList, Element, InlineStyle};
pub use forms::{form_data, reset_form};
