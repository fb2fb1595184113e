use crate::document::Document;
use core_types::NodeId;

/// Collect `(name, value)` pairs from the form's controls in document order.
///
/// A control contributes when it carries a `name` attribute, holds a value,
/// and is not disabled, the same rule the form-data algorithm applies to
/// successful controls.
pub fn form_data(doc: &Document, form: NodeId) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    collect_fields(doc, form, &mut fields);
    fields
}

fn collect_fields(doc: &Document, node: NodeId, out: &mut Vec<(String, String)>) {
    for &child in &doc.element(node).children {
        let el = doc.element(child);
        if !el.disabled
            && let Some(name) = el.field_name()
            && let Some(value) = el.value.as_deref()
        {
            out.push((name.to_string(), value.to_string()));
        }
        collect_fields(doc, child, out);
    }
}

/// Restore every control in the form to its declared initial value: the
/// `value` attribute when present, otherwise empty.
pub fn reset_form(doc: &mut Document, form: NodeId) {
    let controls: Vec<NodeId> = collect_controls(doc, form);
    for id in controls {
        let initial = doc
            .element(id)
            .attr("value")
            .unwrap_or_default()
            .to_string();
        doc.element_mut(id).value = Some(initial);
    }
}

fn collect_controls(doc: &Document, form: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    collect_controls_into(doc, form, &mut out);
    out
}

fn collect_controls_into(doc: &Document, node: NodeId, out: &mut Vec<NodeId>) {
    for &child in &doc.element(node).children {
        if doc.element(child).value.is_some() {
            out.push(child);
        }
        collect_controls_into(doc, child, out);
    }
}
