use crate::contract::{
    CONTACT_FORM_CLASS, FORM_BUTTON_CLASS, FORM_ERROR_CLASS, FORM_SUCCESS_CLASS,
};
use crate::engine::Page;
use bus::{Dispatcher, EventKind, ListenTarget, UiEvent};
use net::SubmitRequest;

pub(crate) const SENDING_LABEL: &str = "Sending...";
/// How long completion feedback stays up before both panels are hidden.
pub(crate) const FEEDBACK_MS: u64 = 5000;

/// Background submission for the first `.contact__form`.
///
/// Submit is always prevented; the form never navigates. While the button is
/// disabled further submits are ignored, so the disabled control doubles as
/// the duplicate-submission guard. Each completion schedules its own hide
/// timer and earlier timers are never cancelled: feedback from a rapid
/// resubmission can be hidden early by the previous submission's timer.
pub(crate) fn install(page: &mut Page, dispatcher: &mut Dispatcher<Page>) {
    let doc = &page.document;
    let Some(form) = doc.by_class(CONTACT_FORM_CLASS).into_iter().next() else {
        return;
    };
    let Some(success) = doc.by_class_within(form, FORM_SUCCESS_CLASS).into_iter().next() else {
        log::debug!(target: "enhance", "contact: no .{FORM_SUCCESS_CLASS} in the form, skipped");
        return;
    };
    let Some(error) = doc.by_class_within(form, FORM_ERROR_CLASS).into_iter().next() else {
        log::debug!(target: "enhance", "contact: no .{FORM_ERROR_CLASS} in the form, skipped");
        return;
    };
    let Some(button) = doc.by_class_within(form, FORM_BUTTON_CLASS).into_iter().next() else {
        log::debug!(target: "enhance", "contact: no .{FORM_BUTTON_CLASS} in the form, skipped");
        return;
    };
    let idle_label = doc.element(button).text.clone();

    dispatcher.add_listener(
        ListenTarget::Node(form),
        EventKind::Submit,
        move |page: &mut Page, _, state| {
            state.prevent_default();
            if page.document.element(button).disabled {
                // an in-flight submission owns the button
                return;
            }
            {
                let control = page.document.element_mut(button);
                control.disabled = true;
                control.text = SENDING_LABEL.to_string();
            }
            let fields = dom::form_data(&page.document, form);
            let action = page
                .document
                .element(form)
                .attr("action")
                .unwrap_or_default()
                .to_string();
            page.start_submission(form, SubmitRequest { action, fields });
        },
    );

    dispatcher.add_listener(
        ListenTarget::Node(form),
        EventKind::SubmitFinished,
        move |page: &mut Page, event, _| {
            let UiEvent::SubmitFinished { outcome, .. } = event else {
                return;
            };
            if outcome.is_success() {
                page.document.element_mut(success).style.set("display", "block");
                page.document.element_mut(error).style.set("display", "none");
                dom::reset_form(&mut page.document, form);
            } else {
                page.document.element_mut(success).style.set("display", "none");
                page.document.element_mut(error).style.set("display", "block");
                if let Some(message) = &outcome.error {
                    page.diagnostics
                        .report(format!("form submission failed: {message}"));
                }
            }
            let control = page.document.element_mut(button);
            control.disabled = false;
            control.text = idle_label.clone();

            page.schedule_timer(FEEDBACK_MS, move |page| {
                page.document.element_mut(success).style.set("display", "none");
                page.document.element_mut(error).style.set("display", "none");
            });
        },
    );
}
