use crate::dom;
use folio_core::constants::ERROR_COLOR;
use folio_core::{
    plan_submit, ContactSelectors, ContactSubmission, Field, FieldError, StatusStyle,
    SubmitOutcome,
};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The contact form and the elements its validator writes to.
pub struct ContactForm {
    pub form: web::HtmlFormElement,
    pub name: web::HtmlElement,
    pub email: web::HtmlElement,
    pub subject: web::HtmlElement,
    pub message: web::HtmlElement,
    pub name_error: web::HtmlElement,
    pub email_error: web::HtmlElement,
    pub subject_error: web::HtmlElement,
    pub message_error: web::HtmlElement,
    pub status: web::HtmlElement,
}

impl ContactForm {
    /// `Ok(None)` when the page has no contact form.
    pub fn resolve(
        document: &web::Document,
        sel: &ContactSelectors,
    ) -> anyhow::Result<Option<Self>> {
        let Some(form) = document
            .get_element_by_id(sel.form)
            .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
        else {
            return Ok(None);
        };
        Ok(Some(Self {
            form,
            name: dom::by_id(document, sel.name)?,
            email: dom::by_id(document, sel.email)?,
            subject: dom::by_id(document, sel.subject)?,
            message: dom::by_id(document, sel.message)?,
            name_error: dom::by_id(document, sel.name_error)?,
            email_error: dom::by_id(document, sel.email_error)?,
            subject_error: dom::by_id(document, sel.subject_error)?,
            message_error: dom::by_id(document, sel.message_error)?,
            status: dom::by_id(document, sel.status)?,
        }))
    }

    fn error_target(&self, field: Field) -> &web::HtmlElement {
        match field {
            Field::Name => &self.name_error,
            Field::Email => &self.email_error,
            Field::Subject => &self.subject_error,
            Field::Message => &self.message_error,
        }
    }

    fn clear_errors(&self) {
        for field in Field::ALL {
            self.error_target(field).set_text_content(Some(""));
        }
    }

    fn show_error(&self, error: &FieldError) {
        let target = self.error_target(error.field());
        target.set_text_content(Some(&error.to_string()));
        _ = target.style().set_property("color", ERROR_COLOR);
    }

    /// Validate the current values and update the page accordingly.
    pub fn submit(&self) -> bool {
        self.clear_errors();
        let (name, email, subject, message) = (
            input_value(&self.name),
            input_value(&self.email),
            input_value(&self.subject),
            input_value(&self.message),
        );
        let submission = ContactSubmission {
            name: &name,
            email: &email,
            subject: &subject,
            message: &message,
        };
        match plan_submit(&submission) {
            SubmitOutcome::Accepted(plan) => {
                show_status(&self.status, &plan.shown);
                if plan.reset_form {
                    self.form.reset();
                }
                let status = self.status.clone();
                dom::set_timeout(plan.clear_after, move || show_status(&status, &plan.cleared));
                true
            }
            SubmitOutcome::Rejected(errors) => {
                for error in &errors {
                    self.show_error(error);
                }
                log::debug!("[contact] rejected with {} errors", errors.len());
                false
            }
        }
    }
}

fn show_status(status: &web::HtmlElement, look: &StatusStyle) {
    status.set_text_content(Some(look.text));
    let style = status.style();
    if let Some(color) = look.color {
        _ = style.set_property("color", color);
    }
    _ = style.set_property("background-color", look.background);
}

pub fn init(document: &web::Document, sel: &ContactSelectors) -> anyhow::Result<()> {
    let Some(form) = ContactForm::resolve(document, sel)? else {
        log::debug!("[contact] no #{}; skipping", sel.form);
        return Ok(());
    };
    wire(form);
    Ok(())
}

pub fn wire(form: ContactForm) {
    let form = Rc::new(form);
    let target = form.form.clone();
    dom::add_listener(&target, "submit", move |ev| {
        ev.prevent_default();
        if form.submit() {
            log::info!("[contact] message accepted");
        }
    });
}

// Inputs and textareas both expose `value`; anything else reads as empty.
fn input_value(el: &web::HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}
