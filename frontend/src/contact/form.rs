use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{submit, Field, FieldErrors, Inquiry, SUBJECTS};
use crate::components::notification::{Notification, Toast};
use crate::config;
use crate::reporting::{use_reporter, ReportEvent};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let inquiry = use_state(Inquiry::default);
    let errors = use_state(FieldErrors::default);
    let is_submitting = use_state(|| false);
    let toast = use_state(|| None::<Toast>);
    let reporter = use_reporter();

    let update = {
        let inquiry = inquiry.clone();
        let errors = errors.clone();
        move |field: Field, value: String| {
            let mut next = (*inquiry).clone();
            next.set(field, value);
            inquiry.set(next);
            if errors.get(field).is_some() {
                let mut remaining = (*errors).clone();
                remaining.clear(field);
                errors.set(remaining);
            }
        }
    };

    let on_text = |field: Field| {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            update(field, input.value());
        })
    };

    let on_subject = {
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            update(Field::Subject, select.value());
        })
    };

    let on_message = {
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update(Field::Message, area.value());
        })
    };

    let onsubmit = {
        let inquiry = inquiry.clone();
        let errors = errors.clone();
        let is_submitting = is_submitting.clone();
        let toast = toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(found) = inquiry.validate() {
                errors.set(found);
                return;
            }

            is_submitting.set(true);
            let current = (*inquiry).clone();
            let inquiry = inquiry.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            let reporter = reporter.clone();
            spawn_local(async move {
                let result = submit(&current).await;
                reporter.report(ReportEvent::ContactSubmitted { ok: result.is_ok() });
                match result {
                    Ok(()) => {
                        gloo_console::log!("Contact form sent");
                        inquiry.set(Inquiry::default());
                        toast.set(Some(Toast::success(
                            "Thanks! Your message is on its way. We usually reply within one business day.",
                        )));
                    }
                    Err(e) => {
                        log::warn!("Contact form submission failed: {}", e);
                        toast.set(Some(Toast::error(format!(
                            "Sorry, we couldn't send your message. Please try again or email us at {}.",
                            config::CONTACT_EMAIL
                        ))));
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let field_error = |field: Field| match errors.get(field) {
        Some(message) => html! { <span class="field-error">{message}</span> },
        None => html! {},
    };
    let invalid = |field: Field| errors.get(field).map(|_| "invalid");

    html! {
        <>
            <form class="contact-form" {onsubmit} novalidate=true>
                <div class="form-row">
                    <label class={classes!("form-field", invalid(Field::Name))}>
                        <span>{"Name *"}</span>
                        <input type="text" name="name" autocomplete="name"
                            value={inquiry.name.clone()} oninput={on_text(Field::Name)} />
                        {field_error(Field::Name)}
                    </label>
                    <label class={classes!("form-field", invalid(Field::Email))}>
                        <span>{"Email *"}</span>
                        <input type="email" name="email" autocomplete="email"
                            value={inquiry.email.clone()} oninput={on_text(Field::Email)} />
                        {field_error(Field::Email)}
                    </label>
                </div>
                <div class="form-row">
                    <label class="form-field">
                        <span>{"Phone"}</span>
                        <input type="tel" name="phone" autocomplete="tel"
                            value={inquiry.phone.clone()} oninput={on_text(Field::Phone)} />
                    </label>
                    <label class={classes!("form-field", invalid(Field::Subject))}>
                        <span>{"Subject *"}</span>
                        <select name="subject" onchange={on_subject}>
                            <option value="" selected={inquiry.subject.is_empty()} disabled=true>{"Choose a subject"}</option>
                            {
                                SUBJECTS.iter().map(|subject| html! {
                                    <option value={*subject} selected={inquiry.subject == *subject}>{*subject}</option>
                                }).collect::<Html>()
                            }
                        </select>
                        {field_error(Field::Subject)}
                    </label>
                </div>
                <label class={classes!("form-field", invalid(Field::Message))}>
                    <span>{"Message *"}</span>
                    <textarea name="message" rows="6"
                        value={inquiry.message.clone()} oninput={on_message} />
                    {field_error(Field::Message)}
                </label>
                <button type="submit" class="hero-cta" disabled={*is_submitting}>
                    if *is_submitting {
                        <>
                            <span class="loading-spinner"></span>
                            {" Sending..."}
                        </>
                    } else {
                        {"Send Message"}
                    }
                </button>
            </form>
            <Notification toast={(*toast).clone()} {on_dismiss} />
        </>
    }
}
