use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::emailer::Mailer;
use crate::forms::{validate, ContactForm};

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub on_notify: Callback<Toast>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let on_company = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.company = input.value();
            form.set(next);
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            if let Err(err) = validate(&*form) {
                on_notify.emit(Toast::error(err.title(), err.description()));
                return;
            }

            let snapshot = (*form).clone();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let on_notify = on_notify.clone();
            is_submitting.set(true);

            spawn_local(async move {
                let report = Mailer::site().send(&snapshot).await;
                if report.success {
                    form.set(ContactForm::default());
                    on_notify.emit(Toast::success(
                        "Message sent!",
                        "Thanks for reaching out. We will get back to you shortly.",
                    ));
                } else {
                    // keep what the visitor typed so they can retry
                    on_notify.emit(Toast::error(
                        "Could not send your message",
                        report.error.unwrap_or_else(|| {
                            "Something went wrong while sending. Try again or reach us on WhatsApp."
                                .to_string()
                        }),
                    ));
                }
                is_submitting.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <div class="contact-inner">
                <h2>{"Let's talk"}</h2>
                <p class="contact-lead">
                    {"Tell us what you are building and we will get back to you within one business day."}
                </p>
                <form onsubmit={onsubmit}>
                    <div class="field-row">
                        <div class="field">
                            <label>{"Name *"}</label>
                            <input
                                type="text"
                                placeholder="Your full name"
                                value={(*form).name.clone()}
                                oninput={on_name}
                                disabled={*is_submitting}
                            />
                        </div>
                        <div class="field">
                            <label>{"Email *"}</label>
                            <input
                                type="email"
                                placeholder="you@company.com"
                                value={(*form).email.clone()}
                                oninput={on_email}
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>
                    <div class="field">
                        <label>{"Company"}</label>
                        <input
                            type="text"
                            placeholder="Your company name"
                            value={(*form).company.clone()}
                            oninput={on_company}
                            disabled={*is_submitting}
                        />
                    </div>
                    <div class="field">
                        <label>{"Message *"}</label>
                        <textarea
                            placeholder="How can we help?"
                            value={(*form).message.clone()}
                            oninput={on_message}
                            disabled={*is_submitting}
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={*is_submitting}>
                        { if *is_submitting { "Sending..." } else { "Send message" } }
                    </button>
                    <p class="required-note">{"* Required fields"}</p>
                </form>
            </div>
        </section>
    }
}
