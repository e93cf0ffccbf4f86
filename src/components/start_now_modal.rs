use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::Toast;
use crate::emailer::Mailer;
use crate::forms::{self, validate, CompanySize, StartNowForm};

#[derive(Properties, PartialEq)]
pub struct StartNowModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub prefilled_message: Option<String>,
    pub on_notify: Callback<Toast>,
}

#[function_component(StartNowModal)]
pub fn start_now_modal(props: &StartNowModalProps) -> Html {
    let form = use_state(StartNowForm::default);
    let is_submitting = use_state(|| false);

    // Fill the message field when the modal opens from a service CTA; the
    // other fields are left exactly as they are.
    {
        let form = form.clone();
        use_effect_with_deps(
            move |(is_open, prefill): &(bool, Option<String>)| {
                if *is_open {
                    let mut next = (*form).clone();
                    forms::apply_prefill(&mut next, prefill.as_deref());
                    if next != *form {
                        form.set(next);
                    }
                }
                || ()
            },
            (props.is_open, props.prefilled_message.clone()),
        );
    }

    // Cancel, the header close button and a backdrop click all come through
    // here: wipe the form, then tell the page to close us.
    let handle_close = {
        let form = form.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            form.set(StartNowForm::default());
            on_close.emit(());
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
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
    let on_company_size = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.company_size = CompanySize::from_value(&select.value());
            form.set(next);
        })
    };
    let on_position = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.position = input.value();
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
    let on_whatsapp = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.whatsapp = forms::format_whatsapp(&input.value());
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
        let on_close = props.on_close.clone();

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
            let on_close = on_close.clone();
            is_submitting.set(true);

            spawn_local(async move {
                let report = Mailer::site().send(&snapshot).await;
                if report.success {
                    form.set(StartNowForm::default());
                    on_notify.emit(Toast::success(
                        "Request sent!",
                        "We received your request and will reach out shortly to get your \
                         project moving.",
                    ));
                    on_close.emit(());
                } else {
                    on_notify.emit(Toast::error(
                        "Could not send your request",
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

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="modal-overlay" onclick={handle_close.clone()}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(10, 10, 20, 0.7);
                        backdrop-filter: blur(6px);
                    }
                    .modal-content {
                        position: relative;
                        width: 100%;
                        max-width: 640px;
                        max-height: 90vh;
                        overflow-y: auto;
                        background: rgba(30, 30, 30, 0.95);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2.5rem;
                        color: #fff;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.6);
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    .modal-close:hover { color: #fff; }
                    .modal-content h2 {
                        text-align: center;
                        margin: 0 0 0.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .modal-subtitle {
                        text-align: center;
                        color: rgba(255, 255, 255, 0.7);
                        margin-bottom: 1.5rem;
                    }
                    .modal-content .field { margin-bottom: 1rem; }
                    .modal-content .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    @media (max-width: 640px) {
                        .modal-content .field-row { grid-template-columns: 1fr; }
                    }
                    .modal-content label {
                        display: block;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.35rem;
                    }
                    .modal-content input,
                    .modal-content select,
                    .modal-content textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.6rem 0.75rem;
                        color: #fff;
                    }
                    .modal-content textarea { min-height: 8rem; }
                    .field-hint {
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.5);
                        margin: 0.25rem 0 0;
                    }
                    .modal-buttons {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .modal-buttons button {
                        flex: 1;
                        padding: 0.75rem;
                        border-radius: 8px;
                        cursor: pointer;
                    }
                    .cancel-button {
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: #fff;
                    }
                    .start-button {
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        border: none;
                        color: #fff;
                    }
                    .modal-buttons button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .required-note {
                        text-align: center;
                        font-size: 0.8rem;
                        color: rgba(255, 255, 255, 0.5);
                        margin-top: 1rem;
                    }
                "#}
            </style>
            <div class="modal-content" onclick={keep_open}>
                <button class="modal-close" onclick={handle_close.clone()}>{"✕"}</button>
                <h2>{"Start Now"}</h2>
                <p class="modal-subtitle">
                    {"Tell us about your project and we will turn the idea into a plan."}
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
                            <label>{"Company"}</label>
                            <input
                                type="text"
                                placeholder="Your company name"
                                value={(*form).company.clone()}
                                oninput={on_company}
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label>{"Company size"}</label>
                            <select onchange={on_company_size} disabled={*is_submitting}>
                                <option
                                    value=""
                                    selected={(*form).company_size == CompanySize::Unset}
                                >
                                    { CompanySize::Unset.label() }
                                </option>
                                {
                                    for CompanySize::OPTIONS.iter().map(|size| html! {
                                        <option
                                            value={size.value()}
                                            selected={(*form).company_size == *size}
                                        >
                                            { size.label() }
                                        </option>
                                    })
                                }
                            </select>
                        </div>
                        <div class="field">
                            <label>{"Position"}</label>
                            <input
                                type="text"
                                placeholder="Your role at the company"
                                value={(*form).position.clone()}
                                oninput={on_position}
                                disabled={*is_submitting}
                            />
                        </div>
                    </div>
                    <div class="field-row">
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
                        <div class="field">
                            <label>{"WhatsApp *"}</label>
                            <input
                                type="tel"
                                placeholder="(11) 99999-9999"
                                maxlength="15"
                                value={(*form).whatsapp.clone()}
                                oninput={on_whatsapp}
                                disabled={*is_submitting}
                            />
                            <p class="field-hint">{"Format: (xx) xxxx-xxxx or (xx) xxxxx-xxxx"}</p>
                        </div>
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
                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="cancel-button"
                            onclick={handle_close}
                            disabled={*is_submitting}
                        >
                            {"Cancel"}
                        </button>
                        <button type="submit" class="start-button" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Start Now" } }
                        </button>
                    </div>
                    <p class="required-note">{"* Required fields"}</p>
                </form>
            </div>
        </div>
    }
}
