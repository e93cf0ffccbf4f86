use gloo_timers::callback::Timeout;
use web_sys::window;
use yew::prelude::*;

pub const CONSENT_STORAGE_KEY: &str = "cookie_consent";
const CONSENT_ACCEPTED: &str = "accepted";
/// The banner waits this long after first paint before appearing.
const BANNER_DELAY_MS: u32 = 2_000;

/// Only an explicit "accepted" counts as a persisted decision; a dismissed
/// banner writes nothing and may come back on the next visit.
pub fn consent_already_given(stored: Option<String>) -> bool {
    stored.as_deref() == Some(CONSENT_ACCEPTED)
}

fn read_consent() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok())
        .flatten()
}

#[function_component(CookieConsent)]
pub fn cookie_consent() -> Html {
    let show_banner = use_state(|| false);
    let show_privacy_modal = use_state(|| false);

    // Arm the delayed banner only for visitors without a stored decision;
    // dropping the handle on unmount cancels a pending timer.
    {
        let show_banner = show_banner.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = if consent_already_given(read_consent()) {
                    None
                } else {
                    Some(Timeout::new(BANNER_DELAY_MS, move || show_banner.set(true)))
                };
                move || drop(timeout)
            },
            (),
        );
    }

    let accept = {
        let show_banner = show_banner.clone();
        Callback::from(move |_: MouseEvent| {
            // storage can be disabled; the banner still hides for the session
            if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
                let _ = storage.set_item(CONSENT_STORAGE_KEY, CONSENT_ACCEPTED);
            }
            show_banner.set(false);
        })
    };

    let dismiss = {
        let show_banner = show_banner.clone();
        Callback::from(move |_: MouseEvent| show_banner.set(false))
    };

    let open_privacy = {
        let show_privacy_modal = show_privacy_modal.clone();
        Callback::from(move |_: MouseEvent| show_privacy_modal.set(true))
    };

    let close_privacy = {
        let show_privacy_modal = show_privacy_modal.clone();
        Callback::from(move |_: MouseEvent| show_privacy_modal.set(false))
    };

    if !*show_banner && !*show_privacy_modal {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                    .consent-banner {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        z-index: 80;
                        padding: 1rem;
                    }
                    .consent-card {
                        max-width: 960px;
                        margin: 0 auto;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 1rem;
                        background: rgba(30, 30, 30, 0.95);
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        border-radius: 16px;
                        padding: 1.25rem 1.5rem;
                        backdrop-filter: blur(10px);
                        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.4);
                        color: #fff;
                    }
                    .consent-text {
                        flex: 1;
                        min-width: 240px;
                        font-size: 0.9rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .consent-text h3 { margin: 0 0 0.4rem; color: #fff; }
                    .consent-text p { margin: 0; }
                    .privacy-link {
                        background: none;
                        border: none;
                        padding: 0;
                        color: #7EB2FF;
                        text-decoration: underline;
                        cursor: pointer;
                        font: inherit;
                    }
                    .consent-buttons { display: flex; gap: 0.75rem; }
                    .consent-buttons button {
                        padding: 0.6rem 1.1rem;
                        border-radius: 8px;
                        cursor: pointer;
                    }
                    .dismiss-button {
                        background: none;
                        border: 1px solid rgba(255, 255, 255, 0.3);
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .accept-button {
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        border: none;
                        color: #fff;
                    }
                    .privacy-modal-overlay {
                        position: fixed;
                        inset: 0;
                        z-index: 90;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                        background: rgba(10, 10, 20, 0.7);
                    }
                    .privacy-modal {
                        max-width: 720px;
                        max-height: 85vh;
                        overflow-y: auto;
                        background: rgba(30, 30, 30, 0.97);
                        border: 1px solid rgba(30, 144, 255, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        color: rgba(255, 255, 255, 0.85);
                    }
                    .privacy-modal h2 { color: #fff; margin-top: 0; }
                    .privacy-modal h3 { color: #fff; }
                    .privacy-modal-close {
                        display: block;
                        margin: 1.5rem 0 0 auto;
                        padding: 0.6rem 1.5rem;
                        border-radius: 8px;
                        border: none;
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        color: #fff;
                        cursor: pointer;
                    }
                "#}
            </style>
            {
                if *show_banner {
                    html! {
                        <div class="consent-banner">
                            <div class="consent-card">
                                <div class="consent-text">
                                    <h3>{"🍪 Cookie consent"}</h3>
                                    <p>
                                        {"We use cookies to improve navigation and understand how \
                                          the site is used. By continuing you agree to our "}
                                        <button class="privacy-link" onclick={open_privacy.clone()}>
                                            {"Privacy Policy"}
                                        </button>
                                        {"."}
                                    </p>
                                </div>
                                <div class="consent-buttons">
                                    <button class="dismiss-button" onclick={dismiss}>
                                        {"Dismiss"}
                                    </button>
                                    <button class="accept-button" onclick={accept}>
                                        {"Accept cookies"}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if *show_privacy_modal {
                    html! {
                        <div class="privacy-modal-overlay" onclick={close_privacy.clone()}>
                            <div class="privacy-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                                <h2>{"Privacy Policy"}</h2>
                                <h3>{"1. What we collect"}</h3>
                                <p>
                                    {"Aurora Labs collects the information you give us through the \
                                      contact forms (name, email, WhatsApp number, company) and \
                                      basic navigation data used to keep the site working well."}
                                </p>
                                <h3>{"2. How we use it"}</h3>
                                <p>
                                    {"Form submissions are used only to answer your request. We do \
                                      not sell or share personal data with third parties beyond the \
                                      email provider that delivers your message to us."}
                                </p>
                                <h3>{"3. Cookies"}</h3>
                                <p>
                                    {"Cookies remember your preferences and help us understand how \
                                      visitors use the site. You can control cookies through your \
                                      browser settings."}
                                </p>
                                <h3>{"4. Your rights"}</h3>
                                <p>
                                    {"You can ask us to show, correct or delete the personal data \
                                      we hold about you at any time: write to hello@auroralabs.dev."}
                                </p>
                                <button class="privacy-modal-close" onclick={close_privacy}>
                                    {"Got it"}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_explicit_accept_counts() {
        assert!(consent_already_given(Some("accepted".to_string())));
        assert!(!consent_already_given(Some("dismissed".to_string())));
        assert!(!consent_already_given(Some(String::new())));
        assert!(!consent_already_given(None));
    }
}
