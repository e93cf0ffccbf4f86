use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::contact_form::ContactSection;
use crate::components::notification::{Toast, ToastView};
use crate::components::start_now_modal::StartNowModal;
use crate::Route;

const WHATSAPP_LINK: &str =
    "https://wa.me/5511987654321?text=Hi! I would like to know more about Aurora Labs.";

struct Service {
    title: &'static str,
    description: &'static str,
    bullets: [&'static str; 3],
    prefill: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        description: "Web platforms and internal tools built to last, from the first sketch to production.",
        bullets: ["Product-grade web apps", "APIs and integrations", "Performance and accessibility"],
        prefill: "Hi! I would like to talk about building a web platform with Aurora Labs.",
    },
    Service {
        title: "AI Agents",
        description: "Assistants and automations that plug into the systems your team already uses.",
        bullets: ["Customer-facing assistants", "Workflow automation", "Evaluation and guardrails"],
        prefill: "Hi! I am interested in putting AI agents to work in my company.",
    },
    Service {
        title: "Tech Consulting",
        description: "A senior outside eye on architecture, hiring and roadmap when the stakes are high.",
        bullets: ["Architecture reviews", "Team and process audits", "Technology roadmaps"],
        prefill: "Hi! I would like a technology strategy review with Aurora Labs.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let toast = use_state(|| None::<Toast>);
    let start_now_open = use_state(|| false);
    let prefilled_message = use_state(|| None::<String>);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_notify = {
        let toast = toast.clone();
        Callback::from(move |t: Toast| toast.set(Some(t)))
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_| toast.set(None))
    };

    let open_start_now = {
        let start_now_open = start_now_open.clone();
        let prefilled_message = prefilled_message.clone();
        Callback::from(move |_: MouseEvent| {
            prefilled_message.set(None);
            start_now_open.set(true);
        })
    };

    let open_for_service = {
        let start_now_open = start_now_open.clone();
        let prefilled_message = prefilled_message.clone();
        move |text: &'static str| {
            let start_now_open = start_now_open.clone();
            let prefilled_message = prefilled_message.clone();
            Callback::from(move |_: MouseEvent| {
                prefilled_message.set(Some(text.to_string()));
                start_now_open.set(true);
            })
        }
    };

    let close_start_now = {
        let start_now_open = start_now_open.clone();
        Callback::from(move |_| start_now_open.set(false))
    };

    let open_whatsapp = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(WHATSAPP_LINK, "_blank");
        }
    });

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #1a1a1a, #16213e);
                        color: #fff;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .top-bar {
                        position: sticky;
                        top: 0;
                        z-index: 40;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                        background: rgba(26, 26, 26, 0.85);
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .top-links { display: flex; gap: 1.5rem; align-items: center; }
                    .top-links a {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                    }
                    .top-links a:hover { color: #fff; }
                    .whatsapp-button {
                        background: #25D366;
                        border: none;
                        border-radius: 8px;
                        color: #fff;
                        padding: 0.55rem 1rem;
                        cursor: pointer;
                    }
                    .hero {
                        text-align: center;
                        padding: 7rem 2rem 5rem;
                    }
                    .hero h1 {
                        font-size: 3rem;
                        margin: 0 0 1rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .hero p {
                        max-width: 640px;
                        margin: 0 auto 2rem;
                        color: rgba(255, 255, 255, 0.75);
                        font-size: 1.15rem;
                    }
                    .hero-cta {
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        border: none;
                        border-radius: 10px;
                        color: #fff;
                        font-size: 1.05rem;
                        padding: 0.9rem 2.2rem;
                        cursor: pointer;
                    }
                    .services-section { padding: 4rem 2rem; }
                    .services-section h2 { text-align: center; font-size: 2rem; }
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        max-width: 1100px;
                        margin: 2.5rem auto 0;
                    }
                    .service-card {
                        display: flex;
                        flex-direction: column;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 16px;
                        padding: 1.75rem;
                    }
                    .service-card h3 { margin-top: 0; }
                    .service-card p { color: rgba(255, 255, 255, 0.7); }
                    .service-card ul {
                        margin: 0 0 1.5rem;
                        padding-left: 1.2rem;
                        color: rgba(255, 255, 255, 0.7);
                        flex: 1;
                    }
                    .service-cta {
                        background: none;
                        border: 1px solid #7EB2FF;
                        border-radius: 8px;
                        color: #7EB2FF;
                        padding: 0.6rem 1rem;
                        cursor: pointer;
                    }
                    .service-cta:hover {
                        background: rgba(126, 178, 255, 0.1);
                    }
                    .contact-section { padding: 4rem 2rem 5rem; }
                    .contact-inner { max-width: 640px; margin: 0 auto; }
                    .contact-inner h2 { font-size: 2rem; margin-bottom: 0.5rem; }
                    .contact-lead { color: rgba(255, 255, 255, 0.7); margin-bottom: 2rem; }
                    .contact-inner .field { margin-bottom: 1rem; }
                    .contact-inner .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    @media (max-width: 640px) {
                        .contact-inner .field-row { grid-template-columns: 1fr; }
                    }
                    .contact-inner label {
                        display: block;
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.8);
                        margin-bottom: 0.35rem;
                    }
                    .contact-inner input,
                    .contact-inner textarea {
                        width: 100%;
                        box-sizing: border-box;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 8px;
                        padding: 0.6rem 0.75rem;
                        color: #fff;
                    }
                    .contact-inner textarea { min-height: 8rem; }
                    .submit-button {
                        width: 100%;
                        background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                        border: none;
                        border-radius: 8px;
                        color: #fff;
                        font-size: 1rem;
                        padding: 0.8rem;
                        cursor: pointer;
                    }
                    .submit-button:disabled { opacity: 0.6; cursor: not-allowed; }
                    .required-note {
                        text-align: center;
                        font-size: 0.8rem;
                        color: rgba(255, 255, 255, 0.5);
                        margin-top: 1rem;
                    }
                    .footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.08);
                        padding: 2rem;
                        text-align: center;
                        color: rgba(255, 255, 255, 0.5);
                        font-size: 0.9rem;
                    }
                    .footer a { color: #7EB2FF; text-decoration: none; }
                "#}
            </style>

            <nav class="top-bar">
                <span class="logo">{"Aurora Labs"}</span>
                <div class="top-links">
                    <a href="#services">{"Services"}</a>
                    <a href="#contact">{"Contact"}</a>
                    <button class="whatsapp-button" onclick={open_whatsapp}>{"WhatsApp"}</button>
                </div>
            </nav>

            <header class="hero">
                <h1>{"Technology that moves your business"}</h1>
                <p>
                    {"Aurora Labs designs and builds web platforms, AI agents and technology \
                      strategy for companies that want to ship, not just plan."}
                </p>
                <button class="hero-cta" onclick={open_start_now}>{"Start Now"}</button>
            </header>

            <section id="services" class="services-section">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    {
                        for SERVICES.iter().map(|service| {
                            let onclick = open_for_service(service.prefill);
                            html! {
                                <div class="service-card">
                                    <h3>{ service.title }</h3>
                                    <p>{ service.description }</p>
                                    <ul>
                                        { for service.bullets.iter().map(|b| html! { <li>{ *b }</li> }) }
                                    </ul>
                                    <button class="service-cta" {onclick}>{"Start Now"}</button>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <ContactSection on_notify={on_notify.clone()} />

            <footer class="footer">
                <p>{"© 2025 Aurora Labs. All rights reserved."}</p>
                <p>
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                </p>
            </footer>

            <StartNowModal
                is_open={*start_now_open}
                on_close={close_start_now}
                prefilled_message={(*prefilled_message).clone()}
                on_notify={on_notify}
            />

            {
                if let Some(current) = (*toast).clone() {
                    html! { <ToastView toast={current} on_dismiss={dismiss_toast} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
