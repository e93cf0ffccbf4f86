use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-page">
            <style>
                {r#"
                    .legal-page {
                        min-height: 100vh;
                        background: linear-gradient(to bottom, #1a1a1a, #16213e);
                        color: rgba(255, 255, 255, 0.85);
                        padding: 4rem 2rem;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    .legal-content {
                        max-width: 760px;
                        margin: 0 auto;
                    }
                    .legal-content h1 { color: #fff; }
                    .legal-content h2 { color: #fff; margin-top: 2rem; }
                    .legal-content a { color: #7EB2FF; }
                    .back-link { display: inline-block; margin-bottom: 2rem; }
                "#}
            </style>
            <div class="legal-content">
                <Link<Route> to={Route::Home} classes="back-link">{"← Back to the site"}</Link<Route>>
                <h1>{"Privacy Policy"}</h1>

                <h2>{"1. Information we collect"}</h2>
                <p>{"Aurora Labs collects information when you contact us through the site:"}</p>
                <ul>
                    <li>{"Contact details (name, email, WhatsApp number, company)"}</li>
                    <li>{"Anything you write in the message fields"}</li>
                    <li>{"Basic navigation data and cookies used to keep the site working"}</li>
                </ul>

                <h2>{"2. How we use your information"}</h2>
                <ul>
                    <li>{"To answer your request and provide support"}</li>
                    <li>{"To improve our services and the site experience"}</li>
                    <li>{"To comply with legal obligations"}</li>
                </ul>

                <h2>{"3. Cookies"}</h2>
                <p>
                    {"Cookies are small text files stored on your device that remember your \
                      preferences and help us understand how the site is used. You can control \
                      them through your browser settings."}
                </p>

                <h2>{"4. Sharing"}</h2>
                <p>
                    {"We do not sell or rent personal data. Form submissions pass through the \
                      transactional email provider that delivers your message to our inbox, under \
                      confidentiality obligations; beyond that we only share data when the law \
                      requires it."}
                </p>

                <h2>{"5. Your rights"}</h2>
                <p>
                    {"You may ask to access, correct or delete the personal data we hold about \
                      you, or withdraw consent at any time. Write to "}
                    <a href="mailto:hello@auroralabs.dev">{"hello@auroralabs.dev"}</a>
                    {" and we will take care of it."}
                </p>

                <h2>{"6. Contact"}</h2>
                <p>
                    {"Questions about this policy: hello@auroralabs.dev or WhatsApp \
                      (11) 98765-4321."}
                </p>

                <p><em>{"Last updated: July 2025."}</em></p>
            </div>
        </div>
    }
}
