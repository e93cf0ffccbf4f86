// EmailJS routing for the two lead-capture templates. The public key is a
// client-side credential, safe to ship in the bundle.
pub const EMAILJS_SERVICE_ID: &str = "service_kd82mfa";
pub const EMAILJS_TEMPLATE_CONTACT: &str = "template_contact";
pub const EMAILJS_TEMPLATE_START_NOW: &str = "template_start_now";
pub const EMAILJS_PUBLIC_KEY: &str = "pW3kD-qLr8vXn2Jt4";
pub const CONTACT_DESTINATION: &str = "hello@auroralabs.dev";

#[cfg(debug_assertions)]
pub fn get_emailjs_url() -> &'static str {
    "http://localhost:3001"  // Local provider stub when running trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_emailjs_url() -> &'static str {
    "https://api.emailjs.com"
}

#[derive(Clone, Debug, PartialEq)]
pub struct MailerConfig {
    pub api_base: String,
    pub service_id: String,
    pub contact_template: String,
    pub start_now_template: String,
    pub public_key: String,
    pub to_email: String,
}

impl MailerConfig {
    pub fn site() -> Self {
        Self {
            api_base: get_emailjs_url().to_string(),
            service_id: EMAILJS_SERVICE_ID.to_string(),
            contact_template: EMAILJS_TEMPLATE_CONTACT.to_string(),
            start_now_template: EMAILJS_TEMPLATE_START_NOW.to_string(),
            public_key: EMAILJS_PUBLIC_KEY.to_string(),
            to_email: CONTACT_DESTINATION.to_string(),
        }
    }
}
