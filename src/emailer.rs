use gloo_console::log;
use gloo_net::http::Request;
use serde_json::{json, Map, Value};

use crate::config::MailerConfig;
use crate::forms::{LeadForm, SubmissionKind};

/// What a template param receives when an optional field was left blank.
const EMPTY_FIELD_PLACEHOLDER: &str = "Not provided";

#[derive(Clone, Debug, PartialEq)]
pub struct SendReport {
    pub success: bool,
    pub error: Option<String>,
}

impl SendReport {
    fn ok() -> Self {
        Self { success: true, error: None }
    }

    fn failed(error: String) -> Self {
        Self { success: false, error: Some(error) }
    }
}

pub struct Mailer {
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self { config }
    }

    pub fn site() -> Self {
        Self::new(MailerConfig::site())
    }

    fn template_id(&self, kind: SubmissionKind) -> &str {
        match kind {
            SubmissionKind::Contact => &self.config.contact_template,
            SubmissionKind::StartNow => &self.config.start_now_template,
        }
    }

    // Every schema field goes out under each of its provider names, so both
    // template naming conventions keep working; routing params come last.
    fn template_params<F: LeadForm>(&self, form: &F) -> Map<String, Value> {
        let mut params = Map::new();
        for field in F::FIELDS {
            let raw = form.value(field.key);
            let value = if raw.trim().is_empty() && !field.required {
                EMPTY_FIELD_PLACEHOLDER
            } else {
                raw
            };
            for name in field.params {
                params.insert((*name).to_string(), Value::String(value.to_string()));
            }
        }
        params.insert("to_email".to_string(), Value::String(self.config.to_email.clone()));
        params.insert("reply_to".to_string(), Value::String(form.email().to_string()));
        params.insert("subject".to_string(), Value::String(F::KIND.subject().to_string()));
        params
    }

    /// One attempt, no retry, no timeout beyond the transport's own. Every
    /// outcome comes back as a `SendReport`.
    pub async fn send<F: LeadForm>(&self, form: &F) -> SendReport {
        let params = self.template_params(form);
        let body = json!({
            "service_id": self.config.service_id,
            "template_id": self.template_id(F::KIND),
            "user_id": self.config.public_key,
            "template_params": params,
        });

        log!(
            "emailer: sending",
            F::KIND.subject(),
            serde_json::to_string(&params).unwrap_or_default()
        );

        let request = match Request::post(&format!("{}/api/v1.0/email/send", self.config.api_base))
            .json(&body)
        {
            Ok(request) => request,
            Err(e) => {
                log!("emailer: failed to build request:", e.to_string());
                return SendReport::failed(format!("Request failed: {}", e));
            }
        };

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                log!("emailer: provider response", status, text.clone());
                if status == 200 {
                    SendReport::ok()
                } else {
                    SendReport::failed(describe_provider_error(status, &text))
                }
            }
            Err(e) => {
                log!("emailer: network error:", e.to_string());
                SendReport::failed(e.to_string())
            }
        }
    }
}

// Message selection only; nothing here triggers a retry.
fn describe_provider_error(status: u16, body: &str) -> String {
    match status {
        422 => "The email template is misconfigured at the provider: check that the \
                template's \"To Email\" field is set."
            .to_string(),
        400 => "The email provider rejected the request payload.".to_string(),
        401 => "The email provider API key is not valid.".to_string(),
        404 => "The email service or template was not found.".to_string(),
        _ if !body.trim().is_empty() => format!("Email provider error: {}", body.trim()),
        _ => "Unknown error while sending the email.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{CompanySize, ContactForm, StartNowForm};

    fn test_mailer() -> Mailer {
        Mailer::new(MailerConfig {
            api_base: "http://provider.test".to_string(),
            service_id: "service_test".to_string(),
            contact_template: "template_contact".to_string(),
            start_now_template: "template_start_now".to_string(),
            public_key: "pk_test".to_string(),
            to_email: "inbox@example.com".to_string(),
        })
    }

    fn param(params: &Map<String, Value>, key: &str) -> String {
        params
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("missing param {:?}", key))
            .to_string()
    }

    #[test]
    fn contact_fields_go_out_under_both_naming_conventions() {
        let form = ContactForm {
            name: "Ana Souza".to_string(),
            email: "ana@acme.com.br".to_string(),
            company: "Acme Ltda".to_string(),
            message: "We need a platform.".to_string(),
        };
        let params = test_mailer().template_params(&form);

        assert_eq!(param(&params, "from_name"), "Ana Souza");
        assert_eq!(param(&params, "user_name"), "Ana Souza");
        assert_eq!(param(&params, "from_email"), "ana@acme.com.br");
        assert_eq!(param(&params, "user_email"), "ana@acme.com.br");
        assert_eq!(param(&params, "company"), "Acme Ltda");
        assert_eq!(param(&params, "user_company"), "Acme Ltda");
        assert_eq!(param(&params, "message"), "We need a platform.");
        assert_eq!(param(&params, "user_message"), "We need a platform.");
    }

    #[test]
    fn routing_params_are_fixed_except_reply_to() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "ana@acme.com.br".to_string(),
            company: String::new(),
            message: "hi".to_string(),
        };
        let params = test_mailer().template_params(&form);

        assert_eq!(param(&params, "to_email"), "inbox@example.com");
        assert_eq!(param(&params, "reply_to"), "ana@acme.com.br");
        assert_eq!(param(&params, "subject"), "Aurora Labs Website Contact");
    }

    #[test]
    fn blank_optional_fields_become_placeholders() {
        let form = StartNowForm {
            name: "Ana".to_string(),
            email: "ana@acme.com.br".to_string(),
            whatsapp: "(11) 91234-5678".to_string(),
            message: "hi".to_string(),
            ..Default::default()
        };
        let params = test_mailer().template_params(&form);

        assert_eq!(param(&params, "company"), "Not provided");
        assert_eq!(param(&params, "user_company"), "Not provided");
        assert_eq!(param(&params, "company_size"), "Not provided");
        assert_eq!(param(&params, "position"), "Not provided");
        // required fields never get the placeholder
        assert_eq!(param(&params, "whatsapp"), "(11) 91234-5678");
    }

    #[test]
    fn start_now_params_carry_the_intake_extras() {
        let form = StartNowForm {
            name: "Ana".to_string(),
            company: "Acme".to_string(),
            company_size: CompanySize::S51To200,
            position: "CTO".to_string(),
            email: "ana@acme.com.br".to_string(),
            whatsapp: "(11) 91234-5678".to_string(),
            message: "hi".to_string(),
        };
        let params = test_mailer().template_params(&form);

        assert_eq!(param(&params, "company_size"), "51-200");
        assert_eq!(param(&params, "user_company_size"), "51-200");
        assert_eq!(param(&params, "position"), "CTO");
        assert_eq!(param(&params, "subject"), "Aurora Labs Website Contact - Start Now");
    }

    #[test]
    fn template_id_follows_the_submission_kind() {
        let mailer = test_mailer();
        assert_eq!(mailer.template_id(SubmissionKind::Contact), "template_contact");
        assert_eq!(mailer.template_id(SubmissionKind::StartNow), "template_start_now");
    }

    #[test]
    fn provider_errors_map_to_distinct_messages() {
        let unprocessable = describe_provider_error(422, "");
        assert!(unprocessable.contains("template"));
        assert!(unprocessable.contains("To Email"));

        let bad_payload = describe_provider_error(400, "");
        let bad_key = describe_provider_error(401, "");
        let not_found = describe_provider_error(404, "");
        assert!(bad_payload.contains("payload"));
        assert!(bad_key.contains("key"));
        assert!(not_found.contains("not found"));
        assert_ne!(bad_payload, bad_key);
        assert_ne!(bad_key, not_found);
        assert_ne!(bad_payload, not_found);
    }

    #[test]
    fn provider_body_is_quoted_when_the_status_is_unclassified() {
        assert_eq!(
            describe_provider_error(503, "The service is busy"),
            "Email provider error: The service is busy"
        );
        assert_eq!(describe_provider_error(503, "  "), "Unknown error while sending the email.");
    }
}
