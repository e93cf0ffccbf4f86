#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact,
    StartNow,
}

impl SubmissionKind {
    pub fn subject(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "Aurora Labs Website Contact",
            SubmissionKind::StartNow => "Aurora Labs Website Contact - Start Now",
        }
    }
}

/// One form field and the provider template parameters it is sent as.
pub struct FieldSpec {
    pub key: &'static str,
    pub params: &'static [&'static str],
    pub required: bool,
}

pub trait LeadForm: Clone + Default + PartialEq + 'static {
    const KIND: SubmissionKind;
    const FIELDS: &'static [FieldSpec];
    /// Shown in the missing-fields notice, e.g. "name, email and message".
    const REQUIRED_HINT: &'static str;

    fn value(&self, key: &str) -> &str;

    fn email(&self) -> &str {
        self.value("email")
    }

    fn whatsapp(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl LeadForm for ContactForm {
    const KIND: SubmissionKind = SubmissionKind::Contact;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", params: &["from_name", "user_name"], required: true },
        FieldSpec { key: "email", params: &["from_email", "user_email"], required: true },
        FieldSpec { key: "company", params: &["company", "user_company"], required: false },
        FieldSpec { key: "message", params: &["message", "user_message"], required: true },
    ];
    const REQUIRED_HINT: &'static str = "name, email and message";

    fn value(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "email" => &self.email,
            "company" => &self.company,
            "message" => &self.message,
            _ => "",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompanySize {
    #[default]
    Unset,
    S1To10,
    S11To50,
    S51To200,
    S201To500,
    S501Plus,
}

impl CompanySize {
    pub const OPTIONS: &'static [CompanySize] = &[
        CompanySize::S1To10,
        CompanySize::S11To50,
        CompanySize::S51To200,
        CompanySize::S201To500,
        CompanySize::S501Plus,
    ];

    pub fn value(self) -> &'static str {
        match self {
            CompanySize::Unset => "",
            CompanySize::S1To10 => "1-10",
            CompanySize::S11To50 => "11-50",
            CompanySize::S51To200 => "51-200",
            CompanySize::S201To500 => "201-500",
            CompanySize::S501Plus => "501+",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "1-10" => CompanySize::S1To10,
            "11-50" => CompanySize::S11To50,
            "51-200" => CompanySize::S51To200,
            "201-500" => CompanySize::S201To500,
            "501+" => CompanySize::S501Plus,
            _ => CompanySize::Unset,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompanySize::Unset => "Select a size",
            CompanySize::S1To10 => "1-10 employees",
            CompanySize::S11To50 => "11-50 employees",
            CompanySize::S51To200 => "51-200 employees",
            CompanySize::S201To500 => "201-500 employees",
            CompanySize::S501Plus => "501+ employees",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StartNowForm {
    pub name: String,
    pub company: String,
    pub company_size: CompanySize,
    pub position: String,
    pub email: String,
    /// Stored masked; the mask is the canonical representation.
    pub whatsapp: String,
    pub message: String,
}

impl LeadForm for StartNowForm {
    const KIND: SubmissionKind = SubmissionKind::StartNow;
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec { key: "name", params: &["from_name", "user_name"], required: true },
        FieldSpec { key: "company", params: &["company", "user_company"], required: false },
        FieldSpec {
            key: "company_size",
            params: &["company_size", "user_company_size"],
            required: false,
        },
        FieldSpec { key: "position", params: &["position", "user_position"], required: false },
        FieldSpec { key: "email", params: &["from_email", "user_email"], required: true },
        FieldSpec { key: "whatsapp", params: &["whatsapp", "user_whatsapp"], required: true },
        FieldSpec { key: "message", params: &["message", "user_message"], required: true },
    ];
    const REQUIRED_HINT: &'static str = "name, email, WhatsApp and message";

    fn value(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "company" => &self.company,
            "company_size" => self.company_size.value(),
            "position" => &self.position,
            "email" => &self.email,
            "whatsapp" => &self.whatsapp,
            "message" => &self.message,
            _ => "",
        }
    }

    fn whatsapp(&self) -> Option<&str> {
        Some(&self.whatsapp)
    }
}

/// Brazilian display mask for the WhatsApp field, applied on every input
/// event. Strips non-digits, keeps at most 11, re-inserts punctuation.
pub fn format_whatsapp(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(11).collect();
    match digits.len() {
        0..=2 => digits,
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Shape screen only: something@something.something, no whitespace. Kept as
/// lax as the site has always been (consecutive dots pass, quoted local
/// parts do not); deliverability is the provider's problem.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // a dot strictly inside the domain part
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn is_valid_phone(s: &str) -> bool {
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    digits == 10 || digits == 11
}

pub fn has_required_fields<F: LeadForm>(form: &F) -> bool {
    F::FIELDS
        .iter()
        .filter(|field| field.required)
        .all(|field| !form.value(field.key).trim().is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingRequired { hint: &'static str },
    InvalidEmail,
    InvalidWhatsapp,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { .. } => "Required fields",
            ValidationError::InvalidEmail => "Invalid email",
            ValidationError::InvalidWhatsapp => "Invalid WhatsApp number",
        }
    }

    pub fn description(&self) -> String {
        match self {
            ValidationError::MissingRequired { hint } => {
                format!("Please fill in {}.", hint)
            }
            ValidationError::InvalidEmail => "Please enter a valid email address.".to_string(),
            ValidationError::InvalidWhatsapp => {
                "Please enter a valid WhatsApp number in the (xx) xxxx-xxxx format.".to_string()
            }
        }
    }
}

/// Gate in front of the gateway: required fields, then email shape, then
/// WhatsApp shape for the forms that carry one. First failure wins.
pub fn validate<F: LeadForm>(form: &F) -> Result<(), ValidationError> {
    if !has_required_fields(form) {
        return Err(ValidationError::MissingRequired { hint: F::REQUIRED_HINT });
    }
    if !is_valid_email(form.email()) {
        return Err(ValidationError::InvalidEmail);
    }
    if let Some(whatsapp) = form.whatsapp() {
        if !is_valid_phone(whatsapp) {
            return Err(ValidationError::InvalidWhatsapp);
        }
    }
    Ok(())
}

/// A non-empty prefill overwrites the message field only; everything else
/// is left alone.
pub fn apply_prefill(form: &mut StartNowForm, prefill: Option<&str>) {
    if let Some(text) = prefill {
        if !text.is_empty() {
            form.message = text.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_start_now() -> StartNowForm {
        StartNowForm {
            name: "Ana Souza".to_string(),
            company: "Acme Ltda".to_string(),
            company_size: CompanySize::S11To50,
            position: "CTO".to_string(),
            email: "ana@acme.com.br".to_string(),
            whatsapp: "(11) 91234-5678".to_string(),
            message: "We need help with an internal platform.".to_string(),
        }
    }

    #[test]
    fn mask_grows_with_the_digits() {
        assert_eq!(format_whatsapp(""), "");
        assert_eq!(format_whatsapp("1"), "1");
        assert_eq!(format_whatsapp("11"), "11");
        assert_eq!(format_whatsapp("119"), "(11) 9");
        assert_eq!(format_whatsapp("119123"), "(11) 9123");
        assert_eq!(format_whatsapp("1191234"), "(11) 9123-4");
        assert_eq!(format_whatsapp("1191234567"), "(11) 9123-4567");
        assert_eq!(format_whatsapp("11912345678"), "(11) 91234-5678");
    }

    #[test]
    fn mask_drops_everything_past_eleven_digits() {
        assert_eq!(format_whatsapp("119123456789999"), "(11) 91234-5678");
    }

    #[test]
    fn mask_ignores_punctuation_and_letters() {
        assert_eq!(format_whatsapp("+55 (11) 91234-5678"), "(55) 11912-3456");
        assert_eq!(format_whatsapp("abc"), "");
    }

    #[test]
    fn mask_is_total_and_bounds_digit_count() {
        for len in 0..=15 {
            let input: String = "1234567890123456"[..len].to_string();
            let masked = format_whatsapp(&input);
            let digits = masked.chars().filter(|c| c.is_ascii_digit()).count();
            assert_eq!(digits, len.min(11), "input {:?} -> {:?}", input, masked);
        }
    }

    #[test]
    fn mask_is_idempotent() {
        for raw in ["", "1", "11", "119", "119123", "1191234567", "11912345678"] {
            let once = format_whatsapp(raw);
            assert_eq!(format_whatsapp(&once), once);
        }
    }

    #[test]
    fn phone_counts_digits_only() {
        assert!(is_valid_phone("1191234567"));
        assert!(is_valid_phone("(11) 9123-4567"));
        assert!(is_valid_phone("(11) 91234-5678"));
        assert!(!is_valid_phone("123"));
        assert!(!is_valid_phone("119123456"));
        assert!(!is_valid_phone("119123456789"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn email_shape_screen() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ana.souza@acme.com.br"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.co"));
        // intentionally lax
        assert!(is_valid_email("a@b..co"));
    }

    #[test]
    fn empty_contact_form_fails_on_required_fields() {
        let err = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(err, ValidationError::MissingRequired { hint: ContactForm::REQUIRED_HINT });
        assert_eq!(err.description(), "Please fill in name, email and message.");
    }

    #[test]
    fn whitespace_only_does_not_count_as_filled() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: "a@b.co".to_string(),
            company: String::new(),
            message: "hello".to_string(),
        };
        assert!(!has_required_fields(&form));
    }

    #[test]
    fn company_stays_optional() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "a@b.co".to_string(),
            company: String::new(),
            message: "hello".to_string(),
        };
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn missing_fields_reported_before_bad_email() {
        let form = ContactForm {
            name: String::new(),
            email: "not-an-email".to_string(),
            company: String::new(),
            message: "hello".to_string(),
        };
        assert!(matches!(
            validate(&form),
            Err(ValidationError::MissingRequired { .. })
        ));
    }

    #[test]
    fn contact_form_never_checks_whatsapp() {
        let form = ContactForm {
            name: "Ana".to_string(),
            email: "a@b.co".to_string(),
            company: String::new(),
            message: "hello".to_string(),
        };
        assert!(form.whatsapp().is_none());
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn start_now_rejects_short_whatsapp() {
        let form = StartNowForm { whatsapp: "123".to_string(), ..filled_start_now() };
        assert_eq!(validate(&form), Err(ValidationError::InvalidWhatsapp));
    }

    #[test]
    fn start_now_accepts_masked_whatsapp() {
        assert_eq!(validate(&filled_start_now()), Ok(()));
    }

    #[test]
    fn start_now_required_hint_names_whatsapp() {
        let err = validate(&StartNowForm::default()).unwrap_err();
        assert_eq!(err.description(), "Please fill in name, email, WhatsApp and message.");
    }

    #[test]
    fn company_size_round_trips_through_select_values() {
        for size in CompanySize::OPTIONS {
            assert_eq!(CompanySize::from_value(size.value()), *size);
        }
        assert_eq!(CompanySize::from_value(""), CompanySize::Unset);
        assert_eq!(CompanySize::from_value("garbage"), CompanySize::Unset);
    }

    #[test]
    fn prefill_touches_only_the_message() {
        let mut form = StartNowForm::default();
        apply_prefill(&mut form, Some("Interested in AI"));
        assert_eq!(form.message, "Interested in AI");
        assert_eq!(form, StartNowForm { message: "Interested in AI".to_string(), ..Default::default() });
    }

    #[test]
    fn empty_prefill_leaves_the_message_alone() {
        let mut form = StartNowForm { message: "typed by hand".to_string(), ..Default::default() };
        apply_prefill(&mut form, None);
        apply_prefill(&mut form, Some(""));
        assert_eq!(form.message, "typed by hand");
    }
}
