//! Lead-capture form state: field values, validation and redirect selection.
//!
//! The form chrome lives in `components::lead_form`; everything here is plain
//! data so the rules can be unit tested without a browser.

use crate::config;

/// Highest class the visitor has completed. "Nothing selected" is
/// represented as `Option<ClassLevel>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLevel {
    Tenth,
    Twelfth,
}

impl ClassLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ClassLevel::Tenth => "10th",
            ClassLevel::Twelfth => "12th",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            ClassLevel::Tenth => "Just completed 10th",
            ClassLevel::Twelfth => "Completed 12th grade",
        }
    }
}

/// Validated form fields. The country code selector carries no rule and
/// therefore has no entry here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    CompletedClass,
}

/// When validation feedback is surfaced to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackMode {
    /// Errors appear only after a submit attempt.
    OnSubmit,
    /// Additionally show per-keystroke validity hints.
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRule {
    PresenceOnly,
    /// At least 8 characters drawn from digits, `+`, `-`, space, `(`, `)`.
    Pattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    PresenceOnly,
    /// At least 2 characters after trimming.
    MinLen,
}

/// The original site shipped three near-identical forms differing only in
/// feedback mode and rule strictness; those differences are named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    pub feedback: FeedbackMode,
    pub phone_rule: PhoneRule,
    pub name_rule: NameRule,
}

impl FormConfig {
    /// Submit-only feedback, presence-only rules.
    pub fn baseline() -> Self {
        Self {
            feedback: FeedbackMode::OnSubmit,
            phone_rule: PhoneRule::PresenceOnly,
            name_rule: NameRule::PresenceOnly,
        }
    }

    /// Live feedback with the stricter name and phone rules.
    pub fn strict() -> Self {
        Self {
            feedback: FeedbackMode::Live,
            phone_rule: PhoneRule::Pattern,
            name_rule: NameRule::MinLen,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub country_code: String,
    pub phone_number: String,
    pub completed_class: Option<ClassLevel>,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country_code: config::DEFAULT_COUNTRY_CODE.to_string(),
            phone_number: String::new(),
            completed_class: None,
        }
    }
}

/// One message slot per validated field; populated only by the last
/// validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub completed_class: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.completed_class.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone_number,
            Field::CompletedClass => self.completed_class,
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone_number = None,
            Field::CompletedClass => self.completed_class = None,
        }
    }
}

/// Owns the form values, the error map and the submission flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    pub config: FormConfig,
    pub form: LeadForm,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            form: LeadForm::default(),
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    /// Store a text field value and optimistically clear its error. Errors
    /// are never re-computed here; that only happens in `validate`.
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.form.name = value,
            Field::Email => self.form.email = value,
            Field::Phone => self.form.phone_number = value,
            // The class selector goes through `toggle_class`.
            Field::CompletedClass => return,
        }
        self.errors.clear(field);
    }

    pub fn set_country_code(&mut self, code: String) {
        self.form.country_code = code;
    }

    /// Selecting the already-selected level clears the choice.
    pub fn toggle_class(&mut self, level: ClassLevel) {
        self.form.completed_class = if self.form.completed_class == Some(level) {
            None
        } else {
            Some(level)
        };
        self.errors.clear(Field::CompletedClass);
    }

    /// Whole-form validation pass. Pure: the controller is not mutated and
    /// repeated calls yield the same map.
    pub fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        let name = self.form.name.trim();
        if name.is_empty() {
            errors.name = Some("Name is required");
        } else if self.config.name_rule == NameRule::MinLen && name.chars().count() < 2 {
            errors.name = Some("Name must be at least 2 characters");
        }

        let email = self.form.email.trim();
        if email.is_empty() {
            errors.email = Some("Email is required");
        } else if !is_valid_email(&self.form.email) {
            errors.email = Some("Please enter a valid email address");
        }

        let phone = self.form.phone_number.trim();
        if phone.is_empty() {
            errors.phone_number = Some("Phone number is required");
        } else if self.config.phone_rule == PhoneRule::Pattern
            && !is_valid_phone(&self.form.phone_number)
        {
            errors.phone_number = Some("Please enter a valid phone number");
        }

        if self.form.completed_class.is_none() {
            errors.completed_class = Some("Please select your completed class");
        }

        errors
    }

    /// Run `check` and publish the result. Returns true when the form is
    /// clean and submission may proceed.
    pub fn validate(&mut self) -> bool {
        self.errors = self.check();
        self.errors.is_empty()
    }

    /// Live-mode validity hint: `None` while the field is untouched, else
    /// whether it currently passes its rule.
    pub fn live_status(&self, field: Field) -> Option<bool> {
        match field {
            Field::Name => {
                if self.form.name.is_empty() {
                    None
                } else {
                    Some(match self.config.name_rule {
                        NameRule::PresenceOnly => !self.form.name.trim().is_empty(),
                        NameRule::MinLen => self.form.name.trim().chars().count() >= 2,
                    })
                }
            }
            Field::Email => {
                if self.form.email.is_empty() {
                    None
                } else {
                    Some(is_valid_email(&self.form.email))
                }
            }
            Field::Phone => {
                if self.form.phone_number.is_empty() {
                    None
                } else {
                    Some(match self.config.phone_rule {
                        PhoneRule::PresenceOnly => !self.form.phone_number.trim().is_empty(),
                        PhoneRule::Pattern => is_valid_phone(&self.form.phone_number),
                    })
                }
            }
            Field::CompletedClass => self.form.completed_class.map(|_| true),
        }
    }

    /// Destination for a successful submission. `None` without a class
    /// selection, so an invalid form can never produce a navigation target.
    pub fn redirect_url(&self) -> Option<&'static str> {
        self.form.completed_class.map(config::redirect_url)
    }
}

/// `local@domain.tld`: no whitespace, exactly one `@`, non-empty local part
/// and a domain with an interior dot.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() {
        return false;
    }
    let domain: Vec<char> = domain.chars().collect();
    domain.len() >= 3 && domain[1..domain.len() - 1].contains(&'.')
}

fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= 8
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(config: FormConfig) -> FormController {
        let mut controller = FormController::new(config);
        controller.set_field(Field::Name, "Priya Sharma".to_string());
        controller.set_field(Field::Email, "priya@example.com".to_string());
        controller.set_field(Field::Phone, "98765 43210".to_string());
        controller.toggle_class(ClassLevel::Tenth);
        controller
    }

    mod toggling {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn toggle_twice_returns_to_unset() {
            let mut controller = FormController::new(FormConfig::baseline());
            controller.toggle_class(ClassLevel::Tenth);
            assert_eq!(controller.form.completed_class, Some(ClassLevel::Tenth));
            controller.toggle_class(ClassLevel::Tenth);
            assert_eq!(controller.form.completed_class, None);
        }

        #[test]
        fn toggling_other_level_switches_selection() {
            let mut controller = FormController::new(FormConfig::baseline());
            controller.toggle_class(ClassLevel::Tenth);
            controller.toggle_class(ClassLevel::Twelfth);
            assert_eq!(controller.form.completed_class, Some(ClassLevel::Twelfth));
        }

        #[test]
        fn toggle_clears_class_error() {
            let mut controller = FormController::new(FormConfig::baseline());
            controller.validate();
            assert!(controller.errors.completed_class.is_some());
            controller.toggle_class(ClassLevel::Twelfth);
            assert_eq!(controller.errors.completed_class, None);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn empty_form_reports_every_field() {
            let mut controller = FormController::new(FormConfig::baseline());
            assert!(!controller.validate());
            assert_eq!(controller.errors.name, Some("Name is required"));
            assert_eq!(controller.errors.email, Some("Email is required"));
            assert_eq!(
                controller.errors.phone_number,
                Some("Phone number is required")
            );
            assert_eq!(
                controller.errors.completed_class,
                Some("Please select your completed class")
            );
        }

        #[test]
        fn filled_baseline_form_is_clean() {
            let mut controller = filled(FormConfig::baseline());
            assert!(controller.validate());
            assert!(controller.errors.is_empty());
        }

        #[test]
        fn check_is_idempotent() {
            let controller = filled(FormConfig::strict());
            assert_eq!(controller.check(), controller.check());

            let mut partial = FormController::new(FormConfig::baseline());
            partial.set_field(Field::Email, "not-an-email".to_string());
            assert_eq!(partial.check(), partial.check());
        }

        #[test]
        fn whitespace_only_name_is_rejected() {
            let mut controller = filled(FormConfig::baseline());
            controller.set_field(Field::Name, "   ".to_string());
            assert!(!controller.validate());
            assert_eq!(controller.errors.name, Some("Name is required"));
        }

        #[test]
        fn strict_name_needs_two_characters() {
            let mut controller = filled(FormConfig::strict());
            controller.set_field(Field::Name, "A".to_string());
            assert!(!controller.validate());
            assert_eq!(
                controller.errors.name,
                Some("Name must be at least 2 characters")
            );

            controller.set_field(Field::Name, "Al".to_string());
            assert!(controller.validate());
        }

        #[test]
        fn baseline_accepts_single_character_name() {
            let mut controller = filled(FormConfig::baseline());
            controller.set_field(Field::Name, "A".to_string());
            assert!(controller.validate());
        }

        #[test]
        fn email_pattern_matches_expected_cases() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("first.last@sub.domain.in"));
            assert!(!is_valid_email(""));
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a.com"));
            assert!(!is_valid_email("@b.com"));
            assert!(!is_valid_email("a@b.com extra"));
            assert!(!is_valid_email("a@@b.com"));
            assert!(!is_valid_email("a@.com"));
            assert!(!is_valid_email("a@b."));
        }

        #[test]
        fn baseline_phone_only_needs_presence() {
            let mut controller = filled(FormConfig::baseline());
            controller.set_field(Field::Phone, "123".to_string());
            assert!(controller.validate());
        }

        #[test]
        fn strict_phone_needs_eight_allowed_characters() {
            let mut controller = filled(FormConfig::strict());
            controller.set_field(Field::Phone, "123".to_string());
            assert!(!controller.validate());
            assert_eq!(
                controller.errors.phone_number,
                Some("Please enter a valid phone number")
            );

            controller.set_field(Field::Phone, "+91 (987) 654-3210".to_string());
            assert!(controller.validate());

            controller.set_field(Field::Phone, "12345abc".to_string());
            assert!(!controller.validate());
        }

        #[test]
        fn editing_a_field_clears_only_its_error() {
            let mut controller = FormController::new(FormConfig::baseline());
            controller.validate();
            controller.set_field(Field::Name, "Arjun".to_string());
            assert_eq!(controller.errors.name, None);
            // Untouched fields keep their messages until the next pass.
            assert_eq!(controller.errors.email, Some("Email is required"));
        }

        #[test]
        fn country_code_never_errors() {
            let mut controller = filled(FormConfig::strict());
            controller.set_country_code("+44".to_string());
            assert!(controller.validate());
            assert_eq!(controller.form.country_code, "+44");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn missing_name_blocks_submission_and_redirect() {
            let mut controller = filled(FormConfig::baseline());
            controller.set_field(Field::Name, String::new());
            assert!(!controller.validate());
            assert_eq!(controller.errors.name, Some("Name is required"));
            // The gate: the caller only asks for a destination after a clean
            // validate, and an unset class yields none regardless.
            assert!(!controller.errors.is_empty());
        }

        #[test]
        fn redirect_targets_are_selected_by_class() {
            let mut controller = filled(FormConfig::baseline());
            assert_eq!(controller.redirect_url(), Some(config::TENTH_TRACK_URL));

            controller.toggle_class(ClassLevel::Twelfth);
            assert_eq!(controller.redirect_url(), Some(config::TWELFTH_TRACK_URL));
        }

        #[test]
        fn no_class_selection_means_no_destination() {
            let mut controller = filled(FormConfig::baseline());
            controller.toggle_class(ClassLevel::Tenth); // clears it again
            assert_eq!(controller.redirect_url(), None);
        }
    }

    mod live_hints {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn untouched_fields_have_no_hint() {
            let controller = FormController::new(FormConfig::strict());
            assert_eq!(controller.live_status(Field::Name), None);
            assert_eq!(controller.live_status(Field::Email), None);
            assert_eq!(controller.live_status(Field::Phone), None);
            assert_eq!(controller.live_status(Field::CompletedClass), None);
        }

        #[test]
        fn hints_track_the_configured_rules() {
            let mut controller = FormController::new(FormConfig::strict());
            controller.set_field(Field::Name, "A".to_string());
            assert_eq!(controller.live_status(Field::Name), Some(false));
            controller.set_field(Field::Name, "Ananya".to_string());
            assert_eq!(controller.live_status(Field::Name), Some(true));

            controller.set_field(Field::Email, "ananya@edu".to_string());
            assert_eq!(controller.live_status(Field::Email), Some(false));
            controller.set_field(Field::Email, "ananya@edu.in".to_string());
            assert_eq!(controller.live_status(Field::Email), Some(true));

            controller.toggle_class(ClassLevel::Twelfth);
            assert_eq!(controller.live_status(Field::CompletedClass), Some(true));
        }
    }
}
