use log::{info, warn};

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config;
use crate::contact::payload::FormPayload;
use crate::contact::submission::SubmitError;
use crate::contact::validation::{format_phone_as_typed, FieldKind, FormField, ValidationError};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const SERVICE_TYPE: &str = "service_type";
pub const BOROUGH: &str = "borough";
pub const MESSAGE: &str = "message";
pub const CALL_TIME: &str = "call_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub field_errors: Vec<FieldError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub busy: bool,
}

impl SubmitControl {
    pub fn label(&self) -> &'static str {
        if self.busy {
            "Sending..."
        } else {
            "Get My Free Estimate"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessNotice {
    pub id: u32,
}

/// Query-string or call-to-action defaults for the two selectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prefill {
    pub service: Option<String>,
    pub borough: Option<String>,
}

pub struct FormController {
    fields: Vec<FormField>,
    call_times: Vec<String>,
    state: SubmissionState,
    control: SubmitControl,
    notice: Option<SuccessNotice>,
    failure: Option<SubmitError>,
    next_notice_id: u32,
    analytics: Analytics,
}

impl FormController {
    pub fn new(analytics: Analytics) -> Self {
        Self {
            fields: vec![
                FormField::new(NAME, FieldKind::Text, true),
                FormField::new(EMAIL, FieldKind::Email, true),
                FormField::new(PHONE, FieldKind::Phone, true),
                FormField::new(SERVICE_TYPE, FieldKind::Text, true),
                FormField::new(BOROUGH, FieldKind::Text, false),
                FormField::new(MESSAGE, FieldKind::Text, false),
            ],
            call_times: Vec::new(),
            state: SubmissionState::Idle,
            control: SubmitControl { enabled: true, busy: false },
            notice: None,
            failure: None,
            next_notice_id: 0,
            analytics,
        }
    }

    pub fn set_analytics(&mut self, analytics: Analytics) {
        self.analytics = analytics;
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<ValidationError> {
        self.field(name).and_then(FormField::error)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn control(&self) -> SubmitControl {
        self.control
    }

    pub fn notice(&self) -> Option<SuccessNotice> {
        self.notice
    }

    pub fn failure(&self) -> Option<&SubmitError> {
        self.failure.as_ref()
    }

    pub fn call_times(&self) -> &[String] {
        &self.call_times
    }

    /// Records a keystroke. Phone input is reformatted, and an existing error on the field goes away.
    pub fn edit(&mut self, name: &str, raw: &str) {
        let Some(field) = self.field_mut(name) else {
            return;
        };
        field.value = match field.kind {
            FieldKind::Phone => format_phone_as_typed(raw),
            _ => raw.to_string(),
        };
        if field.has_error() {
            self.clear_field_error(name);
        }
    }

    pub fn blur(&mut self, name: &str) {
        if let Some(outcome) = self.field(name).map(FormField::check) {
            self.apply_check(name, outcome);
        }
    }

    pub fn toggle_call_time(&mut self, value: &str, checked: bool) {
        self.call_times.retain(|v| v != value);
        if checked {
            self.call_times.push(value.to_string());
        }
    }

    /// Only values that name one of the selector's options are taken; anything else is dropped.
    pub fn prefill(&mut self, prefill: &Prefill) {
        let services: &[(&str, &str)] = &config::SERVICES;
        let boroughs: &[(&str, &str)] = &config::BOROUGHS;
        for (name, value, options) in [
            (SERVICE_TYPE, &prefill.service, services),
            (BOROUGH, &prefill.borough, boroughs),
        ] {
            let Some(value) = value.as_deref() else {
                continue;
            };
            if options.iter().any(|(slug, _)| *slug == value) {
                self.edit(name, value);
            } else if !value.is_empty() {
                warn!("Ignoring unknown {} prefill {:?}", name, value);
            }
        }
    }

    pub fn show_field_error(&mut self, name: &str, error: ValidationError) {
        if let Some(field) = self.field_mut(name) {
            field.show_error(error);
        }
    }

    pub fn clear_field_error(&mut self, name: &str) {
        if let Some(field) = self.field_mut(name) {
            field.clear_error();
        }
    }

    pub fn validate(&mut self) -> ValidationResult {
        let checks: Vec<(&'static str, Result<(), ValidationError>)> =
            self.fields.iter().map(|f| (f.name, f.check())).collect();

        let mut field_errors = Vec::new();
        for (name, outcome) in checks {
            if let Err(error) = outcome {
                field_errors.push(FieldError { field: name, error });
            }
            self.apply_check(name, outcome);
        }

        ValidationResult {
            is_valid: field_errors.is_empty(),
            field_errors,
        }
    }

    fn apply_check(&mut self, name: &str, outcome: Result<(), ValidationError>) {
        match outcome {
            Ok(()) => self.clear_field_error(name),
            Err(error) => self.show_field_error(name, error),
        }
    }

    pub fn payload(&self) -> FormPayload {
        self.fields
            .iter()
            .map(|f| (f.name, f.value.clone()))
            .chain(self.call_times.iter().map(|v| (CALL_TIME, v.clone())))
            .collect()
    }

    /// Starts a submission. Returns the payload to send, or `None` when the submit control is
    /// disabled or the form is invalid; in the latter case errors are already shown.
    pub fn begin_submit(&mut self) -> Option<FormPayload> {
        if !self.control.enabled {
            return None;
        }
        if !self.validate().is_valid {
            return None;
        }

        self.state = SubmissionState::Submitting;
        self.control = SubmitControl { enabled: false, busy: true };
        self.notice = None;
        self.failure = None;
        info!("Submitting contact form");
        Some(self.payload())
    }

    /// Applies the submitter's outcome. On success returns the notice to schedule for expiry.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<SuccessNotice> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        self.control = SubmitControl { enabled: true, busy: false };

        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.next_notice_id = self.next_notice_id.wrapping_add(1);
                let notice = SuccessNotice { id: self.next_notice_id };
                self.notice = Some(notice);
                self.reset();
                self.analytics.track(AnalyticsEvent::form_submit());
                info!("Contact form submitted");
                Some(notice)
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                self.state = SubmissionState::Failed;
                self.failure = Some(e);
                None
            }
        }
    }

    /// Timer expiry for a notice. Ignored if a newer notice has replaced it.
    pub fn expire_notice(&mut self, id: u32) {
        if self.notice.map(|n| n.id) == Some(id) {
            self.dismiss_notice();
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }

    fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.clear_error();
        }
        self.call_times.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::payload::PayloadValue;
    use crate::contact::submission::Submitter;
    use futures::executor::block_on;
    use futures::future::{FutureExt, LocalBoxFuture};
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::Callback;

    struct FixedSubmitter {
        outcome: Result<(), SubmitError>,
        received: RefCell<Vec<FormPayload>>,
    }

    impl FixedSubmitter {
        fn new(outcome: Result<(), SubmitError>) -> Self {
            Self { outcome, received: RefCell::new(Vec::new()) }
        }
    }

    impl Submitter for FixedSubmitter {
        fn submit(&self, payload: FormPayload) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            self.received.borrow_mut().push(payload);
            futures::future::ready(self.outcome.clone()).boxed_local()
        }
    }

    fn recording_analytics() -> (Analytics, Rc<RefCell<Vec<AnalyticsEvent>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let analytics = Analytics::new(Callback::from(move |event| sink.borrow_mut().push(event)));
        (analytics, seen)
    }

    fn filled() -> FormController {
        let mut form = FormController::new(Analytics::disabled());
        form.edit(NAME, "Maria Lopez");
        form.edit(EMAIL, "maria@example.com");
        form.edit(PHONE, "9176248550");
        form.edit(SERVICE_TYPE, "plumbing");
        form
    }

    fn submit_with(form: &mut FormController, submitter: &FixedSubmitter) -> Option<SuccessNotice> {
        let payload = form.begin_submit()?;
        let outcome = block_on(submitter.submit(payload));
        form.finish_submit(outcome)
    }

    #[test]
    fn empty_required_fields_block_submission() {
        let mut form = FormController::new(Analytics::disabled());
        form.edit(NAME, "   ");

        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.control().enabled);

        let result = form.validate();
        assert!(!result.is_valid);
        let name_errors: Vec<_> = result.field_errors.iter().filter(|e| e.field == NAME).collect();
        assert_eq!(name_errors.len(), 1);
        assert_eq!(name_errors[0].error, ValidationError::EmptyField);
        assert_eq!(form.error(BOROUGH), None);
        assert_eq!(form.error(MESSAGE), None);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut form = FormController::new(Analytics::disabled());
        form.edit(EMAIL, "a@b");
        form.edit(PHONE, "12345");

        let first = form.validate();
        let second = form.validate();
        assert_eq!(first, second);
        assert_eq!(form.error(EMAIL), Some(ValidationError::InvalidEmailFormat));
        assert_eq!(form.error(PHONE), Some(ValidationError::InvalidPhoneFormat));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = FormController::new(Analytics::disabled());
        form.validate();
        assert!(form.error(NAME).is_some());
        assert!(form.error(EMAIL).is_some());

        form.edit(NAME, "M");
        assert_eq!(form.error(NAME), None);
        assert_eq!(form.error(EMAIL), Some(ValidationError::EmptyField));
    }

    #[test]
    fn blur_recomputes_single_field() {
        let mut form = FormController::new(Analytics::disabled());
        form.blur(EMAIL);
        assert_eq!(form.error(EMAIL), Some(ValidationError::EmptyField));
        assert_eq!(form.error(NAME), None);

        form.edit(EMAIL, "maria@example");
        form.blur(EMAIL);
        assert_eq!(form.error(EMAIL), Some(ValidationError::InvalidEmailFormat));

        form.edit(EMAIL, "maria@example.com");
        form.blur(EMAIL);
        assert_eq!(form.error(EMAIL), None);
    }

    #[test]
    fn phone_is_formatted_while_typing() {
        let mut form = FormController::new(Analytics::disabled());
        form.edit(PHONE, "917624");
        assert_eq!(form.value(PHONE), "(917) 624");
        form.edit(PHONE, "(917) 6248550");
        assert_eq!(form.value(PHONE), "(917) 624-8550");
        form.blur(PHONE);
        assert_eq!(form.error(PHONE), None);
    }

    #[test]
    fn successful_submit_resets_form_and_reports() {
        let (analytics, seen) = recording_analytics();
        let mut form = filled();
        form.set_analytics(analytics);
        form.toggle_call_time("morning", true);
        form.toggle_call_time("evening", true);
        let submitter = FixedSubmitter::new(Ok(()));

        let payload = form.begin_submit().expect("valid form submits");
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert_eq!(form.control(), SubmitControl { enabled: false, busy: true });
        assert_eq!(form.control().label(), "Sending...");
        assert_eq!(
            payload.get(CALL_TIME),
            Some(&PayloadValue::Many(vec!["morning".to_string(), "evening".to_string()]))
        );
        assert_eq!(payload.get(PHONE), Some(&PayloadValue::Single("(917) 624-8550".to_string())));

        let outcome = block_on(submitter.submit(payload));
        let notice = form.finish_submit(outcome).expect("notice shown");

        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(form.control(), SubmitControl { enabled: true, busy: false });
        assert_eq!(form.notice(), Some(notice));
        for name in [NAME, EMAIL, PHONE, SERVICE_TYPE, BOROUGH, MESSAGE] {
            assert_eq!(form.value(name), "");
        }
        assert!(form.call_times().is_empty());
        assert_eq!(submitter.received.borrow().len(), 1);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name, "form_submit");

        drop(seen);
        form.expire_notice(notice.id);
        assert_eq!(form.notice(), None);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn disabled_control_rejects_second_submit() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn stale_timer_keeps_newer_notice() {
        let submitter = FixedSubmitter::new(Ok(()));
        let mut form = filled();
        let first = submit_with(&mut form, &submitter).unwrap();

        form.edit(NAME, "Maria Lopez");
        form.edit(EMAIL, "maria@example.com");
        form.edit(PHONE, "9176248550");
        form.edit(SERVICE_TYPE, "painting");
        let second = submit_with(&mut form, &submitter).unwrap();
        assert_ne!(first, second);

        form.expire_notice(first.id);
        assert_eq!(form.notice(), Some(second));

        form.expire_notice(second.id);
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn failed_submit_keeps_values_and_reenables() {
        let (analytics, seen) = recording_analytics();
        let mut form = filled();
        form.set_analytics(analytics);
        let submitter = FixedSubmitter::new(Err(SubmitError::Rejected(502)));

        assert!(submit_with(&mut form, &submitter).is_none());
        assert_eq!(form.state(), SubmissionState::Failed);
        assert!(form.control().enabled);
        assert_eq!(form.failure(), Some(&SubmitError::Rejected(502)));
        assert_eq!(form.value(NAME), "Maria Lopez");
        assert!(seen.borrow().is_empty());

        let retry = FixedSubmitter::new(Ok(()));
        assert!(submit_with(&mut form, &retry).is_some());
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(form.failure(), None);
    }

    #[test]
    fn prefill_sets_selectors() {
        let mut form = FormController::new(Analytics::disabled());
        form.prefill(&Prefill {
            service: Some("electrical".to_string()),
            borough: Some(String::new()),
        });
        assert_eq!(form.value(SERVICE_TYPE), "electrical");
        assert_eq!(form.value(BOROUGH), "");
    }

    #[test]
    fn unknown_prefill_values_are_dropped() {
        let mut form = FormController::new(Analytics::disabled());
        form.prefill(&Prefill {
            service: Some("not-a-service".to_string()),
            borough: Some("atlantis".to_string()),
        });
        assert_eq!(form.value(SERVICE_TYPE), "");
        assert_eq!(form.value(BOROUGH), "");

        form.edit(NAME, "Maria Lopez");
        form.edit(EMAIL, "maria@example.com");
        form.edit(PHONE, "9176248550");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(SERVICE_TYPE), Some(ValidationError::EmptyField));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn valid_borough_prefill_is_kept() {
        let mut form = FormController::new(Analytics::disabled());
        form.prefill(&Prefill {
            service: None,
            borough: Some("staten-island".to_string()),
        });
        assert_eq!(form.value(BOROUGH), "staten-island");
        assert_eq!(form.value(SERVICE_TYPE), "");
    }
}
