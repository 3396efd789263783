//! Single-shot form controller used by the public pages.
//!
//! Unlike the collection manager there is no durable local list: the
//! form validates synchronously, optionally uploads attachments, posts
//! once, and either resets or keeps its fields depending on per-instance
//! configuration (the observed pages disagree on reset behavior, so it
//! is a flag, not a constant). A failed submission always keeps what the
//! user typed.

use std::collections::BTreeMap;

use futures::future::join_all;
use regex::Regex;
use serde_json::{Map, Value};

use crate::draft::{PendingUpload, apply_upload_urls};
use crate::model::field::{FieldKind, FieldValue};
use crate::notice::{NoticeKind, NoticeSlot};
use crate::remote::{FileUpload, RemoteError, RemotePost};

/// Format check applied on top of the required-field check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Email,
    Phone,
}

impl Format {
    fn matches(&self, text: &str) -> bool {
        let pattern = match self {
            Format::Email => r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            Format::Phone => r"^\+?[0-9][0-9 ().-]{5,}$",
        };
        Regex::new(pattern).unwrap().is_match(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub format: Option<Format>,
}

/// Per-instance configuration, declared as a const next to each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormConfig {
    pub fields: &'static [FormField],
    /// At least one field carrying a `format` check (email/phone) must
    /// be filled in.
    pub require_contact: bool,
    pub clear_on_success: bool,
    pub success_text: &'static str,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Everything the POST needs once validation passed.
#[derive(Debug, Clone)]
pub struct FormJob<F> {
    pub payload: Map<String, Value>,
    pub uploads: Vec<PendingUpload<F>>,
}

pub struct FormState<F> {
    values: BTreeMap<&'static str, FieldValue>,
    attachments: Vec<PendingUpload<F>>,
    phase: FormPhase,
    notice: NoticeSlot,
}

impl<F> FormState<F> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            attachments: Vec::new(),
            phase: FormPhase::Editing,
            notice: NoticeSlot::new(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn attachments(&self) -> &[PendingUpload<F>] {
        &self.attachments
    }

    pub fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub fn notice_mut(&mut self) -> &mut NoticeSlot {
        &mut self.notice
    }

    pub fn set_field(&mut self, field: &'static str, value: FieldValue) {
        if self.phase == FormPhase::Editing {
            self.values.insert(field, value);
        }
    }

    /// Stores a picked file; single-value fields keep the latest pick.
    pub fn attach(&mut self, field: &FormField, file: F) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        let Some(kind) = field.kind.media_kind() else {
            return false;
        };
        let append = field.kind.appends();
        if !append {
            self.attachments.retain(|pending| pending.field != field.name);
        }
        self.attachments.push(PendingUpload {
            field: field.name,
            kind,
            append,
            source: file,
        });
        true
    }

    /// Synchronous pre-flight checks. Runs to completion before any
    /// network call; a failure here means nothing was sent.
    pub fn validate(&self, cfg: &FormConfig) -> Result<(), RemoteError> {
        for field in cfg.fields {
            let value = self.values.get(field.name);
            let filled = value.is_some_and(|v| !v.is_empty());
            if field.required && !filled {
                return Err(RemoteError::Validation(format!(
                    "{} is required.",
                    field.label
                )));
            }
            if let Some(format) = field.format {
                let text = value.map(|v| v.as_text().trim()).unwrap_or("");
                if !text.is_empty() && !format.matches(text) {
                    return Err(RemoteError::Validation(match format {
                        Format::Email => "Enter a valid email address.".into(),
                        Format::Phone => "Enter a valid phone number.".into(),
                    }));
                }
            }
        }
        if cfg.require_contact {
            let reachable = cfg
                .fields
                .iter()
                .filter(|field| field.format.is_some())
                .any(|field| self.values.get(field.name).is_some_and(|v| !v.is_empty()));
            if !reachable {
                return Err(RemoteError::Validation(
                    "Provide an email address or a phone number.".into(),
                ));
            }
        }
        Ok(())
    }

    /// Locks the form and hands out the job, or `None` while a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormJob<F>>
    where
        F: Clone,
    {
        if self.phase == FormPhase::Submitting {
            return None;
        }
        let mut payload = Map::new();
        for (field, value) in &self.values {
            if !value.is_empty() {
                payload.insert((*field).to_string(), value.to_json());
            }
        }
        self.phase = FormPhase::Submitting;
        Some(FormJob {
            payload,
            uploads: self.attachments.clone(),
        })
    }

    pub fn submit_succeeded(&mut self, cfg: &FormConfig) -> u32 {
        self.phase = FormPhase::Editing;
        if cfg.clear_on_success {
            self.values.clear();
            self.attachments.clear();
        }
        self.notice.show(NoticeKind::Success, cfg.success_text)
    }

    /// Fields stay as typed so the user never re-enters data after a
    /// failed submission.
    pub fn submit_failed(&mut self, err: &RemoteError) -> u32 {
        self.phase = FormPhase::Editing;
        self.notice.show(NoticeKind::Error, err.to_string())
    }
}

impl<F> Default for FormState<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Uploads first, all-or-nothing, then the single POST.
pub async fn perform_form_submit<A, U>(
    path: &str,
    job: FormJob<U::Source>,
    api: &A,
    media: &U,
) -> Result<Value, RemoteError>
where
    A: RemotePost,
    U: FileUpload,
{
    let FormJob {
        mut payload,
        uploads,
    } = job;

    if !uploads.is_empty() {
        let results = join_all(
            uploads
                .iter()
                .map(|pending| media.upload(&pending.source, pending.kind)),
        )
        .await;
        let mut urls = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(done) => urls.push(done.url),
                Err(err) => return Err(err),
            }
        }
        apply_upload_urls(&mut payload, &uploads, urls);
    }

    api.post(path, &payload).await
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::model::field::MediaKind;
    use crate::remote::UploadResult;

    const FIELDS: &[FormField] = &[
        FormField {
            name: "name",
            label: "Name",
            kind: FieldKind::Text,
            required: true,
            format: None,
        },
        FormField {
            name: "email",
            label: "Email",
            kind: FieldKind::Text,
            required: false,
            format: Some(Format::Email),
        },
        FormField {
            name: "phone",
            label: "Phone",
            kind: FieldKind::Text,
            required: false,
            format: Some(Format::Phone),
        },
        FormField {
            name: "message",
            label: "Message",
            kind: FieldKind::Multiline,
            required: true,
            format: None,
        },
    ];

    const CFG: FormConfig = FormConfig {
        fields: FIELDS,
        require_contact: true,
        clear_on_success: true,
        success_text: "Thanks, we received your message.",
        submit_label: "Send",
    };

    fn filled_state() -> FormState<&'static str> {
        let mut state = FormState::new();
        state.set_field("name", FieldValue::text("Ana"));
        state.set_field("email", FieldValue::text("ana@example.com"));
        state.set_field("message", FieldValue::text("Quote please"));
        state
    }

    struct MockPost {
        calls: RefCell<Vec<(String, Map<String, Value>)>>,
        result: RefCell<Option<Result<Value, RemoteError>>>,
    }

    impl MockPost {
        fn returning(result: Result<Value, RemoteError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result: RefCell::new(Some(result)),
            }
        }
    }

    impl RemotePost for MockPost {
        async fn post(
            &self,
            path: &str,
            payload: &Map<String, Value>,
        ) -> Result<Value, RemoteError> {
            self.calls
                .borrow_mut()
                .push((path.to_string(), payload.clone()));
            self.result.borrow_mut().take().expect("unexpected post")
        }
    }

    struct MockMedia {
        fail: bool,
    }

    impl FileUpload for MockMedia {
        type Source = &'static str;

        async fn upload(
            &self,
            source: &&'static str,
            kind: MediaKind,
        ) -> Result<UploadResult, RemoteError> {
            if self.fail {
                Err(RemoteError::Network("connection lost".into()))
            } else {
                Ok(UploadResult {
                    url: format!("https://cdn.example.com/{source}"),
                    kind,
                })
            }
        }
    }

    #[test]
    fn missing_required_field_is_reported_before_any_network() {
        let mut state: FormState<&str> = FormState::new();
        state.set_field("email", FieldValue::text("ana@example.com"));
        let err = state.validate(&CFG).unwrap_err();
        assert_eq!(err, RemoteError::Validation("Name is required.".into()));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut state = filled_state();
        state.set_field("email", FieldValue::text("not-an-address"));
        assert!(matches!(
            state.validate(&CFG),
            Err(RemoteError::Validation(_))
        ));
    }

    #[test]
    fn phone_alone_satisfies_the_contact_rule() {
        let mut state: FormState<&str> = FormState::new();
        state.set_field("name", FieldValue::text("Ana"));
        state.set_field("message", FieldValue::text("Quote please"));
        assert!(state.validate(&CFG).is_err());

        state.set_field("phone", FieldValue::text("+880 171 000 0000"));
        assert!(state.validate(&CFG).is_ok());
    }

    #[test]
    fn success_resets_only_when_configured() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.submit_succeeded(&CFG);
        assert!(state.value("name").is_none());

        let keep = FormConfig {
            clear_on_success: false,
            ..CFG
        };
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.submit_succeeded(&keep);
        assert_eq!(state.value("name").unwrap().as_text(), "Ana");
    }

    #[test]
    fn failure_preserves_typed_fields() {
        let mut state = filled_state();
        state.begin_submit().unwrap();
        state.submit_failed(&RemoteError::Server("failed to save".into()));
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.value("message").unwrap().as_text(), "Quote please");
        assert_eq!(state.notice().current().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn submitting_gates_a_second_submission() {
        let mut state = filled_state();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn empty_values_stay_off_the_wire() {
        let mut state = filled_state();
        state.set_field("phone", FieldValue::text("   "));
        let job = state.begin_submit().unwrap();
        assert!(!job.payload.contains_key("phone"));
        assert_eq!(job.payload["name"], "Ana");
    }

    #[test]
    fn upload_failure_aborts_before_the_post() {
        let photo = FormField {
            name: "photo",
            label: "Photo",
            kind: FieldKind::Image,
            required: false,
            format: None,
        };
        let mut state: FormState<&'static str> = filled_state();
        assert!(state.attach(&photo, "crate.jpg"));
        let job = state.begin_submit().unwrap();

        let api = MockPost::returning(Ok(Value::Null));
        let outcome = block_on(perform_form_submit(
            "/trade/leads",
            job,
            &api,
            &MockMedia { fail: true },
        ));
        assert!(matches!(outcome, Err(RemoteError::Network(_))));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn resolved_upload_joins_the_payload() {
        let photo = FormField {
            name: "photo",
            label: "Photo",
            kind: FieldKind::Image,
            required: false,
            format: None,
        };
        let mut state: FormState<&'static str> = filled_state();
        state.attach(&photo, "crate.jpg");
        let job = state.begin_submit().unwrap();

        let api = MockPost::returning(Ok(Value::Null));
        block_on(perform_form_submit(
            "/trade/leads",
            job,
            &api,
            &MockMedia { fail: false },
        ))
        .unwrap();

        let calls = api.calls.borrow();
        let (path, payload) = &calls[0];
        assert_eq!(path, "/trade/leads");
        assert_eq!(payload["photo"], "https://cdn.example.com/crate.jpg");
    }
}
