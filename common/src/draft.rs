//! The in-progress, unsaved edit of one record.
//!
//! A draft is created empty (create mode) or seeded from an existing
//! record (edit mode). Edit-mode field values are copied out of the
//! cached record by value, so typing never aliases the cache. Pending
//! changes are an explicit per-field map: whatever is absent from it is
//! absent from the mutation payload, which makes the partial-update
//! contract a structural property rather than a convention.
//!
//! The draft is generic over the attached-file handle `F` so the whole
//! module compiles and tests on the host; the browser instantiates it
//! with `web_sys::File`.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::model::field::{FieldSpec, FieldValue, MediaKind};
use crate::record::Record;

/// A file picked in the UI but not yet uploaded. `append` is set for
/// gallery fields, where fresh URLs extend the list instead of
/// replacing it.
#[derive(Debug, Clone)]
pub struct PendingUpload<F> {
    pub field: &'static str,
    pub kind: MediaKind,
    pub append: bool,
    pub source: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(String),
}

/// Everything `submit` needs once the draft is locked: the partial
/// payload of changed fields plus the uploads still to run.
#[derive(Debug, Clone)]
pub struct SubmitJob<F> {
    pub mode: SubmitMode,
    pub payload: Map<String, Value>,
    pub uploads: Vec<PendingUpload<F>>,
}

#[derive(Debug, Clone)]
pub struct Draft<F> {
    /// Id of the record being edited; `None` in create mode.
    target: Option<String>,
    baseline: BTreeMap<&'static str, FieldValue>,
    changes: BTreeMap<&'static str, FieldValue>,
    attachments: Vec<PendingUpload<F>>,
}

impl<F> Draft<F> {
    /// Empty draft for a record yet to be created.
    pub fn create() -> Self {
        Self {
            target: None,
            baseline: BTreeMap::new(),
            changes: BTreeMap::new(),
            attachments: Vec::new(),
        }
    }

    /// Draft seeded from an existing record, fields copied by value.
    pub fn edit<R: Record>(item: &R) -> Self {
        let baseline = R::fields()
            .iter()
            .filter_map(|spec| item.value(spec.name).map(|value| (spec.name, value)))
            .collect();
        Self {
            target: Some(item.id().to_string()),
            baseline,
            changes: BTreeMap::new(),
            attachments: Vec::new(),
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Value shown in the editor: the pending change if there is one,
    /// else the baseline.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.changes.get(field).or_else(|| self.baseline.get(field))
    }

    /// Records a field edit. Setting a field back to its baseline value
    /// untracks it, so the payload only ever carries real changes.
    pub fn set_field(&mut self, field: &'static str, value: FieldValue) {
        if self.baseline.get(field) == Some(&value) {
            self.changes.remove(field);
        } else {
            self.changes.insert(field, value);
        }
    }

    /// Stores a picked file on the draft; nothing is uploaded yet.
    /// Single-value media fields keep only the most recent pick.
    /// Returns false when the field takes no attachments.
    pub fn attach(&mut self, spec: &FieldSpec, file: F) -> bool {
        let Some(kind) = spec.kind.media_kind() else {
            return false;
        };
        let append = spec.kind.appends();
        if !append {
            self.attachments.retain(|pending| pending.field != spec.name);
        }
        self.attachments.push(PendingUpload {
            field: spec.name,
            kind,
            append,
            source: file,
        });
        true
    }

    pub fn attachments(&self) -> &[PendingUpload<F>] {
        &self.attachments
    }

    /// Whether submitting would send anything.
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty() || !self.attachments.is_empty()
    }

    /// Locks the draft content into a [`SubmitJob`].
    ///
    /// Gallery fields with pending uploads get their currently visible
    /// list baked into the payload so resolved URLs have something to
    /// append to; everything else changed travels as-is, and untouched
    /// fields stay off the wire.
    pub fn submit_job(&self) -> SubmitJob<F>
    where
        F: Clone,
    {
        let mut payload = Map::new();
        for (field, value) in &self.changes {
            payload.insert((*field).to_string(), value.to_json());
        }
        for pending in &self.attachments {
            if pending.append && !payload.contains_key(pending.field) {
                let list = self
                    .value(pending.field)
                    .cloned()
                    .unwrap_or(FieldValue::List(Vec::new()));
                payload.insert(pending.field.to_string(), list.to_json());
            }
        }
        SubmitJob {
            mode: match &self.target {
                Some(id) => SubmitMode::Update(id.clone()),
                None => SubmitMode::Create,
            },
            payload,
            uploads: self.attachments.clone(),
        }
    }
}

/// Folds resolved upload URLs into a payload, pairing them with the
/// uploads that produced them (same order).
pub fn apply_upload_urls<F>(
    payload: &mut Map<String, Value>,
    uploads: &[PendingUpload<F>],
    urls: impl IntoIterator<Item = String>,
) {
    for (pending, url) in uploads.iter().zip(urls) {
        if pending.append {
            if let Some(Value::Array(list)) = payload.get_mut(pending.field) {
                list.push(Value::String(url));
                continue;
            }
        }
        payload.insert(pending.field.to_string(), Value::String(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::FieldKind;
    use crate::model::product::Product;

    fn sample_product() -> Product {
        Product {
            id: "p1".into(),
            title: "Jute Sacks".into(),
            category: "Agriculture".into(),
            origin: "Bangladesh".into(),
            description: "50kg woven sacks".into(),
            image: "https://assets/img/jute.jpg".into(),
            images: vec!["https://assets/img/jute-2.jpg".into()],
            video: None,
            created_at: Some("2024-01-10T00:00:00Z".into()),
        }
    }

    fn gallery_spec() -> FieldSpec {
        FieldSpec {
            name: "images",
            label: "Gallery",
            kind: FieldKind::Gallery,
            required: false,
        }
    }

    fn image_spec() -> FieldSpec {
        FieldSpec {
            name: "image",
            label: "Cover image",
            kind: FieldKind::Image,
            required: false,
        }
    }

    #[test]
    fn edit_payload_carries_only_changed_fields() {
        let product = sample_product();
        let mut draft: Draft<&str> = Draft::edit(&product);
        draft.set_field("title", FieldValue::text("Jute Sacks v2"));

        let job = draft.submit_job();
        assert_eq!(job.mode, SubmitMode::Update("p1".into()));
        assert_eq!(job.payload.len(), 1);
        assert_eq!(job.payload["title"], "Jute Sacks v2");
        assert!(!job.payload.contains_key("description"));
        assert!(!job.payload.contains_key("images"));
    }

    #[test]
    fn reverting_a_field_untracks_it() {
        let product = sample_product();
        let mut draft: Draft<&str> = Draft::edit(&product);
        draft.set_field("title", FieldValue::text("changed"));
        draft.set_field("title", FieldValue::text("Jute Sacks"));

        assert!(!draft.has_changes());
        assert!(draft.submit_job().payload.is_empty());
    }

    #[test]
    fn gallery_attachment_seeds_current_list_and_appends() {
        let product = sample_product();
        let mut draft: Draft<&str> = Draft::edit(&product);
        assert!(draft.attach(&gallery_spec(), "photo.jpg"));

        let mut job = draft.submit_job();
        assert_eq!(
            job.payload["images"],
            serde_json::json!(["https://assets/img/jute-2.jpg"])
        );

        apply_upload_urls(
            &mut job.payload,
            &job.uploads,
            vec!["https://assets/img/new.jpg".to_string()],
        );
        assert_eq!(
            job.payload["images"],
            serde_json::json!(["https://assets/img/jute-2.jpg", "https://assets/img/new.jpg"])
        );
    }

    #[test]
    fn repicking_a_cover_image_keeps_one_pending_upload() {
        let mut draft: Draft<&str> = Draft::create();
        draft.attach(&image_spec(), "first.jpg");
        draft.attach(&image_spec(), "second.jpg");

        assert_eq!(draft.attachments().len(), 1);
        assert_eq!(draft.attachments()[0].source, "second.jpg");

        let mut job = draft.submit_job();
        apply_upload_urls(
            &mut job.payload,
            &job.uploads,
            vec!["https://assets/img/final.jpg".to_string()],
        );
        assert_eq!(job.payload["image"], "https://assets/img/final.jpg");
    }

    #[test]
    fn create_mode_sends_every_typed_field() {
        let mut draft: Draft<&str> = Draft::create();
        draft.set_field("title", FieldValue::text("Cotton Yarn"));
        draft.set_field("category", FieldValue::text("Textiles"));

        let job = draft.submit_job();
        assert_eq!(job.mode, SubmitMode::Create);
        assert_eq!(job.payload.len(), 2);
    }
}
