//! State machine behind every admin list+form screen.
//!
//! One instance exclusively owns the authoritative local copy of one
//! remote collection, the single active draft, and the notification
//! slot. All methods are synchronous and complete before yielding back
//! to the event loop; the network lives with the caller, which feeds
//! results back in. Reconciliation never re-fetches: a successful create
//! prepends the returned record, an update replaces the matching record
//! in place, a delete removes it. The one exception is a `not-found`
//! mutation, where the caller is told to re-fetch because the cache
//! holds a reference the backend no longer knows.

use futures::future::join_all;

use crate::draft::{Draft, SubmitJob, SubmitMode, apply_upload_urls};
use crate::model::field::{FieldSpec, FieldValue};
use crate::notice::{NoticeKind, NoticeSlot};
use crate::record::Record;
use crate::remote::{FileUpload, RecordApi, RemoteError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cache loaded (or empty), no active draft.
    Idle,
    /// A draft is active and editable.
    Editing,
    /// Uploads or the mutation call are in flight; inputs are locked and
    /// no second mutation can start.
    Submitting,
}

/// What the caller must do after a failed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    None,
    /// The target vanished server-side; re-fetch the collection.
    Reload,
}

pub struct CollectionState<R, F> {
    items: Vec<R>,
    phase: Phase,
    draft: Option<Draft<F>>,
    pending_delete: Option<String>,
    notice: NoticeSlot,
}

impl<R: Record, F> CollectionState<R, F> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Idle,
            draft: None,
            pending_delete: None,
            notice: NoticeSlot::new(),
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn draft(&self) -> Option<&Draft<F>> {
        self.draft.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn notice(&self) -> &NoticeSlot {
        &self.notice
    }

    pub fn notice_mut(&mut self) -> &mut NoticeSlot {
        &mut self.notice
    }

    /// A fresh load is authoritative: the cache is replaced wholesale,
    /// never merged.
    pub fn apply_loaded(&mut self, items: Vec<R>) {
        self.items = items;
    }

    /// A failed load keeps the previous cache and phase so a background
    /// refresh gone wrong does not blank the screen.
    pub fn load_failed(&mut self, err: &RemoteError) -> u32 {
        self.notice.show(NoticeKind::Error, err.to_string())
    }

    /// Starts a fresh create draft, silently discarding any unsaved one.
    /// The discard is a deliberate, named part of this transition so a
    /// confirmation step can be bolted on without reshaping the flow.
    pub fn discard_and_begin_create(&mut self) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.draft = Some(Draft::create());
        self.phase = Phase::Editing;
        true
    }

    /// Starts editing `item`, discarding any unsaved draft for another
    /// record. Field values are copied out of the cache by value.
    pub fn begin_edit(&mut self, item: &R) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.draft = Some(Draft::edit(item));
        self.phase = Phase::Editing;
        true
    }

    pub fn set_field(&mut self, field: &'static str, value: FieldValue) {
        if self.phase != Phase::Editing {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.set_field(field, value);
        }
    }

    pub fn attach(&mut self, spec: &FieldSpec, file: F) {
        if self.phase != Phase::Editing {
            return;
        }
        if let Some(draft) = self.draft.as_mut() {
            draft.attach(spec, file);
        }
    }

    /// Unconditional discard of the active draft. Unreachable while
    /// `Submitting` because the inputs driving it are locked then.
    pub fn cancel_edit(&mut self) -> bool {
        if self.phase != Phase::Editing {
            return false;
        }
        self.draft = None;
        self.phase = Phase::Idle;
        true
    }

    /// Locks the draft and hands out the submission job, or `None` when
    /// there is nothing to submit or a mutation is already in flight;
    /// the `Submitting` phase is the mutual-exclusion gate.
    pub fn begin_submit(&mut self) -> Option<SubmitJob<F>>
    where
        F: Clone,
    {
        if self.phase != Phase::Editing {
            return None;
        }
        let job = self.draft.as_ref()?.submit_job();
        self.phase = Phase::Submitting;
        Some(job)
    }

    /// Reconciles a successful create/update without re-fetching:
    /// create prepends the returned record, update replaces the matching
    /// record in place, preserving collection order.
    pub fn submit_succeeded(&mut self, item: R) -> u32 {
        let editing = self.draft.as_ref().and_then(|d| d.target()).is_some();
        if editing {
            if let Some(slot) = self.items.iter_mut().find(|i| i.id() == item.id()) {
                *slot = item;
            } else {
                self.items.insert(0, item);
            }
        } else {
            self.items.insert(0, item);
        }
        self.draft = None;
        self.phase = Phase::Idle;
        self.notice.show(NoticeKind::Success, "Saved.")
    }

    /// Returns to `Editing` with the draft intact so typed content is
    /// never lost on a failed save.
    pub fn submit_failed(&mut self, err: &RemoteError) -> (u32, Remediation) {
        self.phase = Phase::Editing;
        self.failure_notice(err, "This entry no longer exists. Reloading the list.")
    }

    /// Arms the confirmation step; nothing is sent until confirmed.
    pub fn request_delete(&mut self, id: String) -> bool {
        if self.phase == Phase::Submitting {
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn abort_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Consumes the confirmed target and locks the instance for the
    /// duration of the remove call.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.phase == Phase::Submitting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.phase = Phase::Submitting;
        Some(id)
    }

    pub fn delete_succeeded(&mut self, id: &str) -> u32 {
        self.items.retain(|item| item.id() != id);
        if self.draft.as_ref().and_then(|d| d.target()) == Some(id) {
            // the record under edit is gone
            self.draft = None;
        }
        self.settle_phase();
        self.notice.show(NoticeKind::Success, "Deleted.")
    }

    pub fn delete_failed(&mut self, err: &RemoteError) -> (u32, Remediation) {
        self.settle_phase();
        self.failure_notice(err, "This entry no longer exists. Reloading the list.")
    }

    fn settle_phase(&mut self) {
        self.phase = if self.draft.is_some() {
            Phase::Editing
        } else {
            Phase::Idle
        };
    }

    fn failure_notice(&mut self, err: &RemoteError, gone_text: &str) -> (u32, Remediation) {
        if err.is_not_found() {
            let epoch = self.notice.show(NoticeKind::Error, gone_text);
            (epoch, Remediation::Reload)
        } else {
            let epoch = self.notice.show(NoticeKind::Error, err.to_string());
            (epoch, Remediation::None)
        }
    }
}

impl<R: Record, F> Default for CollectionState<R, F> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome<R> {
    Saved(R),
    /// An attachment failed to reach the asset host; the mutation call
    /// was never made and no partial URL was persisted.
    UploadFailed(RemoteError),
    SaveFailed(RemoteError),
}

/// Runs one locked submission: all pending uploads concurrently, then,
/// only if every one of them resolved, the create/update call with the
/// resolved URLs folded into the partial payload.
pub async fn perform_submit<R, A, U>(
    job: SubmitJob<U::Source>,
    api: &A,
    media: &U,
) -> SubmitOutcome<R>
where
    R: Record,
    A: RecordApi<R>,
    U: FileUpload,
{
    let SubmitJob {
        mode,
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
                Err(err) => return SubmitOutcome::UploadFailed(err),
            }
        }
        apply_upload_urls(&mut payload, &uploads, urls);
    }

    let saved = match &mode {
        SubmitMode::Create => api.create(&payload).await,
        SubmitMode::Update(id) => api.update(id, &payload).await,
    };
    match saved {
        Ok(item) => SubmitOutcome::Saved(item),
        Err(err) => SubmitOutcome::SaveFailed(err),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde_json::{Map, Value};

    use super::*;
    use crate::model::field::{FieldKind, MediaKind};
    use crate::model::product::Product;
    use crate::notice::NoticeKind;
    use crate::remote::UploadResult;

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: id.into(),
            title: title.into(),
            category: "Agriculture".into(),
            origin: String::new(),
            description: String::new(),
            image: String::new(),
            images: Vec::new(),
            video: None,
            created_at: None,
        }
    }

    fn titles<F>(state: &CollectionState<Product, F>) -> Vec<&str> {
        state.items().iter().map(|p| p.title.as_str()).collect()
    }

    struct MockApi {
        calls: RefCell<Vec<String>>,
        last_payload: RefCell<Option<Map<String, Value>>>,
        result: RefCell<Option<Result<Product, RemoteError>>>,
    }

    impl MockApi {
        fn returning(result: Result<Product, RemoteError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                last_payload: RefCell::new(None),
                result: RefCell::new(Some(result)),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl RecordApi<Product> for MockApi {
        async fn list(&self) -> Result<Vec<Product>, RemoteError> {
            self.calls.borrow_mut().push("list".into());
            Ok(Vec::new())
        }

        async fn create(&self, payload: &Map<String, Value>) -> Result<Product, RemoteError> {
            self.calls.borrow_mut().push("create".into());
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.result.borrow_mut().take().expect("unexpected create")
        }

        async fn update(
            &self,
            id: &str,
            payload: &Map<String, Value>,
        ) -> Result<Product, RemoteError> {
            self.calls.borrow_mut().push(format!("update {id}"));
            *self.last_payload.borrow_mut() = Some(payload.clone());
            self.result.borrow_mut().take().expect("unexpected update")
        }

        async fn remove(&self, id: &str) -> Result<(), RemoteError> {
            self.calls.borrow_mut().push(format!("remove {id}"));
            Ok(())
        }
    }

    struct MockMedia {
        fail_on: Option<&'static str>,
    }

    impl FileUpload for MockMedia {
        type Source = &'static str;

        async fn upload(
            &self,
            source: &&'static str,
            kind: MediaKind,
        ) -> Result<UploadResult, RemoteError> {
            if self.fail_on == Some(*source) {
                Err(RemoteError::Network("connection lost".into()))
            } else {
                Ok(UploadResult {
                    url: format!("https://cdn.example.com/{source}"),
                    kind,
                })
            }
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

    #[test]
    fn load_replaces_cache_wholesale() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("9", "Old")]);
        state.apply_loaded(vec![
            product("1", "A"),
            product("2", "B"),
            product("3", "C"),
        ]);
        assert_eq!(titles(&state), ["A", "B", "C"]);
    }

    #[test]
    fn failed_load_keeps_cache_and_phase() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "A")]);
        state.load_failed(&RemoteError::Network("offline".into()));
        assert_eq!(titles(&state), ["A"]);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.notice().current().unwrap().kind, NoticeKind::Error);
    }

    #[test]
    fn create_prepends_without_refetch() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("2", "B"), product("3", "C")]);
        state.discard_and_begin_create();
        state.set_field("title", FieldValue::text("A"));
        let job = state.begin_submit().unwrap();
        assert_eq!(job.mode, SubmitMode::Create);

        state.submit_succeeded(product("1", "A"));
        assert_eq!(titles(&state), ["A", "B", "C"]);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.draft().is_none());
    }

    #[test]
    fn update_replaces_in_place_preserving_order() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![
            product("1", "A"),
            product("2", "B"),
            product("3", "C"),
        ]);
        let b = state.find("2").unwrap().clone();
        state.begin_edit(&b);
        state.set_field("title", FieldValue::text("B2"));
        state.begin_submit().unwrap();

        state.submit_succeeded(product("2", "B2"));
        assert_eq!(titles(&state), ["A", "B2", "C"]);
    }

    #[test]
    fn delete_removes_in_place() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![
            product("1", "A"),
            product("2", "B"),
            product("3", "C"),
        ]);
        state.request_delete("2".into());
        let id = state.confirm_delete().unwrap();
        assert_eq!(state.phase(), Phase::Submitting);

        state.delete_succeeded(&id);
        assert_eq!(titles(&state), ["A", "C"]);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.notice().current().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn submitting_gates_further_mutations() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.discard_and_begin_create();
        state.set_field("title", FieldValue::text("A"));
        assert!(state.begin_submit().is_some());

        // P7: a second submit while one is in flight issues nothing
        assert!(state.begin_submit().is_none());
        assert!(state.confirm_delete().is_none());
        assert!(!state.discard_and_begin_create());
    }

    #[test]
    fn failed_upload_aborts_before_any_mutation() {
        let mut state: CollectionState<Product, &'static str> = CollectionState::new();
        state.discard_and_begin_create();
        state.set_field("title", FieldValue::text("A"));
        state.attach(&gallery_spec(), "one.jpg");
        state.attach(&gallery_spec(), "two.jpg");
        let job = state.begin_submit().unwrap();

        let api = MockApi::returning(Ok(product("1", "A")));
        let media = MockMedia {
            fail_on: Some("two.jpg"),
        };
        let outcome: SubmitOutcome<Product> = block_on(perform_submit(job, &api, &media));

        assert!(matches!(outcome, SubmitOutcome::UploadFailed(_)));
        assert!(api.calls().is_empty(), "no mutation call may be issued");

        let SubmitOutcome::UploadFailed(err) = outcome else {
            unreachable!()
        };
        let (_, remediation) = state.submit_failed(&err);
        assert_eq!(remediation, Remediation::None);
        assert_eq!(state.phase(), Phase::Editing);
        assert_eq!(state.draft().unwrap().attachments().len(), 2);
        assert_eq!(state.notice().current().unwrap().kind, NoticeKind::Error);
        assert!(state.items().is_empty());
    }

    #[test]
    fn uploads_resolve_into_the_payload_before_create() {
        let mut state: CollectionState<Product, &'static str> = CollectionState::new();
        state.discard_and_begin_create();
        state.set_field("title", FieldValue::text("A"));
        state.attach(&gallery_spec(), "one.jpg");
        let job = state.begin_submit().unwrap();

        let api = MockApi::returning(Ok(product("1", "A")));
        let media = MockMedia { fail_on: None };
        let outcome: SubmitOutcome<Product> = block_on(perform_submit(job, &api, &media));

        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(api.calls(), ["create"]);
        let payload = api.last_payload.borrow().clone().unwrap();
        assert_eq!(
            payload["images"],
            serde_json::json!(["https://cdn.example.com/one.jpg"])
        );
    }

    #[test]
    fn not_found_update_requests_a_reload_with_distinct_message() {
        let mut state: CollectionState<Product, &'static str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "A")]);
        let a = state.find("1").unwrap().clone();
        state.begin_edit(&a);
        state.set_field("title", FieldValue::text("A2"));
        let job = state.begin_submit().unwrap();

        let api = MockApi::returning(Err(RemoteError::NotFound("gone".into())));
        let media = MockMedia { fail_on: None };
        let outcome: SubmitOutcome<Product> = block_on(perform_submit(job, &api, &media));

        let SubmitOutcome::SaveFailed(err) = outcome else {
            panic!("expected save failure")
        };
        let (_, remediation) = state.submit_failed(&err);
        assert_eq!(remediation, Remediation::Reload);
        assert_eq!(state.phase(), Phase::Editing);
        let text = &state.notice().current().unwrap().text;
        assert!(text.contains("no longer exists"), "got: {text}");
    }

    #[test]
    fn not_found_delete_requests_a_reload() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "A")]);
        state.request_delete("1".into());
        state.confirm_delete().unwrap();

        let (_, remediation) = state.delete_failed(&RemoteError::NotFound("gone".into()));
        assert_eq!(remediation, Remediation::Reload);
        assert_eq!(titles(&state), ["A"], "cache untouched on failure");
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn edit_submit_round_trip() {
        // cache = [{id:"1",title:"Port Update"}], edit the title, mocked
        // backend echoes the change
        let mut state: CollectionState<Product, &'static str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "Port Update")]);
        let item = state.find("1").unwrap().clone();
        state.begin_edit(&item);
        state.set_field("title", FieldValue::text("Port Update v2"));
        let job = state.begin_submit().unwrap();

        let api = MockApi::returning(Ok(product("1", "Port Update v2")));
        let media = MockMedia { fail_on: None };
        let outcome: SubmitOutcome<Product> = block_on(perform_submit(job, &api, &media));

        assert_eq!(api.calls(), ["update 1"]);
        let payload = api.last_payload.borrow().clone().unwrap();
        assert_eq!(payload.len(), 1, "only the changed field travels");
        assert_eq!(payload["title"], "Port Update v2");

        let SubmitOutcome::Saved(saved) = outcome else {
            panic!("expected success")
        };
        state.submit_succeeded(saved);
        assert_eq!(titles(&state), ["Port Update v2"]);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.notice().current().unwrap().kind, NoticeKind::Success);
    }

    #[test]
    fn switching_edit_targets_discards_the_previous_draft() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "A"), product("2", "B")]);
        let a = state.find("1").unwrap().clone();
        state.begin_edit(&a);
        state.set_field("title", FieldValue::text("half-typed"));

        let b = state.find("2").unwrap().clone();
        state.begin_edit(&b);
        assert_eq!(state.draft().unwrap().target(), Some("2"));
        assert!(!state.draft().unwrap().has_changes());
    }

    #[test]
    fn deleting_the_record_under_edit_drops_its_draft() {
        let mut state: CollectionState<Product, &str> = CollectionState::new();
        state.apply_loaded(vec![product("1", "A")]);
        let a = state.find("1").unwrap().clone();
        state.begin_edit(&a);
        state.request_delete("1".into());
        let id = state.confirm_delete().unwrap();
        state.delete_succeeded(&id);

        assert!(state.draft().is_none());
        assert_eq!(state.phase(), Phase::Idle);
    }
}
