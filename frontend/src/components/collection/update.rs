//! Update function for the collection manager.
//!
//! Local transitions run synchronously on the pure store; network
//! effects are spawned and feed their results back as messages. A
//! response landing after the user navigated away is dropped by the
//! dead scope, so no state is ever applied to an unmounted screen.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::collection::{perform_submit, Remediation, SubmitOutcome};
use common::record::Record;
use common::remote::RecordApi;

use crate::api::{MediaUploader, RestClient};
use crate::components::notice::arm_expiry;

use super::messages::Msg;
use super::state::CollectionAdmin;

pub fn update<R: Record>(
    component: &mut CollectionAdmin<R>,
    ctx: &Context<CollectionAdmin<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Loaded(Ok(items)) => {
            component.store.apply_loaded(items);
            true
        }
        Msg::Loaded(Err(err)) => {
            gloo_console::error!(format!("{} load failed: {err}", R::RESOURCE));
            let epoch = component.store.load_failed(&err);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            true
        }
        Msg::BeginCreate => component.store.discard_and_begin_create(),
        Msg::BeginEdit(id) => match component.store.find(&id).cloned() {
            Some(item) => component.store.begin_edit(&item),
            None => false,
        },
        Msg::FieldChanged(field, value) => {
            component.store.set_field(field, value);
            true
        }
        Msg::FileAttached(field, file) => {
            if let Some(spec) = R::fields().iter().find(|spec| spec.name == field) {
                component.store.attach(spec, file);
            }
            true
        }
        Msg::CancelEdit => component.store.cancel_edit(),
        Msg::Submit => {
            // begin_submit is the mutual-exclusion gate: while a
            // mutation is in flight it hands out nothing
            let Some(job) = component.store.begin_submit() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome =
                    perform_submit(job, &RestClient::<R>::new(), &MediaUploader::default()).await;
                link.send_message(Msg::Submitted(outcome));
            });
            true
        }
        Msg::Submitted(SubmitOutcome::Saved(item)) => {
            let epoch = component.store.submit_succeeded(item);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            true
        }
        Msg::Submitted(SubmitOutcome::UploadFailed(err))
        | Msg::Submitted(SubmitOutcome::SaveFailed(err)) => {
            let (epoch, remediation) = component.store.submit_failed(&err);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            if remediation == Remediation::Reload {
                reload(ctx);
            }
            true
        }
        Msg::RequestDelete(id) => component.store.request_delete(id),
        Msg::AbortDelete => {
            component.store.abort_delete();
            true
        }
        Msg::ConfirmDelete => {
            let Some(id) = component.store.confirm_delete() else {
                return false;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = RestClient::<R>::new().remove(&id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            true
        }
        Msg::Deleted(id, Ok(())) => {
            let epoch = component.store.delete_succeeded(&id);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            true
        }
        Msg::Deleted(_, Err(err)) => {
            let (epoch, remediation) = component.store.delete_failed(&err);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            if remediation == Remediation::Reload {
                reload(ctx);
            }
            true
        }
        Msg::NoticeExpired(epoch) => component.store.notice_mut().expire(epoch),
        Msg::DismissNotice => {
            component.store.notice_mut().clear();
            true
        }
    }
}

/// Forced re-fetch after a `not-found` mutation, the one case where
/// local reconciliation cannot recover.
fn reload<R: Record>(ctx: &Context<CollectionAdmin<R>>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::Loaded(RestClient::<R>::new().list().await));
    });
}
