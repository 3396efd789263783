//! Update function for the submission form.
//!
//! Validation is synchronous and runs to completion before any network
//! call; an invalid form never produces a request. The `Submitting`
//! phase gates double submission the same way the collection manager
//! does.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::{perform_form_submit, FormPhase};
use common::notice::NoticeKind;

use crate::api::{JsonPost, MediaUploader};
use crate::components::notice::arm_expiry;

use super::messages::Msg;
use super::state::SubmitForm;

pub fn update(component: &mut SubmitForm, ctx: &Context<SubmitForm>, msg: Msg) -> bool {
    let cfg = ctx.props().config;
    match msg {
        Msg::FieldChanged(field, value) => {
            component.state.set_field(field, value);
            true
        }
        Msg::FileAttached(field, file) => {
            if let Some(spec) = cfg.fields.iter().find(|spec| spec.name == field) {
                component.state.attach(spec, file);
            }
            true
        }
        Msg::Submit => {
            if component.state.phase() == FormPhase::Submitting {
                return false;
            }
            if let Err(err) = component.state.validate(cfg) {
                let epoch = component
                    .state
                    .notice_mut()
                    .show(NoticeKind::Error, err.to_string());
                arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
                return true;
            }
            let Some(job) = component.state.begin_submit() else {
                return false;
            };
            let endpoint = ctx.props().endpoint;
            let link = ctx.link().clone();
            spawn_local(async move {
                let result =
                    perform_form_submit(endpoint, job, &JsonPost, &MediaUploader::default()).await;
                link.send_message(Msg::Submitted(result));
            });
            true
        }
        Msg::Submitted(Ok(body)) => {
            let epoch = component.state.submit_succeeded(cfg);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            ctx.props().on_success.emit(body);
            true
        }
        Msg::Submitted(Err(err)) => {
            let epoch = component.state.submit_failed(&err);
            arm_expiry(ctx.link(), epoch, Msg::NoticeExpired);
            true
        }
        Msg::NoticeExpired(epoch) => component.state.notice_mut().expire(epoch),
        Msg::DismissNotice => {
            component.state.notice_mut().clear();
            true
        }
    }
}
