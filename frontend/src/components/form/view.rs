//! View rendering for the submission form.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent,
    SubmitEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::form::{FormField, FormPhase};
use common::model::field::{FieldKind, FieldValue};

use crate::components::notice::notice_banner;

use super::messages::Msg;
use super::state::SubmitForm;

pub fn view(component: &SubmitForm, ctx: &Context<SubmitForm>) -> Html {
    let link = ctx.link();
    let cfg = ctx.props().config;
    let busy = component.state.phase() == FormPhase::Submitting;

    html! {
        <form
            class="submit-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            { notice_banner(component.state.notice(), link.callback(|_| Msg::DismissNotice)) }
            { for cfg.fields.iter().map(|field| field_row(field, component, busy, link)) }
            <button class="btn btn-primary" type="submit" disabled={busy}>
                { if busy { "Sending…" } else { cfg.submit_label } }
            </button>
        </form>
    }
}

fn field_row(
    field: &'static FormField,
    component: &SubmitForm,
    busy: bool,
    link: &Scope<SubmitForm>,
) -> Html {
    let name = field.name;
    let text = component
        .state
        .value(name)
        .map(|value| value.as_text().to_string())
        .unwrap_or_default();

    let input = match field.kind {
        FieldKind::Text | FieldKind::Password => {
            let kind = if field.kind == FieldKind::Password {
                "password"
            } else {
                "text"
            };
            html! {
                <input
                    type={kind}
                    value={text}
                    disabled={busy}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FieldChanged(name, FieldValue::Text(input.value()))
                    })}
                />
            }
        }
        FieldKind::Multiline => html! {
            <textarea
                value={text}
                rows={5}
                disabled={busy}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::FieldChanged(name, FieldValue::Text(input.value()))
                })}
            />
        },
        FieldKind::Number => {
            let value = match component.state.value(name) {
                Some(FieldValue::Number(number)) => number.to_string(),
                _ => String::new(),
            };
            html! {
                <input
                    type="number"
                    step="0.5"
                    value={value}
                    disabled={busy}
                    oninput={link.batch_callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        input
                            .value()
                            .parse::<f64>()
                            .ok()
                            .map(|number| Msg::FieldChanged(name, FieldValue::Number(number)))
                    })}
                />
            }
        }
        FieldKind::Select(options) => html! {
            <select
                disabled={busy}
                onchange={link.callback(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::FieldChanged(name, FieldValue::Text(select.value()))
                })}
            >
                <option value="" selected={text.is_empty()}>{"—"}</option>
                {
                    for options.iter().map(|option| html! {
                        <option value={*option} selected={text == *option}>{ *option }</option>
                    })
                }
            </select>
        },
        FieldKind::Toggle => {
            let checked = matches!(component.state.value(name), Some(FieldValue::Flag(true)));
            html! {
                <input
                    type="checkbox"
                    checked={checked}
                    disabled={busy}
                    onchange={link.callback(move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FieldChanged(name, FieldValue::Flag(input.checked()))
                    })}
                />
            }
        }
        FieldKind::Image | FieldKind::Gallery | FieldKind::Video => {
            let accept = match field.kind {
                FieldKind::Video => "video/*",
                _ => "image/*",
            };
            let pending: Vec<Html> = component
                .state
                .attachments()
                .iter()
                .filter(|pending| pending.field == name)
                .map(|pending| html! { <li>{ pending.source.name() }</li> })
                .collect();
            html! {
                <div class="media-field">
                    <input
                        type="file"
                        accept={accept}
                        disabled={busy}
                        onchange={link.batch_callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let picked = input
                                .files()
                                .and_then(|files| files.get(0))
                                .map(|file| Msg::FileAttached(name, file));
                            input.set_value("");
                            picked
                        })}
                    />
                    {
                        if pending.is_empty() {
                            html! {}
                        } else {
                            html! { <ul class="pending-uploads">{ for pending.into_iter() }</ul> }
                        }
                    }
                </div>
            }
        }
    };

    html! {
        <label class="field-row">
            <span class="field-label">
                { field.label }
                { if field.required { html! { <span class="required">{"*"}</span> } } else { html! {} } }
            </span>
            { input }
        </label>
    }
}
