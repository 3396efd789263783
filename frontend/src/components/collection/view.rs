//! View rendering for the collection manager.
//!
//! Layout: heading with the create button, the shared notice banner,
//! the delete confirmation strip, the editor panel for the active
//! draft, then the record cards. Every control that could start a
//! second mutation is disabled while one is in flight.

use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent};
use yew::html::Scope;
use yew::prelude::*;

use common::collection::Phase;
use common::draft::Draft;
use common::model::field::{FieldKind, FieldSpec, FieldValue};
use common::record::Record;

use crate::components::notice::notice_banner;

use super::messages::Msg;
use super::state::CollectionAdmin;

pub fn view<R: Record>(component: &CollectionAdmin<R>, ctx: &Context<CollectionAdmin<R>>) -> Html {
    let link = ctx.link();
    let store = &component.store;
    let busy = store.phase() == Phase::Submitting;

    html! {
        <section class="collection-admin">
            <header class="collection-head">
                <h2>{ ctx.props().title.clone() }</h2>
                {
                    if ctx.props().can_create {
                        html! {
                            <button
                                class="btn btn-primary"
                                disabled={busy}
                                onclick={link.callback(|_| Msg::BeginCreate)}
                            >
                                {"New entry"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </header>

            { notice_banner(store.notice(), link.callback(|_| Msg::DismissNotice)) }
            { confirm_strip(component, ctx) }
            { editor(component, ctx) }
            { cards(component, ctx) }
        </section>
    }
}

/// Explicit confirmation before the destructive call goes out.
fn confirm_strip<R: Record>(
    component: &CollectionAdmin<R>,
    ctx: &Context<CollectionAdmin<R>>,
) -> Html {
    let link = ctx.link();
    let store = &component.store;
    let Some(id) = store.pending_delete() else {
        return html! {};
    };
    let label = store
        .find(id)
        .map(|item| item.label())
        .unwrap_or_else(|| "this entry".to_string());
    let busy = store.phase() == Phase::Submitting;

    html! {
        <div class="confirm-strip">
            <span>{ format!("Delete \u{201c}{label}\u{201d}? This cannot be undone.") }</span>
            <button
                class="btn btn-danger"
                disabled={busy}
                onclick={link.callback(|_| Msg::ConfirmDelete)}
            >
                {"Delete"}
            </button>
            <button class="btn" disabled={busy} onclick={link.callback(|_| Msg::AbortDelete)}>
                {"Keep"}
            </button>
        </div>
    }
}

fn cards<R: Record>(component: &CollectionAdmin<R>, ctx: &Context<CollectionAdmin<R>>) -> Html {
    let link = ctx.link();
    let store = &component.store;
    let busy = store.phase() == Phase::Submitting;

    if store.items().is_empty() {
        return html! { <p class="muted">{"No entries yet."}</p> };
    }

    html! {
        <div class="card-grid">
            {
                for store.items().iter().map(|item| {
                    let edit_id = item.id().to_string();
                    let delete_id = item.id().to_string();
                    html! {
                        <article class="card" key={item.id().to_string()}>
                            { thumb(item) }
                            <h3>{ item.label() }</h3>
                            { summary(item) }
                            <div class="card-actions">
                                <button
                                    class="btn"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::BeginEdit(edit_id.clone()))}
                                >
                                    {"Edit"}
                                </button>
                                <button
                                    class="btn btn-danger"
                                    disabled={busy}
                                    onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                                >
                                    {"Delete"}
                                </button>
                            </div>
                        </article>
                    }
                })
            }
        </div>
    }
}

fn thumb<R: Record>(item: &R) -> Html {
    let url = R::fields()
        .iter()
        .filter(|spec| spec.kind == FieldKind::Image)
        .find_map(|spec| item.value(spec.name))
        .map(|value| value.as_text().to_string())
        .filter(|url| !url.is_empty());
    match url {
        Some(url) => html! { <img class="card-thumb" src={url} alt="" /> },
        None => html! {},
    }
}

/// First multiline field, truncated, as the card's teaser line.
fn summary<R: Record>(item: &R) -> Html {
    let teaser = R::fields()
        .iter()
        .filter(|spec| spec.kind == FieldKind::Multiline)
        .find_map(|spec| item.value(spec.name))
        .map(|value| value.as_text().to_string())
        .filter(|text| !text.is_empty());
    match teaser {
        Some(text) => {
            let short: String = text.chars().take(120).collect();
            let suffix = if text.chars().count() > 120 { "…" } else { "" };
            html! { <p class="card-teaser">{ format!("{short}{suffix}") }</p> }
        }
        None => html! {},
    }
}

fn editor<R: Record>(component: &CollectionAdmin<R>, ctx: &Context<CollectionAdmin<R>>) -> Html {
    let link = ctx.link();
    let store = &component.store;
    let Some(draft) = store.draft() else {
        return html! {};
    };
    let busy = store.phase() == Phase::Submitting;
    let heading = if draft.target().is_some() {
        "Edit entry"
    } else {
        "New entry"
    };

    html! {
        <div class="editor-panel">
            <h3>
                { heading }
                {
                    if draft.has_changes() {
                        html! { <span class="dirty-dot" title="Unsaved changes" /> }
                    } else {
                        html! {}
                    }
                }
            </h3>
            { for R::fields().iter().map(|spec| field_row(spec, draft, busy, link)) }
            <div class="editor-actions">
                <button
                    class="btn btn-primary"
                    disabled={busy}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if busy { "Saving…" } else { "Save" } }
                </button>
                <button class="btn" disabled={busy} onclick={link.callback(|_| Msg::CancelEdit)}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}

fn field_row<R: Record>(
    spec: &'static FieldSpec,
    draft: &Draft<web_sys::File>,
    busy: bool,
    link: &Scope<CollectionAdmin<R>>,
) -> Html {
    let name = spec.name;
    let input = match spec.kind {
        FieldKind::Text | FieldKind::Password => {
            let kind = if spec.kind == FieldKind::Password {
                "password"
            } else {
                "text"
            };
            let value = text_value(draft, name);
            html! {
                <input
                    type={kind}
                    value={value}
                    disabled={busy}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::FieldChanged(name, FieldValue::Text(input.value()))
                    })}
                />
            }
        }
        FieldKind::Multiline => {
            let value = text_value(draft, name);
            html! {
                <textarea
                    value={value}
                    rows={6}
                    disabled={busy}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::FieldChanged(name, FieldValue::Text(input.value()))
                    })}
                />
            }
        }
        FieldKind::Number => {
            let value = match draft.value(name) {
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
        FieldKind::Toggle => {
            let checked = matches!(draft.value(name), Some(FieldValue::Flag(true)));
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
        FieldKind::Select(options) => {
            let current = text_value(draft, name);
            html! {
                <select
                    disabled={busy}
                    onchange={link.callback(move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        Msg::FieldChanged(name, FieldValue::Text(select.value()))
                    })}
                >
                    <option value="" selected={current.is_empty()}>{"—"}</option>
                    {
                        for options.iter().map(|option| html! {
                            <option value={*option} selected={current == *option}>
                                { *option }
                            </option>
                        })
                    }
                </select>
            }
        }
        FieldKind::Image | FieldKind::Gallery | FieldKind::Video => {
            media_input(spec, draft, busy, link)
        }
    };

    html! {
        <label class="field-row">
            <span class="field-label">
                { spec.label }
                { if spec.required { html! { <span class="required">{"*"}</span> } } else { html! {} } }
            </span>
            { input }
        </label>
    }
}

fn media_input<R: Record>(
    spec: &'static FieldSpec,
    draft: &Draft<web_sys::File>,
    busy: bool,
    link: &Scope<CollectionAdmin<R>>,
) -> Html {
    let name = spec.name;
    let accept = match spec.kind {
        FieldKind::Video => "video/*",
        _ => "image/*",
    };
    let multiple = spec.kind == FieldKind::Gallery;

    let current = match draft.value(name) {
        Some(FieldValue::List(urls)) => html! {
            <div class="media-current">
                { for urls.iter().map(|url| html! { <img class="media-thumb" src={url.clone()} alt="" /> }) }
            </div>
        },
        Some(value) if !value.as_text().is_empty() => {
            let url = value.as_text().to_string();
            if spec.kind == FieldKind::Video {
                html! { <a class="media-link" href={url.clone()}>{ url }</a> }
            } else {
                html! { <img class="media-thumb" src={url} alt="" /> }
            }
        }
        _ => html! {},
    };

    let pending: Vec<Html> = draft
        .attachments()
        .iter()
        .filter(|pending| pending.field == name)
        .map(|pending| html! { <li>{ pending.source.name() }</li> })
        .collect();

    html! {
        <div class="media-field">
            { current }
            <input
                type="file"
                accept={accept}
                multiple={multiple}
                disabled={busy}
                onchange={link.batch_callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    let mut picked = Vec::new();
                    if let Some(files) = input.files() {
                        for index in 0..files.length() {
                            if let Some(file) = files.get(index) {
                                picked.push(Msg::FileAttached(name, file));
                            }
                        }
                    }
                    // allow re-picking the same file after a failed upload
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

fn text_value(draft: &Draft<web_sys::File>, name: &str) -> String {
    draft
        .value(name)
        .map(|value| value.as_text().to_string())
        .unwrap_or_default()
}
