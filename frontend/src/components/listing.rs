//! Read-only fetch-and-render list used by the public pages.
//!
//! Fetches its collection once on mount and keeps the local copy for
//! the lifetime of the page. Rendering of each record is delegated to
//! the page via the `render` prop so one component serves products,
//! posts and reviews.

use common::record::Record;
use common::remote::{RecordApi, RemoteError};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::RestClient;

#[derive(Properties, PartialEq)]
pub struct ListingProps<R: Record> {
    /// Renders one record as a card.
    pub render: Callback<R, Html>,
    /// Client-side filter, e.g. approved reviews only.
    #[prop_or_default]
    pub filter: Option<fn(&R) -> bool>,
    #[prop_or_default]
    pub limit: Option<usize>,
    #[prop_or(AttrValue::Static("Nothing here yet."))]
    pub empty_text: AttrValue,
}

pub enum Msg<R> {
    Loaded(Result<Vec<R>, RemoteError>),
}

pub struct ContentList<R: Record> {
    items: Vec<R>,
    ready: bool,
}

impl<R: Record> Component for ContentList<R> {
    type Message = Msg<R>;
    type Properties = ListingProps<R>;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            items: Vec::new(),
            ready: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(items)) => {
                self.items = items;
            }
            Msg::Loaded(Err(err)) => {
                gloo_console::error!(format!("{} list failed: {err}", R::RESOURCE));
            }
        }
        self.ready = true;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !self.ready {
            return html! { <p class="muted">{"Loading…"}</p> };
        }
        let cards: Vec<Html> = self
            .items
            .iter()
            .filter(|item| props.filter.map_or(true, |keep| keep(item)))
            .take(props.limit.unwrap_or(usize::MAX))
            .map(|item| props.render.emit(item.clone()))
            .collect();
        if cards.is_empty() {
            return html! { <p class="muted">{ props.empty_text.clone() }</p> };
        }
        html! { <div class="card-grid">{ for cards.into_iter() }</div> }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(RestClient::<R>::new().list().await));
            });
        }
    }
}
