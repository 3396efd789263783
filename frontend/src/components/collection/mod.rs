//! Admin collection manager: the generic list+form screen behind the
//! products, blog and review consoles.
//!
//! Responsibilities
//! - Re-export the component types (`Msg`, `CollectionProps`,
//!   `CollectionAdmin`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - Fetch the collection once on first render; the pure state machine
//!   in `common::collection` owns the cache from then on.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::record::Record;
use common::remote::RecordApi;

use crate::api::RestClient;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CollectionProps;
pub use state::CollectionAdmin;

impl<R: Record> Component for CollectionAdmin<R> {
    type Message = Msg<R>;
    type Properties = CollectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CollectionAdmin::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(RestClient::<R>::new().list().await));
            });
        }
    }
}
