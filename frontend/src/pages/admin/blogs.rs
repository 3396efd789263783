use yew::prelude::*;

use common::model::blog::BlogPost;

use crate::components::collection::CollectionAdmin;

use super::{admin_nav, guard, session_of};

pub struct AdminBlogsPage;

impl Component for AdminBlogsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminBlogsPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !guard(session_of(ctx)) {
            return html! {};
        }
        html! {
            <section class="admin">
                { admin_nav("blogs") }
                <CollectionAdmin<BlogPost> title="News posts" />
            </section>
        }
    }
}
