use yew::prelude::*;

use common::model::blog::BlogPost;

use crate::components::listing::ContentList;
use crate::pages::cards::blog_card;

pub struct BlogPage;

impl Component for BlogPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        BlogPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Company news"}</h1>
                <ContentList<BlogPost>
                    render={Callback::from(blog_card)}
                    empty_text="No posts yet."
                />
            </section>
        }
    }
}
