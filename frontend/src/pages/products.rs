use yew::prelude::*;

use common::model::product::Product;

use crate::components::listing::ContentList;
use crate::pages::cards::product_card;

pub struct ProductsPage;

impl Component for ProductsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProductsPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Products"}</h1>
                <p class="lede">
                    {"A snapshot of what we currently trade. For anything not listed, \
                      send an enquiry through the buy/sell form."}
                </p>
                <ContentList<Product>
                    render={Callback::from(product_card)}
                    empty_text="The catalogue is being updated — check back soon."
                />
            </section>
        }
    }
}
