use yew::prelude::*;

use common::model::product::Product;
use common::model::review::Review;

use crate::components::listing::ContentList;
use crate::pages::cards::{approved, product_card, review_card};

pub struct HomePage;

impl Component for HomePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        HomePage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <>
                <section class="hero">
                    <h1>{"Import and export, door to door"}</h1>
                    <p>
                        {"Meridian Impex moves agricultural goods, textiles and machinery \
                          between suppliers and buyers in over forty markets."}
                    </p>
                    <a class="btn btn-primary" href="/trade">{"Request a quote"}</a>
                </section>
                <section class="home-section">
                    <h2>{"Featured products"}</h2>
                    <ContentList<Product> render={Callback::from(product_card)} limit={3} />
                    <a class="link" href="/products">{"Browse the full catalogue"}</a>
                </section>
                <section class="home-section">
                    <h2>{"What partners say"}</h2>
                    <ContentList<Review>
                        render={Callback::from(review_card)}
                        filter={Some(approved as fn(&Review) -> bool)}
                        limit={3}
                        empty_text="No reviews yet."
                    />
                </section>
            </>
        }
    }
}
