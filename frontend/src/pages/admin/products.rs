use yew::prelude::*;

use common::model::product::Product;

use crate::components::collection::CollectionAdmin;

use super::{admin_nav, guard, session_of};

pub struct AdminProductsPage;

impl Component for AdminProductsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminProductsPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !guard(session_of(ctx)) {
            return html! {};
        }
        html! {
            <section class="admin">
                { admin_nav("products") }
                <CollectionAdmin<Product> title="Products" />
            </section>
        }
    }
}
