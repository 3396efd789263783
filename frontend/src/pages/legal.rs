use yew::prelude::*;

use crate::pages::layout::COMPANY;

pub struct LegalPage;

impl Component for LegalPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        LegalPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Terms & privacy"}</h1>
                <h2>{"Terms of use"}</h2>
                <p>
                    { format!("Product listings on this site are indicative and do not \
                      constitute an offer. All trades are concluded under a separate \
                      written contract with {COMPANY}.") }
                </p>
                <h2>{"Privacy"}</h2>
                <p>
                    {"Details submitted through the contact and buy/sell forms are used \
                      only to answer your enquiry and are never sold to third parties. \
                      Reviews are published with the name and company you provide."}
                </p>
            </section>
        }
    }
}
