use yew::prelude::*;

pub struct AboutPage;

impl Component for AboutPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AboutPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"About Meridian Impex"}</h1>
                <p class="lede">
                    {"Founded in 2009, Meridian Impex is a family-run trading house \
                      connecting producers in South Asia with buyers across Europe, \
                      the Gulf and North America."}
                </p>
                <p>
                    {"We handle sourcing, quality inspection, export documentation and \
                      freight, so our partners deal with one counterparty instead of \
                      five. Most of our trade is in agricultural commodities, woven \
                      textiles and light machinery."}
                </p>
                <p>
                    {"Our buying offices in Chattogram and Ho Chi Minh City inspect \
                      every consignment before it ships."}
                </p>
            </section>
        }
    }
}
