use yew::prelude::*;

pub struct CareersPage;

impl Component for CareersPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CareersPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Careers"}</h1>
                <p class="lede">
                    {"We hire people who like moving real goods across real borders. \
                      Open roles are listed below; send your CV to \
                      careers@meridianimpex.example."}
                </p>
                <ul class="openings">
                    <li>
                        <strong>{"Trade desk associate"}</strong>
                        {" — Chattogram, full time"}
                    </li>
                    <li>
                        <strong>{"Documentation officer"}</strong>
                        {" — Chattogram, full time"}
                    </li>
                    <li>
                        <strong>{"Field inspector"}</strong>
                        {" — Ho Chi Minh City, contract"}
                    </li>
                </ul>
            </section>
        }
    }
}
