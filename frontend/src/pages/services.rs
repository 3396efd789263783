use yew::prelude::*;

pub struct ServicesPage;

impl Component for ServicesPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ServicesPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Services"}</h1>
                <div class="card-grid">
                    { service("Sourcing", "Supplier identification, sampling and price negotiation on the ground.") }
                    { service("Quality inspection", "Pre-shipment inspection with photo reports for every consignment.") }
                    { service("Export documentation", "Letters of credit, certificates of origin, phytosanitary certificates.") }
                    { service("Freight & logistics", "FCL and LCL bookings, customs clearance and door delivery.") }
                </div>
            </section>
        }
    }
}

fn service(title: &'static str, text: &'static str) -> Html {
    html! {
        <article class="card">
            <h3>{ title }</h3>
            <p>{ text }</p>
        </article>
    }
}
