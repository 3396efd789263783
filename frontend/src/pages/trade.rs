use yew::prelude::*;

use common::form::{Format, FormConfig, FormField};
use common::model::field::FieldKind;

use crate::components::form::SubmitForm;

const DIRECTIONS: &[&str] = &["Buy", "Sell"];

const TRADE_FIELDS: &[FormField] = &[
    FormField {
        name: "direction",
        label: "I want to",
        kind: FieldKind::Select(DIRECTIONS),
        required: true,
        format: None,
    },
    FormField {
        name: "name",
        label: "Contact name",
        kind: FieldKind::Text,
        required: true,
        format: None,
    },
    FormField {
        name: "company",
        label: "Company",
        kind: FieldKind::Text,
        required: false,
        format: None,
    },
    FormField {
        name: "email",
        label: "Email",
        kind: FieldKind::Text,
        required: false,
        format: Some(Format::Email),
    },
    FormField {
        name: "phone",
        label: "Phone",
        kind: FieldKind::Text,
        required: false,
        format: Some(Format::Phone),
    },
    FormField {
        name: "product",
        label: "Product",
        kind: FieldKind::Text,
        required: true,
        format: None,
    },
    FormField {
        name: "quantity",
        label: "Quantity / volume",
        kind: FieldKind::Text,
        required: false,
        format: None,
    },
    FormField {
        name: "photo",
        label: "Product photo",
        kind: FieldKind::Image,
        required: false,
        format: None,
    },
    FormField {
        name: "message",
        label: "Details",
        kind: FieldKind::Multiline,
        required: false,
        format: None,
    },
];

// details stay in place after a successful send so a follow-up enquiry
// only needs the changed fields
const TRADE_FORM: FormConfig = FormConfig {
    fields: TRADE_FIELDS,
    require_contact: true,
    clear_on_success: false,
    success_text: "Thanks, our trade desk will come back to you shortly.",
    submit_label: "Send enquiry",
};

pub struct TradePage;

impl Component for TradePage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        TradePage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Buy / Sell"}</h1>
                <p class="lede">
                    {"Tell us what you are buying or selling and we will match you \
                      with a counterparty from our network."}
                </p>
                <SubmitForm config={&TRADE_FORM} endpoint="/trade/leads" />
            </section>
        }
    }
}
