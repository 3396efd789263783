use yew::prelude::*;

use common::form::{Format, FormConfig, FormField};
use common::model::field::FieldKind;

use crate::components::form::SubmitForm;

const CONTACT_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
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
        name: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        required: false,
        format: None,
    },
    FormField {
        name: "message",
        label: "Message",
        kind: FieldKind::Multiline,
        required: true,
        format: None,
    },
];

const CONTACT_FORM: FormConfig = FormConfig {
    fields: CONTACT_FIELDS,
    require_contact: true,
    clear_on_success: true,
    success_text: "Thanks, we received your message. We reply within one business day.",
    submit_label: "Send message",
};

pub struct ContactPage;

impl Component for ContactPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ContactPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page contact-page">
                <h1>{"Contact us"}</h1>
                <div class="contact-columns">
                    <div class="contact-details">
                        <h2>{"Head office"}</h2>
                        <p>{"House 14, Road 2, Agrabad C/A"}</p>
                        <p>{"Chattogram 4100"}</p>
                        <p>{"trade@meridianimpex.example"}</p>
                        <p>{"+880 31 000 000"}</p>
                    </div>
                    <SubmitForm config={&CONTACT_FORM} endpoint="/contact" />
                </div>
            </section>
        }
    }
}
