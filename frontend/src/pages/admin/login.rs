use serde_json::Value;
use yew::prelude::*;

use common::form::{FormConfig, FormField};
use common::model::field::FieldKind;

use crate::components::form::SubmitForm;
use crate::session::{redirect_to, store_token};

const LOGIN_FIELDS: &[FormField] = &[
    FormField {
        name: "username",
        label: "Username",
        kind: FieldKind::Text,
        required: true,
        format: None,
    },
    FormField {
        name: "password",
        label: "Password",
        kind: FieldKind::Password,
        required: true,
        format: None,
    },
];

const LOGIN_FORM: FormConfig = FormConfig {
    fields: LOGIN_FIELDS,
    require_contact: false,
    clear_on_success: true,
    success_text: "Signed in.",
    submit_label: "Sign in",
};

pub struct AdminLoginPage;

impl Component for AdminLoginPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminLoginPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let on_success = Callback::from(|body: Value| {
            if let Some(token) = body.get("token").and_then(Value::as_str) {
                store_token(token);
            }
            redirect_to("/admin/products");
        });
        html! {
            <section class="page admin-login">
                <h1>{"Staff sign-in"}</h1>
                <SubmitForm config={&LOGIN_FORM} endpoint="/admin/login" on_success={on_success} />
            </section>
        }
    }
}
