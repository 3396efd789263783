use yew::prelude::*;

use common::form::{FormConfig, FormField};
use common::model::field::FieldKind;
use common::model::review::Review;

use crate::components::form::SubmitForm;
use crate::components::listing::ContentList;
use crate::pages::cards::{approved, review_card};

const REVIEW_FIELDS: &[FormField] = &[
    FormField {
        name: "name",
        label: "Name",
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
        name: "rating",
        label: "Rating (1–5)",
        kind: FieldKind::Number,
        required: true,
        format: None,
    },
    FormField {
        name: "message",
        label: "Your review",
        kind: FieldKind::Multiline,
        required: true,
        format: None,
    },
];

const REVIEW_FORM: FormConfig = FormConfig {
    fields: REVIEW_FIELDS,
    require_contact: false,
    clear_on_success: true,
    success_text: "Thanks! Your review will appear once it has been approved.",
    submit_label: "Submit review",
};

pub struct ReviewsPage;

impl Component for ReviewsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ReviewsPage
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page">
                <h1>{"Customer reviews"}</h1>
                <ContentList<Review>
                    render={Callback::from(review_card)}
                    filter={Some(approved as fn(&Review) -> bool)}
                    empty_text="No reviews yet — be the first."
                />
                <h2>{"Share your experience"}</h2>
                <SubmitForm config={&REVIEW_FORM} endpoint="/reviews" />
            </section>
        }
    }
}
