//! Single-shot submission form used by the public pages (contact,
//! trade leads, review authoring) and the admin sign-in.
//!
//! The field schema, reset behavior and submit label all come from the
//! page's `FormConfig` const, so the pages carry no form logic of
//! their own.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::FormProps;
pub use state::SubmitForm;

impl Component for SubmitForm {
    type Message = Msg;
    type Properties = FormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SubmitForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
