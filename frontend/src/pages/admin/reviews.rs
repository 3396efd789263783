use yew::prelude::*;

use common::model::review::Review;

use crate::components::collection::CollectionAdmin;

use super::{admin_nav, guard, session_of};

/// Moderation screen: reviews arrive from the public site, so the
/// manager runs without a create button: approve, correct or delete.
pub struct AdminReviewsPage;

impl Component for AdminReviewsPage {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdminReviewsPage
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !guard(session_of(ctx)) {
            return html! {};
        }
        html! {
            <section class="admin">
                { admin_nav("reviews") }
                <CollectionAdmin<Review> title="Reviews" can_create={false} />
            </section>
        }
    }
}
