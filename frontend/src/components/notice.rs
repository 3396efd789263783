//! Rendering and timing glue for the shared notification slot.
//!
//! The slot itself lives in `common::notice`; this module arms its
//! expiry timers and renders the banner.

use common::notice::{NoticeKind, NoticeSlot};
use gloo_timers::future::TimeoutFuture;
use web_sys::MouseEvent;
use yew::html::Scope;
use yew::prelude::*;

/// How long a banner stays up.
pub const NOTICE_MS: u32 = 3_000;

/// Arms the expiry timer for the message shown under `epoch`. The slot
/// ignores stale epochs, so a banner replaced in the meantime is left
/// alone when this timer finally fires.
pub fn arm_expiry<C, M>(link: &Scope<C>, epoch: u32, to_msg: M)
where
    C: Component,
    M: Fn(u32) -> C::Message + 'static,
{
    let link = link.clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(NOTICE_MS).await;
        link.send_message(to_msg(epoch));
    });
}

/// The single banner; clicking it dismisses early.
pub fn notice_banner(slot: &NoticeSlot, on_dismiss: Callback<MouseEvent>) -> Html {
    match slot.current() {
        Some(notice) => {
            let class = match notice.kind {
                NoticeKind::Success => "notice notice-success",
                NoticeKind::Error => "notice notice-error",
            };
            html! {
                <div class={class} role="status" onclick={on_dismiss}>
                    { notice.text.clone() }
                </div>
            }
        }
        None => html! {},
    }
}
