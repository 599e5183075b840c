//! Toast Component
//!
//! Fixed overlay for the current transient notification.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || {
            ctx.toast.get().map(|message| {
                view! { <div class="toast">{message}</div> }
            })
        }}
    }
}
