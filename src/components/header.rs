//! Page Header Component

use leptos::prelude::*;

/// Sticky header with the app identity
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="header-inner">
                <div class="header-brand">
                    <span class="header-logo">"🛍️"</span>
                    <div>
                        <p class="header-title">"Shopy Mom"</p>
                        <p class="header-subtitle">"Wishlist familiale"</p>
                    </div>
                </div>
                <span class="header-badge">"Private list"</span>
            </div>
        </header>
    }
}
