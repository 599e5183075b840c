//! Page Footer Component

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>"© Shopy Mom"</p>
            <p class="footer-tagline">"Simple • Privé • Fait avec ❤️"</p>
        </footer>
    }
}
