//! Shopy Mom Frontend App
//!
//! Single page: add form on the left, list and clipboard preview on the
//! right, transient toasts above everything.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::StoreClient;
use crate::components::{ClipboardPanel, Footer, Header, ItemForm, ItemList, Toast};
use crate::context::AppContext;
use crate::store::{self, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let app_store: AppStore = Store::new(AppState::new());
    provide_context(app_store);

    let (toast, set_toast) = signal(None::<String>);
    let (toast_seq, set_toast_seq) = signal(0u32);
    let ctx = AppContext::new((toast, set_toast), (toast_seq, set_toast_seq));
    provide_context(ctx);

    // Initial fetch on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let client = StoreClient::from_config();
            store::refresh_items(&client, app_store, ctx).await;
        });
    });

    view! {
        <div class="page">
            <Header />

            <main class="page-main">
                <div class="content-grid">
                    <section class="card">
                        <ItemForm />
                    </section>

                    <section class="card">
                        <ItemList />
                        <ClipboardPanel />
                    </section>
                </div>
            </main>

            <Toast />
            <Footer />
        </div>
    }
}
