//! Clipboard Panel Component
//!
//! Copy-all and clear-all actions plus the live text preview of exactly what
//! copy-all writes.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::clipboard;
use crate::context::AppContext;
use crate::format::format_for_clipboard;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ClipboardPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let app_store = use_app_store();

    let preview = Memo::new(move |_| format_for_clipboard(&app_store.items().get()));
    let disabled = move || app_store.busy().get() || app_store.loading().get();

    let on_copy = move |_| {
        let text = preview.get();
        spawn_local(async move {
            match clipboard::write_text(&text).await {
                Ok(()) => ctx.notify("Liste copiée ✅"),
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    ctx.notify("Impossible de copier (permission).");
                }
            }
        });
    };

    let on_clear = move |_| {
        // Known-empty mirror: report without a store round trip
        if app_store.items().get().is_empty() {
            ctx.notify("Liste déjà vide.");
            return;
        }
        app_store.busy().set(true);
        spawn_local(async move {
            let client = StoreClient::from_config();
            match client.clear_list().await {
                Ok(()) => {
                    ctx.notify("Liste vidée ✅");
                    store::refresh_items(&client, app_store, ctx).await;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("clear list failed: {err}").into());
                    ctx.notify("Erreur: impossible de vider la liste.");
                }
            }
            app_store.busy().set(false);
        });
    };

    view! {
        <div class="list-actions">
            <button class="copy-btn" prop:disabled=disabled on:click=on_copy>
                "📤 Copier / Envoyer à Jo"
            </button>
            <button class="clear-btn" prop:disabled=disabled on:click=on_clear>
                "🧹 Vider la liste"
            </button>
        </div>

        <div class="preview-block">
            <div class="preview-head">
                <p>"Aperçu du message"</p>
                <button class="preview-copy" prop:disabled=disabled on:click=on_copy>
                    "Copier"
                </button>
            </div>
            <pre class="preview-text">{move || preview.get()}</pre>
        </div>
    }
}
