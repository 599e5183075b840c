//! Item List Component
//!
//! Count label, empty state, and one card per item with its detail badges
//! and a delete button. Badge presence rules match the clipboard formatter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::context::AppContext;
use crate::store::{self, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let app_store = use_app_store();

    let count_label = move || {
        if app_store.loading().get() {
            "Chargement…".to_string()
        } else {
            format!("{} article(s)", app_store.items().get().len())
        }
    };

    view! {
        <div class="list-head">
            <h2>"Liste"</h2>
            <span class="list-count">{count_label}</span>
        </div>

        <Show when=move || !app_store.loading().get() && app_store.items().get().is_empty()>
            <div class="empty-state">
                <div class="empty-icon">"🛍️"</div>
                <p>"Ta liste est vide."</p>
                <p class="empty-hint">"Ajoute une référence SHEIN pour commencer."</p>
            </div>
        </Show>

        <div class="item-cards">
            <For
                each=move || app_store.items().get()
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let on_delete = move |_| {
                        if app_store.busy().get() {
                            return;
                        }
                        app_store.busy().set(true);
                        spawn_local(async move {
                            let client = StoreClient::from_config();
                            match client.delete_item(id).await {
                                Ok(()) => {
                                    ctx.notify("Supprimé 🗑️");
                                    store::refresh_items(&client, app_store, ctx).await;
                                }
                                Err(err) => {
                                    web_sys::console::error_1(
                                        &format!("delete item failed: {err}").into(),
                                    );
                                    ctx.notify("Erreur: suppression impossible.");
                                }
                            }
                            app_store.busy().set(false);
                        });
                    };

                    view! {
                        <div class="item-card">
                            <div class="item-main">
                                <div class="item-title">
                                    <span class="item-ref">{item.reference.clone()}</span>
                                    {item.name.clone().map(|name| {
                                        view! { <span class="item-name">{name}</span> }
                                    })}
                                </div>
                                <div class="item-badges">
                                    {item.color.clone().map(|color| {
                                        view! { <span class="badge">"🎨 " {color}</span> }
                                    })}
                                    {item.size.clone().map(|size| {
                                        view! { <span class="badge">"📏 " {size}</span> }
                                    })}
                                    {item.other.clone().map(|other| {
                                        view! { <span class="badge">"📝 " {other}</span> }
                                    })}
                                    <span class="badge">"x" {item.quantity}</span>
                                </div>
                            </div>
                            <button
                                class="delete-btn"
                                title="Supprimer"
                                prop:disabled=move || app_store.busy().get()
                                on:click=on_delete
                            >
                                "🗑️"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
