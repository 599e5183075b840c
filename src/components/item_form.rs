//! Item Form Component
//!
//! Reference-or-link input with paste helper, optional name/size, quantity,
//! and a collapsible color/other block.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::StoreClient;
use crate::clipboard;
use crate::config;
use crate::context::AppContext;
use crate::models::{FormError, NewItem};
use crate::store::{self, use_app_store, AppStateStoreFields};

/// Form for adding a new wishlist item
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let app_store = use_app_store();

    let (ref_or_link, set_ref_or_link) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(1i64);
    let (size, set_size) = signal(String::new());
    let (color, set_color) = signal(String::new());
    let (other, set_other) = signal(String::new());
    let (show_details, set_show_details) = signal(false);

    let busy = move || app_store.busy().get();

    let on_paste = move |_| {
        spawn_local(async move {
            match clipboard::read_text().await {
                Ok(text) => {
                    if text.trim().is_empty() {
                        ctx.notify("Presse-papier vide.");
                    } else {
                        set_ref_or_link.set(text);
                        ctx.notify("Collé ✅");
                    }
                }
                Err(err) => {
                    web_sys::console::error_1(&err.into());
                    ctx.notify("Impossible de lire le presse-papier (permission).");
                }
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }

        let payload = match NewItem::build(
            config::list_code(),
            &ref_or_link.get(),
            &name.get(),
            &color.get(),
            &size.get(),
            &other.get(),
            quantity.get(),
        ) {
            Ok(payload) => payload,
            Err(FormError::EmptyReference) => {
                ctx.notify("Ajoute une référence ou un lien.");
                return;
            }
            Err(FormError::InvalidQuantity) => {
                ctx.notify("Quantité invalide.");
                return;
            }
        };

        app_store.busy().set(true);
        spawn_local(async move {
            let client = StoreClient::from_config();
            match client.insert_item(&payload).await {
                Ok(()) => {
                    set_ref_or_link.set(String::new());
                    set_name.set(String::new());
                    set_color.set(String::new());
                    set_size.set(String::new());
                    set_other.set(String::new());
                    set_quantity.set(1);
                    ctx.notify("Article ajouté ✅");
                    store::refresh_items(&client, app_store, ctx).await;
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("insert item failed: {err}").into());
                    ctx.notify("Erreur: ajout impossible (RLS ou table).");
                }
            }
            app_store.busy().set(false);
        });
    };

    view! {
        <div class="form-head">
            <h2>"Ajouter un article"</h2>
            <button type="button" class="paste-btn" prop:disabled=busy on:click=on_paste>
                "📋 Coller"
            </button>
        </div>

        <form class="item-form" on:submit=on_submit>
            <div class="field">
                <label>"Référence ou lien SHEIN"</label>
                <input
                    type="text"
                    placeholder="Colle une ref (ex: 12345678) ou un lien…"
                    prop:value=move || ref_or_link.get()
                    on:input=move |ev| set_ref_or_link.set(event_target_value(&ev))
                />
                <p class="field-hint">
                    "Si tu colles un lien, on essaie d’extraire l’ID automatiquement."
                </p>
            </div>

            <div class="field">
                <label>"Nom (optionnel)"</label>
                <input
                    type="text"
                    placeholder="Ex: Robe noire"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="field-row">
                <div class="field">
                    <label>"Quantité"</label>
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get().to_string()
                        on:input=move |ev| {
                            // Anything unparsable falls back to 1, like an empty input
                            let parsed = event_target_value(&ev).parse::<i64>().unwrap_or(1);
                            set_quantity.set(parsed.max(1));
                        }
                    />
                </div>
                <div class="field">
                    <label>"Taille (optionnel)"</label>
                    <input
                        type="text"
                        placeholder="S / M / L / 36 / 38…"
                        prop:value=move || size.get()
                        on:input=move |ev| set_size.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <button
                type="button"
                class="details-toggle"
                on:click=move |_| set_show_details.update(|v| *v = !*v)
            >
                {move || {
                    if show_details.get() {
                        "▾ Masquer les détails"
                    } else {
                        "▸ Ajouter des détails (optionnel)"
                    }
                }}
            </button>

            <Show when=move || show_details.get()>
                <div class="details-block">
                    <div class="field">
                        <label>"Couleur (optionnel)"</label>
                        <input
                            type="text"
                            placeholder="Ex: Noir"
                            prop:value=move || color.get()
                            on:input=move |ev| set_color.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Autre (optionnel)"</label>
                        <input
                            type="text"
                            placeholder="Ex: 2ème choix / matière / commentaire…"
                            prop:value=move || other.get()
                            on:input=move |ev| set_other.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </Show>

            <button type="submit" class="submit-btn" prop:disabled=busy>
                {move || if busy() { "..." } else { "Ajouter à la liste" }}
            </button>
        </form>
    }
}
