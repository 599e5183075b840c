//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::StoreClient;
use crate::context::AppContext;
use crate::models::Item;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local mirror of the remote list as of the last successful fetch
    pub items: Vec<Item>,
    /// True while a fetch is in flight
    pub loading: bool,
    /// True while a mutation (add / delete / clear) is in flight
    pub busy: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Re-fetch the full list into the store.
///
/// The one fetch path: runs on mount and after every successful mutation.
/// On failure the previous mirror is kept and a toast is shown; there is no
/// retry.
pub async fn refresh_items(client: &StoreClient, store: AppStore, ctx: AppContext) {
    store.loading().set(true);
    match client.fetch_items().await {
        Ok(items) => store.items().set(items),
        Err(err) => {
            web_sys::console::error_1(&format!("fetch items failed: {err}").into());
            ctx.notify("Erreur: impossible de charger la liste.");
        }
    }
    store.loading().set(false);
}
