//! Build-Time Configuration
//!
//! Values baked in at compile time, with fallbacks for local development.

/// Shared list code scoping every store operation for the session
pub fn list_code() -> &'static str {
    option_env!("SHOPY_LIST_CODE").unwrap_or("shopmom-x")
}

/// Base URL of the Supabase project hosting the `items` table
pub fn store_url() -> &'static str {
    option_env!("SHOPY_SUPABASE_URL").unwrap_or("https://shopymom.supabase.co")
}

/// Anon API key sent with every store request
pub fn store_anon_key() -> &'static str {
    option_env!("SHOPY_SUPABASE_ANON_KEY").unwrap_or("")
}
