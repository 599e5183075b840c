//! Clipboard Access
//!
//! Wrappers over `navigator.clipboard`. Both calls can fail on permission
//! grounds; callers surface that as a toast.

use wasm_bindgen_futures::JsFuture;

/// Read the current clipboard text
pub async fn read_text() -> Result<String, String> {
    let clipboard = clipboard()?;
    let value = JsFuture::from(clipboard.read_text())
        .await
        .map_err(|err| format!("clipboard read failed: {err:?}"))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Replace the clipboard contents with `text`
pub async fn write_text(text: &str) -> Result<(), String> {
    let clipboard = clipboard()?;
    JsFuture::from(clipboard.write_text(text))
        .await
        .map_err(|err| format!("clipboard write failed: {err:?}"))?;
    Ok(())
}

fn clipboard() -> Result<web_sys::Clipboard, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    Ok(window.navigator().clipboard())
}
