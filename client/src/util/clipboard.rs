//! Clipboard access for "copy short URL" buttons.
//!
//! Browser-only; SSR paths no-op and report failure.

/// Copy `text` to the system clipboard. Returns `true` once the browser
/// confirms the write; a rejected permission or missing window is `false`.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => true,
            Err(e) => {
                log::warn!("clipboard write rejected: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}
